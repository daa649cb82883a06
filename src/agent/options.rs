use tracing::Dispatch;

use super::KubeAgent;

/// A single edit of a [`KubeAgent`] field. Options are applied in the order given, so a
/// later option for the same field replaces an earlier one.
#[derive(Debug, Clone)]
pub enum KubeAgentOption {
    /// Key used to authenticate against the backend.
    ApiKey(String),
    /// URL insights are sent to.
    Target(String),
    /// Synthetic monitoring is not supported by the Kubernetes agent, the flag is only kept.
    EnableSyntheticMonitoring(bool),
    /// How often the backend is asked for configuration updates, e.g. `60s`.
    ConfigCheckInterval(String),
    /// URL used by the periodic configuration check.
    ApiUrlForConfigCheck(String),
    Logger(Dispatch),
    /// Where docker listens, e.g. `unix:///var/run/docker.sock`. Decides whether docker
    /// logs and metrics are collected.
    DockerEndpoint(String),
}

impl KubeAgentOption {
    pub(super) fn apply(self, agent: &mut KubeAgent, logger: &mut Option<Dispatch>) {
        match self {
            KubeAgentOption::ApiKey(key) => agent.api_key = key,
            KubeAgentOption::Target(target) => agent.target = target,
            KubeAgentOption::EnableSyntheticMonitoring(enabled) => {
                agent.enable_synthetic_monitoring = enabled
            }
            KubeAgentOption::ConfigCheckInterval(interval) => {
                agent.config_check_interval = interval
            }
            KubeAgentOption::ApiUrlForConfigCheck(url) => agent.api_url_for_config_check = url,
            KubeAgentOption::Logger(dispatch) => *logger = Some(dispatch),
            KubeAgentOption::DockerEndpoint(endpoint) => agent.docker_endpoint = endpoint,
        }
    }
}

/// Chained form of the option list.
///
/// ```
/// use kube_agent::agent::KubeAgentBuilder;
///
/// let agent = KubeAgentBuilder::default()
///     .api_key("secret")
///     .target("https://ingest.example.com")
///     .docker_endpoint("unix:///var/run/docker.sock")
///     .build();
/// ```
#[derive(Debug, Default, Clone)]
pub struct KubeAgentBuilder {
    options: Vec<KubeAgentOption>,
}

impl KubeAgentBuilder {
    pub fn api_key(self, key: impl Into<String>) -> Self {
        self.with(KubeAgentOption::ApiKey(key.into()))
    }

    pub fn target(self, target: impl Into<String>) -> Self {
        self.with(KubeAgentOption::Target(target.into()))
    }

    pub fn enable_synthetic_monitoring(self, enabled: bool) -> Self {
        self.with(KubeAgentOption::EnableSyntheticMonitoring(enabled))
    }

    pub fn config_check_interval(self, interval: impl Into<String>) -> Self {
        self.with(KubeAgentOption::ConfigCheckInterval(interval.into()))
    }

    pub fn api_url_for_config_check(self, url: impl Into<String>) -> Self {
        self.with(KubeAgentOption::ApiUrlForConfigCheck(url.into()))
    }

    pub fn logger(self, logger: Dispatch) -> Self {
        self.with(KubeAgentOption::Logger(logger))
    }

    pub fn docker_endpoint(self, endpoint: impl Into<String>) -> Self {
        self.with(KubeAgentOption::DockerEndpoint(endpoint.into()))
    }

    pub fn with(mut self, option: KubeAgentOption) -> Self {
        self.options.push(option);
        self
    }

    pub fn build(self) -> KubeAgent {
        KubeAgent::new(self.options)
    }
}
