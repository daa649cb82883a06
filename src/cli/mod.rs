use std::path::PathBuf;

use clap::Parser;

use crate::agent::KubeAgentOption;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)] // Read from `Cargo.toml`
pub struct Cli {
    /// Optional YAML file with agent settings. Flags take precedence over it.
    #[arg(short, long, env = "MW_AGENT_SETTINGS")]
    config: Option<PathBuf>,

    /// Key used to authenticate against the backend.
    #[arg(long, env = "MW_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// URL insights are sent to.
    #[arg(long, env = "MW_TARGET")]
    target: Option<String>,

    /// Not supported by the Kubernetes agent.
    #[arg(long, env = "MW_ENABLE_SYNTHETIC_MONITORING")]
    enable_synthetic_monitoring: Option<bool>,

    /// How often the backend is checked for configuration updates, e.g. 60s.
    #[arg(long, env = "MW_CONFIG_CHECK_INTERVAL")]
    config_check_interval: Option<String>,

    #[arg(long, env = "MW_API_URL_FOR_CONFIG_CHECK")]
    api_url_for_config_check: Option<String>,

    /// Docker endpoint, e.g. unix:///var/run/docker.sock
    #[arg(long, env = "MW_DOCKER_ENDPOINT")]
    docker_endpoint: Option<String>,
}

impl Cli {
    /// Parses command line arguments
    pub fn init_kube_agent_cli() -> Self {
        // Get command line args
        Self::parse()
    }

    pub fn get_config(&self) -> Option<PathBuf> {
        self.config.clone()
    }

    /// Options given through flags or environment, in declaration order.
    pub fn options(&self) -> Vec<KubeAgentOption> {
        [
            self.api_key.clone().map(KubeAgentOption::ApiKey),
            self.target.clone().map(KubeAgentOption::Target),
            self.enable_synthetic_monitoring
                .map(KubeAgentOption::EnableSyntheticMonitoring),
            self.config_check_interval
                .clone()
                .map(KubeAgentOption::ConfigCheckInterval),
            self.api_url_for_config_check
                .clone()
                .map(KubeAgentOption::ApiUrlForConfigCheck),
            self.docker_endpoint
                .clone()
                .map(KubeAgentOption::DockerEndpoint),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}
