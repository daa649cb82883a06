//! Identity and settings of the Kubernetes telemetry agent.
pub mod defaults;
pub mod error;
pub mod options;

use std::fmt::{Debug, Formatter};
use std::path::Path;

use tracing::{debug, dispatcher, Dispatch};
use url::Url;

use crate::config_path::{ConfigPathSelector, UnixSocketChecker};
use crate::context::Context;
use crate::factory::{AssemblyError, CatalogRegistry, ComponentRegistry, Factories};
use crate::logging::Logging;

pub use self::error::KubeAgentConfigError;
pub use self::options::{KubeAgentBuilder, KubeAgentOption};

/// What the collector runtime needs from an agent before it starts.
pub trait Agent {
    /// Collector configuration document the runtime must load.
    fn updated_yaml_path(&self) -> &'static Path;

    /// Factories the runtime wires the configuration document with.
    fn factories(&self, ctx: &Context) -> Result<Factories, AssemblyError>;
}

/// Agent running on a Kubernetes node.
///
/// Built once from an ordered list of [`KubeAgentOption`] and never modified afterwards.
#[derive(Clone)]
pub struct KubeAgent {
    api_key: String,
    target: String,

    enable_synthetic_monitoring: bool,
    config_check_interval: String,

    api_url_for_config_check: String,

    logger: Dispatch,
    docker_endpoint: String,
}

impl KubeAgent {
    /// Applies `options` in order. When none of them sets a logger the production sink
    /// is installed.
    pub fn new(options: impl IntoIterator<Item = KubeAgentOption>) -> Self {
        let mut logger = None;
        let mut agent = Self {
            api_key: String::new(),
            target: String::new(),
            enable_synthetic_monitoring: false,
            config_check_interval: String::new(),
            api_url_for_config_check: String::new(),
            logger: Dispatch::none(),
            docker_endpoint: String::new(),
        };

        for option in options {
            option.apply(&mut agent, &mut logger);
        }
        agent.logger = logger.unwrap_or_else(Logging::production_dispatch);

        agent
    }

    pub fn builder() -> KubeAgentBuilder {
        KubeAgentBuilder::default()
    }

    /// Checks the fields a later consumer would have to parse. Empty fields are accepted.
    pub fn validate(&self) -> Result<(), KubeAgentConfigError> {
        if !self.config_check_interval.is_empty() {
            duration_str::parse(&self.config_check_interval).map_err(|err| {
                KubeAgentConfigError::InvalidConfigCheckInterval {
                    value: self.config_check_interval.clone(),
                    reason: err.to_string(),
                }
            })?;
        }
        validate_url("target", &self.target)?;
        validate_url("config check", &self.api_url_for_config_check)?;
        Ok(())
    }

    pub(crate) fn docker_endpoint(&self) -> &str {
        &self.docker_endpoint
    }

    /// Runs `f` with the agent logger as the default subscriber.
    pub(crate) fn in_logger_scope<T>(&self, f: impl FnOnce() -> T) -> T {
        dispatcher::with_default(&self.logger, f)
    }
}

impl Agent for KubeAgent {
    fn updated_yaml_path(&self) -> &'static Path {
        ConfigPathSelector::new(UnixSocketChecker).select(self).path()
    }

    fn factories(&self, ctx: &Context) -> Result<Factories, AssemblyError> {
        self.in_logger_scope(|| {
            debug!("assembling collector factories");
            CatalogRegistry::default().assemble(ctx)
        })
    }
}

// The api key never reaches the logs.
impl Debug for KubeAgent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let api_key = if self.api_key.is_empty() {
            ""
        } else {
            "<redacted>"
        };
        f.debug_struct("KubeAgent")
            .field("api_key", &api_key)
            .field("target", &self.target)
            .field(
                "enable_synthetic_monitoring",
                &self.enable_synthetic_monitoring,
            )
            .field("config_check_interval", &self.config_check_interval)
            .field("api_url_for_config_check", &self.api_url_for_config_check)
            .field("docker_endpoint", &self.docker_endpoint)
            .finish_non_exhaustive()
    }
}

fn validate_url(field: &'static str, value: &str) -> Result<(), KubeAgentConfigError> {
    if value.is_empty() {
        return Ok(());
    }
    Url::parse(value)
        .map(|_| ())
        .map_err(|source| KubeAgentConfigError::InvalidUrl {
            field,
            value: value.to_string(),
            source,
        })
}
