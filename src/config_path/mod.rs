//! Choice of the collector configuration document.
//!
//! The full configuration enables the docker receivers, so it is only picked when the
//! agent's docker endpoint points to a live socket. Anything else, including an empty or
//! malformed endpoint, falls back to the configuration without docker support.
pub mod socket;

use std::path::Path;

use tracing::{debug, info};

use crate::agent::defaults::{
    DOCKER_ENDPOINT_SEPARATOR, OTEL_CONFIG_NO_DOCKER_PATH, OTEL_CONFIG_PATH,
};
use crate::agent::KubeAgent;

pub use self::socket::{SocketChecker, UnixSocketChecker};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigPathDecision {
    WithDockerSupport,
    WithoutDockerSupport,
}

impl ConfigPathDecision {
    pub fn path(&self) -> &'static Path {
        match self {
            ConfigPathDecision::WithDockerSupport => Path::new(OTEL_CONFIG_PATH),
            ConfigPathDecision::WithoutDockerSupport => Path::new(OTEL_CONFIG_NO_DOCKER_PATH),
        }
    }
}

pub struct ConfigPathSelector<S>
where
    S: SocketChecker,
{
    socket_checker: S,
}

impl<S> ConfigPathSelector<S>
where
    S: SocketChecker,
{
    pub fn new(socket_checker: S) -> Self {
        Self { socket_checker }
    }

    /// Never fails: an unusable endpoint means no docker support.
    pub fn select(&self, agent: &KubeAgent) -> ConfigPathDecision {
        let endpoint = agent.docker_endpoint();
        agent.in_logger_scope(|| {
            let decision = self.decide(endpoint);
            info!(
                docker_endpoint = endpoint,
                config_path = %decision.path().display(),
                "collector configuration selected"
            );
            decision
        })
    }

    fn decide(&self, endpoint: &str) -> ConfigPathDecision {
        let segments: Vec<&str> = endpoint.split(DOCKER_ENDPOINT_SEPARATOR).collect();
        let [_, socket_path] = segments.as_slice() else {
            debug!(endpoint, "docker endpoint is not of the form <scheme>://<path>");
            return ConfigPathDecision::WithoutDockerSupport;
        };

        if self.socket_checker.is_socket(Path::new(socket_path)) {
            ConfigPathDecision::WithDockerSupport
        } else {
            debug!(socket_path, "docker socket is not reachable");
            ConfigPathDecision::WithoutDockerSupport
        }
    }
}

impl Default for ConfigPathSelector<UnixSocketChecker> {
    fn default() -> Self {
        Self::new(UnixSocketChecker)
    }
}
