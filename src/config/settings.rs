use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use super::error::SettingsError;
use crate::agent::KubeAgentOption;
use crate::file_reader::{FSFileReader, FileReader};

/// Agent settings as written in the bootstrap file. Every key is optional, only the present
/// ones become options.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AgentSettings {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub target: Option<String>,
    #[serde(default)]
    pub enable_synthetic_monitoring: Option<bool>,
    #[serde(default)]
    pub config_check_interval: Option<String>,
    #[serde(default)]
    pub api_url_for_config_check: Option<String>,
    #[serde(default)]
    pub docker_endpoint: Option<String>,
}

impl AgentSettings {
    pub fn into_options(self) -> Vec<KubeAgentOption> {
        [
            self.api_key.map(KubeAgentOption::ApiKey),
            self.target.map(KubeAgentOption::Target),
            self.enable_synthetic_monitoring
                .map(KubeAgentOption::EnableSyntheticMonitoring),
            self.config_check_interval
                .map(KubeAgentOption::ConfigCheckInterval),
            self.api_url_for_config_check
                .map(KubeAgentOption::ApiUrlForConfigCheck),
            self.docker_endpoint.map(KubeAgentOption::DockerEndpoint),
        ]
        .into_iter()
        .flatten()
        .collect()
    }
}

pub struct SettingsLoader<F = FSFileReader>
where
    F: FileReader,
{
    file_reader: F,
}

impl<F> SettingsLoader<F>
where
    F: FileReader,
{
    pub fn new(file_reader: F) -> Self {
        Self { file_reader }
    }

    pub fn load(&self, path: &Path) -> Result<AgentSettings, SettingsError> {
        debug!(path = %path.display(), "loading agent settings");
        let content = self.file_reader.read(path)?;
        Ok(serde_yaml::from_str(&content)?)
    }
}

impl Default for SettingsLoader<FSFileReader> {
    fn default() -> Self {
        Self::new(FSFileReader)
    }
}
