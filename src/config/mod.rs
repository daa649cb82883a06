//! Bootstrap settings of the agent, read from an optional YAML file.
pub mod error;
pub mod settings;

pub use self::error::SettingsError;
pub use self::settings::{AgentSettings, SettingsLoader};
