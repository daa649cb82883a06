use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KubeAgentConfigError {
    #[error("invalid config check interval `{value}`: {reason}")]
    InvalidConfigCheckInterval { value: String, reason: String },

    #[error("invalid {field} url `{value}`: {source}")]
    InvalidUrl {
        field: &'static str,
        value: String,
        source: url::ParseError,
    },
}
