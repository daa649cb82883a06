use thiserror::Error;

use super::component_type::ComponentTypeError;
use super::ComponentKind;

/// Failure of the factory assembly. Always fatal: the agent cannot advertise a partial
/// or ambiguous set of components.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AssemblyError {
    #[error("duplicate {kind} factory `{name}`")]
    DuplicateComponent { kind: ComponentKind, name: String },

    #[error("invalid {kind} factory `{name}`: {source}")]
    InvalidComponentType {
        kind: ComponentKind,
        name: String,
        source: ComponentTypeError,
    },

    #[error("{kind} factory list contains `{name}` declared as {declared}")]
    MisplacedComponent {
        kind: ComponentKind,
        name: String,
        declared: ComponentKind,
    },

    #[error("factory assembly cancelled")]
    Cancelled,
}
