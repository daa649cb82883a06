use std::borrow::Borrow;
use std::fmt::{Display, Formatter};

use thiserror::Error;

const MAX_TYPE_LENGTH: usize = 63;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ComponentTypeError {
    #[error("component type cannot be empty")]
    Empty,
    #[error("component type is longer than 63 characters")]
    TooLong,
    #[error("component type must start with an ASCII letter")]
    InvalidStart,
    #[error("component type contains invalid character `{0}`")]
    InvalidCharacter(char),
}

/// Name a factory registers its component under, e.g. `otlp` or `memory_limiter`.
///
/// Starts with an ASCII letter, followed by ASCII letters, digits or `_`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ComponentType(String);

impl ComponentType {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for ComponentType {
    type Error = ComponentTypeError;

    fn try_from(name: &str) -> Result<Self, Self::Error> {
        let mut chars = name.chars();
        match chars.next() {
            None => return Err(ComponentTypeError::Empty),
            Some(first) if !first.is_ascii_alphabetic() => {
                return Err(ComponentTypeError::InvalidStart)
            }
            Some(_) => {}
        }
        if name.len() > MAX_TYPE_LENGTH {
            return Err(ComponentTypeError::TooLong);
        }
        if let Some(invalid) = chars.find(|c| !(c.is_ascii_alphanumeric() || *c == '_')) {
            return Err(ComponentTypeError::InvalidCharacter(invalid));
        }
        Ok(Self(name.to_string()))
    }
}

// Lets factory maps be queried with plain names.
impl Borrow<str> for ComponentType {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl Display for ComponentType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
