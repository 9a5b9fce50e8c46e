//! Parameter validation errors.

use thiserror::Error;

use crate::rule::RuleKind;

/// A checker was configured with parameters that cannot be applied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {kind} parameters: {message}")]
pub struct ParameterError {
    /// Rule the parameters belong to.
    pub kind: RuleKind,
    /// What is wrong with them.
    pub message: String,
}

impl ParameterError {
    pub fn new(kind: RuleKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}
