//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    /// Input rejected at the validation boundary, before evaluation.
    #[error("Invalid input for `{field}`: {reason}")]
    InvalidInput { field: &'static str, reason: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("UI error: {0}")]
    Ui(String),

    #[error("Render error: {0}")]
    Render(String),
}

impl DomainError {
    pub fn invalid_input(field: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field,
            reason: reason.into(),
        }
    }
}
