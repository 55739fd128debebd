//! Domain-level errors.
//!
//! These errors represent rule violations in domain values.
//! They are independent of infrastructure concerns (HTTP, configuration sources).

use thiserror::Error;

/// Domain-specific errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed for a field or input
    #[error("Validation error: {0}")]
    Validation(String),

    /// Supplied credential does not match the shared secret
    #[error("Invalid credentials")]
    InvalidCredentials,
}

impl DomainError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        DomainError::Validation(msg.into())
    }
}

/// Result type alias for domain operations
pub type DomainResult<T> = Result<T, DomainError>;
