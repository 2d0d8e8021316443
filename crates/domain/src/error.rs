//! Unified error type for the domain layer

use thiserror::Error;

/// Error raised when a value object rejects its input
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., empty identifier)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Parse error (for value objects built from strings)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Creates a validation error for a rejected field value.
    ///
    /// # Example
    /// ```ignore
    /// if raw.is_empty() {
    ///     return Err(DomainError::validation("Zone id cannot be empty"));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a parse error
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}
