//! Unified error types for the domain layer
//!
//! Provides a common error type for character construction, parsing, and
//! checked roster access, so callers never have to fall back to String errors.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., empty name, negative age)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Parse error (for enums and value objects)
    #[error("Parse error: {0}")]
    Parse(String),

    /// Index past the end of an ordered collection
    #[error("Index out of range: {index} (len {len})")]
    OutOfRange { index: usize, len: usize },
}

impl DomainError {
    /// Creates a validation error for rejected constructor arguments.
    ///
    /// # Example
    /// ```
    /// use fellowship_domain::DomainError;
    ///
    /// let err = DomainError::validation("Character name cannot be empty");
    /// assert!(matches!(err, DomainError::Validation(_)));
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Creates a parse error for string-to-type conversion failures.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create an out-of-range error
    pub fn out_of_range(index: usize, len: usize) -> Self {
        Self::OutOfRange { index, len }
    }
}
