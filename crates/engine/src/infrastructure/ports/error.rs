//! Roster source error type.

use thiserror::Error;

/// Failure to obtain roster data from a source.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// The source could not be read.
    #[error("Roster source unavailable: {0}")]
    Unavailable(String),

    /// Serialization/deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl SourceError {
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }
}

impl From<serde_json::Error> for SourceError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
