//! Validated name newtype for characters
//!
//! `CharacterName` is valid by construction:
//! - Non-empty
//! - Within length limits
//! - Trimmed of leading/trailing whitespace

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Maximum length for a character name
const MAX_NAME_LENGTH: usize = 200;

/// A validated character name (non-empty, <=200 chars, trimmed)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CharacterName(String);

impl CharacterName {
    /// Create a new validated character name.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if:
    /// - The name is empty after trimming
    /// - The name exceeds 200 characters after trimming
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(DomainError::validation("Character name cannot be empty"));
        }
        if trimmed.chars().count() > MAX_NAME_LENGTH {
            return Err(DomainError::validation(format!(
                "Character name cannot exceed {} characters",
                MAX_NAME_LENGTH
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CharacterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<String> for CharacterName {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::new(s)
    }
}

impl From<CharacterName> for String {
    fn from(name: CharacterName) -> String {
        name.0
    }
}

impl AsRef<str> for CharacterName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_name_is_trimmed() {
        let name = CharacterName::new("  Frodo  ").unwrap();
        assert_eq!(name.as_str(), "Frodo");
        assert_eq!(name.to_string(), "Frodo");
    }

    #[test]
    fn test_empty_name_rejected() {
        assert!(matches!(
            CharacterName::new(""),
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            CharacterName::new("   "),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn test_overlong_name_rejected() {
        let at_limit = "a".repeat(MAX_NAME_LENGTH);
        assert!(CharacterName::new(at_limit).is_ok());

        let too_long = "a".repeat(MAX_NAME_LENGTH + 1);
        let err = CharacterName::new(too_long).unwrap_err();
        assert!(err.to_string().contains("200"));
    }

    #[test]
    fn test_serde_rejects_empty_name() {
        let ok: CharacterName = serde_json::from_str("\"Sam\"").unwrap();
        assert_eq!(ok.as_str(), "Sam");

        let result: Result<CharacterName, _> = serde_json::from_str("\"\"");
        assert!(result.is_err());
    }
}
