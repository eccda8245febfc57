//! Character entity - a named member of Middle-earth
//!
//! Characters are plain values: equality compares name, age, and race, never
//! identity. Two records that share a name but differ in age are different
//! characters.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;
use crate::types::Race;
use crate::value_objects::CharacterName;

/// A character with a name, an age in years, and a race
///
/// # Invariants
///
/// - `name` is always non-empty and <= 200 characters (enforced by `CharacterName`)
/// - `age` is never negative (enforced by `u32`)
/// - Fields never change after construction
///
/// # Example
///
/// ```
/// use fellowship_domain::{Character, CharacterName, Race};
///
/// let name = CharacterName::new("Frodo").unwrap();
/// let frodo = Character::new(name, 33, Race::Hobbit);
///
/// assert_eq!(frodo.name().as_str(), "Frodo");
/// assert_eq!(frodo.age(), 33);
/// assert_eq!(frodo.race(), Race::Hobbit);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    name: CharacterName,
    age: u32,
    race: Race,
}

impl Character {
    /// Create a character from pre-validated parts.
    pub fn new(name: CharacterName, age: u32, race: Race) -> Self {
        Self { name, age, race }
    }

    /// Create a character from raw input, validating every field.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the name is empty or too long,
    /// or if the age is negative or does not fit in a `u32`.
    pub fn try_new(name: &str, age: i64, race: Race) -> Result<Self, DomainError> {
        let name = CharacterName::new(name)?;
        if age < 0 {
            return Err(DomainError::validation(format!(
                "Character age cannot be negative: {}",
                age
            )));
        }
        let age = u32::try_from(age).map_err(|_| {
            DomainError::validation(format!("Character age is out of range: {}", age))
        })?;
        Ok(Self::new(name, age, race))
    }

    #[inline]
    pub fn name(&self) -> &CharacterName {
        &self.name
    }

    #[inline]
    pub fn age(&self) -> u32 {
        self.age
    }

    #[inline]
    pub fn race(&self) -> Race {
        self.race
    }

    /// Whether the age fits the lifespan rule of the character's race.
    pub fn has_plausible_age(&self) -> bool {
        self.race.admits_age(self.age)
    }
}

impl fmt::Display for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.name, self.race, self.age)
    }
}
