//! Race classification for Middle-earth characters
//!
//! Race is a closed set. The long-lived races (Elf, Dwarf, Maia) are always
//! older than 100 years; Hobbits and Men are always younger.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Age that separates mortal-span races from long-lived ones.
pub const LONG_LIVED_AGE_THRESHOLD: u32 = 100;

/// A character's race
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Race {
    Hobbit,
    Man,
    Elf,
    Dwarf,
    /// Angelic spirits such as Gandalf
    Maia,
}

impl Race {
    /// All races, in declaration order
    pub fn all() -> &'static [Race] {
        &[Race::Hobbit, Race::Man, Race::Elf, Race::Dwarf, Race::Maia]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Race::Hobbit => "Hobbit",
            Race::Man => "Man",
            Race::Elf => "Elf",
            Race::Dwarf => "Dwarf",
            Race::Maia => "Maia",
        }
    }

    /// Whether members of this race live past [`LONG_LIVED_AGE_THRESHOLD`].
    pub fn is_long_lived(&self) -> bool {
        matches!(self, Race::Elf | Race::Dwarf | Race::Maia)
    }

    /// Checks an age against the race's lifespan rule.
    ///
    /// Mortal races must be strictly younger than the threshold, long-lived
    /// races strictly older.
    pub fn admits_age(&self, age: u32) -> bool {
        if self.is_long_lived() {
            age > LONG_LIVED_AGE_THRESHOLD
        } else {
            age < LONG_LIVED_AGE_THRESHOLD
        }
    }
}

impl fmt::Display for Race {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Race {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "hobbit" => Ok(Race::Hobbit),
            "man" => Ok(Race::Man),
            "elf" => Ok(Race::Elf),
            "dwarf" => Ok(Race::Dwarf),
            "maia" => Ok(Race::Maia),
            _ => Err(DomainError::parse(format!("Unknown race: {}", s))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_long_lived_races() {
        assert!(!Race::Hobbit.is_long_lived());
        assert!(!Race::Man.is_long_lived());
        assert!(Race::Elf.is_long_lived());
        assert!(Race::Dwarf.is_long_lived());
        assert!(Race::Maia.is_long_lived());
    }

    #[test]
    fn test_admits_age_boundary() {
        assert!(Race::Hobbit.admits_age(99));
        assert!(!Race::Hobbit.admits_age(100));
        assert!(!Race::Dwarf.admits_age(100));
        assert!(Race::Dwarf.admits_age(101));
    }

    #[test]
    fn test_from_str_is_case_insensitive() {
        assert_eq!("HOBBIT".parse::<Race>(), Ok(Race::Hobbit));
        assert_eq!(" maia ".parse::<Race>(), Ok(Race::Maia));
        for race in Race::all() {
            assert_eq!(race.to_string().parse::<Race>().as_ref(), Ok(race));
        }
    }

    #[test]
    fn test_from_str_unknown() {
        let err = "orc".parse::<Race>().unwrap_err();
        assert!(matches!(err, DomainError::Parse(_)));
        assert!(err.to_string().contains("orc"));
    }
}
