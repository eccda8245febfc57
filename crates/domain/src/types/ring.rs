//! Rings of power that can be borne by a character

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ring {
    OneRing,
    Narya,
    Nenya,
    Vilya,
}

impl Ring {
    pub fn all() -> &'static [Ring] {
        &[Ring::OneRing, Ring::Narya, Ring::Nenya, Ring::Vilya]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Ring::OneRing => "The One Ring",
            Ring::Narya => "Narya",
            Ring::Nenya => "Nenya",
            Ring::Vilya => "Vilya",
        }
    }
}

impl fmt::Display for Ring {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for Ring {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "one_ring" | "onering" | "the one ring" => Ok(Ring::OneRing),
            "narya" => Ok(Ring::Narya),
            "nenya" => Ok(Ring::Nenya),
            "vilya" => Ok(Ring::Vilya),
            _ => Err(DomainError::parse(format!("Unknown ring: {}", s))),
        }
    }
}
