//! Roster sources: the built-in fellowship and JSON documents.

use std::collections::HashMap;

use fellowship_domain::{Character, CharacterName, Race, Ring};

use crate::infrastructure::ports::{RosterData, RosterSource, SourceError};

/// The fixed Fellowship of the Ring, in the order the company set out from
/// Rivendell, plus the bearers of the four named rings.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltInRoster;

impl BuiltInRoster {
    pub fn new() -> Self {
        Self
    }

    pub fn data(&self) -> RosterData {
        let frodo = member("Frodo", 33, Race::Hobbit);
        let gandalf = member("Gandalf", 2020, Race::Maia);

        let fellowship = vec![
            frodo.clone(),
            member("Sam", 38, Race::Hobbit),
            member("Merry", 36, Race::Hobbit),
            member("Pippin", 28, Race::Hobbit),
            gandalf.clone(),
            member("Legolas", 3000, Race::Elf),
            member("Gimli", 139, Race::Dwarf),
            member("Aragorn", 87, Race::Man),
            member("Boromir", 37, Race::Man),
        ];

        let ring_bearers = HashMap::from([
            (Ring::OneRing, frodo),
            (Ring::Narya, gandalf),
            (Ring::Nenya, member("Galadriel", 3000, Race::Elf)),
            (Ring::Vilya, member("Elrond", 3000, Race::Elf)),
        ]);

        RosterData {
            fellowship,
            ring_bearers,
        }
    }
}

impl RosterSource for BuiltInRoster {
    fn load(&self) -> Result<RosterData, SourceError> {
        Ok(self.data())
    }
}

fn member(name: &'static str, age: u32, race: Race) -> Character {
    let name = CharacterName::new(name).expect("built-in character names are non-empty");
    Character::new(name, age, race)
}

/// Roster data parsed from a JSON document.
///
/// The document is parsed on every `load`, so a malformed document surfaces
/// as a `SourceError` at load time rather than at construction.
///
/// ```json
/// {
///   "fellowship": [{"name": "Frodo", "age": 33, "race": "Hobbit"}],
///   "ringBearers": {"OneRing": {"name": "Frodo", "age": 33, "race": "Hobbit"}}
/// }
/// ```
#[derive(Debug, Clone)]
pub struct JsonRosterSource {
    document: String,
}

impl JsonRosterSource {
    pub fn new(document: impl Into<String>) -> Self {
        Self {
            document: document.into(),
        }
    }

    /// Serializes existing roster data into a source.
    pub fn from_data(data: &RosterData) -> Result<Self, SourceError> {
        Ok(Self::new(serde_json::to_string(data)?))
    }
}

impl RosterSource for JsonRosterSource {
    fn load(&self) -> Result<RosterData, SourceError> {
        Ok(serde_json::from_str(&self.document)?)
    }
}
