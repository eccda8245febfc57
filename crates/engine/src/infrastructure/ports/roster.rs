//! Roster source port.

use std::collections::HashMap;

use fellowship_domain::{Character, Ring};
use serde::{Deserialize, Serialize};

use super::error::SourceError;

/// Raw roster contents as delivered by a source.
///
/// `fellowship` is ordered; `ring_bearers` may name characters outside the
/// fellowship.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterData {
    pub fellowship: Vec<Character>,
    #[serde(default)]
    pub ring_bearers: HashMap<Ring, Character>,
}

#[cfg_attr(test, mockall::automock)]
pub trait RosterSource: Send + Sync {
    fn load(&self) -> Result<RosterData, SourceError>;
}
