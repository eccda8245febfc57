//! Application services.

mod roster_service;

pub use roster_service::{validate_roster, RosterError, RosterService, UpdateReport};
