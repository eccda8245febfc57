//! Fellowship Engine library.
//!
//! ## Structure
//!
//! - `services/` - The roster service
//! - `infrastructure/` - Port traits and their implementations (clock, roster sources)
//! - `config` - Environment-driven configuration

pub mod config;
pub mod infrastructure;
pub mod services;

pub use config::RosterConfig;
pub use infrastructure::clock::SystemClock;
pub use infrastructure::ports::{ClockPort, RosterData, RosterSource, SourceError};
pub use infrastructure::roster_source::{BuiltInRoster, JsonRosterSource};
pub use services::{validate_roster, RosterError, RosterService, UpdateReport};
