//! Port traits for the roster engine.
//!
//! Ports are the seams where time and roster data enter the service, so tests
//! can substitute mocks for the system clock and the built-in data.

mod error;
mod roster;
mod testing;

pub use error::SourceError;
pub use roster::{RosterData, RosterSource};
pub use testing::ClockPort;

#[cfg(test)]
pub use roster::MockRosterSource;
#[cfg(test)]
pub use testing::MockClockPort;
