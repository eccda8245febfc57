//! Infrastructure: port traits and their implementations.

pub mod clock;
pub mod ports;
pub mod roster_source;
