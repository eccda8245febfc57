//! Closed vocabulary types shared by entities and services.

mod race;
mod ring;

pub use race::Race;
pub use ring::Ring;
