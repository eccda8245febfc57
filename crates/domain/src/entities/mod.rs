//! Domain entities

mod character;

pub use character::Character;
