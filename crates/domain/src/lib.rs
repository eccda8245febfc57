pub mod entities;
pub mod error;
pub mod types;
pub mod value_objects;

pub use entities::Character;
pub use error::DomainError;
pub use types::{Race, Ring};
pub use value_objects::CharacterName;
