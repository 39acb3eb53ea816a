//! Domain layer - Core entities and capability traits

pub mod error;
pub mod player;
pub mod team;

pub use error::DomainError;
pub use player::{PlayerKey, PlayerMetadata, PlayerProvider};
pub use team::{Team, TeamId, TeamRepository, TeamValidationError};
