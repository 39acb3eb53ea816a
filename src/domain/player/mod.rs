//! Player domain module
//!
//! Player metadata is owned by the external fantasy provider; this service
//! only relays it.

mod entity;
mod provider;

pub use entity::{FantasyContent, PlayerKey, PlayerMetadata};
pub use provider::PlayerProvider;

#[cfg(test)]
pub use provider::MockPlayerProvider;
