//! Player metadata provider trait

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use super::entity::{PlayerKey, PlayerMetadata};
use crate::domain::DomainError;

/// Source of player metadata
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PlayerProvider: Send + Sync {
    /// Fetch stats metadata for a single player
    async fn player_metadata(&self, key: &PlayerKey) -> Result<PlayerMetadata, DomainError>;
}
