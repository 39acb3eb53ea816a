//! Wolf Dynasty API
//!
//! HTTP service for fantasy football dynasty teams:
//! - Team CRUD over a pluggable repository (in-memory or PostgreSQL)
//! - Player metadata relayed from Yahoo Fantasy Sports

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use tracing::info;

use api::state::AppState;
use infrastructure::{StorageFactory, YahooPlayerProvider};

/// Create application state with in-memory storage and default settings
pub async fn create_app_state() -> anyhow::Result<AppState> {
    create_app_state_with_config(&AppConfig::default()).await
}

/// Create application state from the loaded configuration
pub async fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    let team_repository = StorageFactory::team_repository(&config.storage).await?;

    if config.yahoo.access_token.is_none() {
        info!("No Yahoo access token configured, player endpoints will fail");
    }

    let player_provider = YahooPlayerProvider::new(
        &config.yahoo.base_url,
        config.yahoo.access_token.clone(),
        config.yahoo.timeout(),
    )?;

    Ok(AppState::new(team_repository, Arc::new(player_provider))
        .with_request_timeout(config.server.request_timeout()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TeamRepository;

    #[tokio::test]
    async fn test_create_app_state_defaults_to_memory() {
        let state = create_app_state().await.unwrap();

        assert!(state.team_repository.list().await.unwrap().is_empty());
        assert_eq!(state.request_timeout, AppConfig::default().server.request_timeout());
    }

    #[tokio::test]
    async fn test_unknown_backend_is_rejected() {
        let mut config = AppConfig::default();
        config.storage.backend = "cassandra".to_string();

        assert!(create_app_state_with_config(&config).await.is_err());
    }
}
