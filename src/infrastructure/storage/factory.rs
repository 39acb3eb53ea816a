//! Storage factory for runtime backend selection

use std::sync::Arc;

use tracing::info;

use crate::config::StorageSettings;
use crate::domain::team::TeamRepository;
use crate::domain::DomainError;
use crate::infrastructure::team::{InMemoryTeamRepository, PostgresTeamRepository};

use super::postgres::PostgresConfig;

/// Supported storage backends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageType {
    /// In-memory storage (for testing/development)
    InMemory,
    /// PostgreSQL storage
    Postgres,
}

impl StorageType {
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "memory" | "inmemory" | "in-memory" | "in_memory" => Some(Self::InMemory),
            "postgres" | "postgresql" | "pg" => Some(Self::Postgres),
            _ => None,
        }
    }
}

/// Factory for the team repository
#[derive(Debug)]
pub struct StorageFactory;

impl StorageFactory {
    /// Build the team repository described by the storage settings
    pub async fn team_repository(
        settings: &StorageSettings,
    ) -> Result<Arc<dyn TeamRepository>, DomainError> {
        let backend = StorageType::parse(&settings.backend).ok_or_else(|| {
            DomainError::configuration(format!(
                "Unknown storage backend '{}'",
                settings.backend
            ))
        })?;

        info!(backend = ?backend, "Initializing team storage");

        match backend {
            StorageType::InMemory => Ok(Arc::new(InMemoryTeamRepository::new())),
            StorageType::Postgres => {
                let url = settings.resolved_database_url().ok_or_else(|| {
                    DomainError::configuration(
                        "storage.database_url or DATABASE_URL is required for postgres storage",
                    )
                })?;

                let pool = PostgresConfig::new(url)
                    .with_max_connections(settings.max_connections)
                    .with_connect_timeout(settings.connect_timeout_secs)
                    .connect()
                    .await?;

                Ok(Arc::new(PostgresTeamRepository::with_schema(pool).await?))
            }
        }
    }
}
