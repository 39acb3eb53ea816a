//! PostgreSQL team repository implementation

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use tracing::debug;

use crate::domain::team::{team_not_found_message, Team, TeamId, TeamRepository};
use crate::domain::DomainError;

const CREATE_TEAMS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS teams (
        id VARCHAR(64) PRIMARY KEY,
        name TEXT NOT NULL,
        created_at TIMESTAMPTZ NOT NULL,
        updated_at TIMESTAMPTZ NOT NULL
    )
"#;

/// PostgreSQL implementation of TeamRepository
#[derive(Debug, Clone)]
pub struct PostgresTeamRepository {
    pool: PgPool,
}

impl PostgresTeamRepository {
    /// Create a repository over an existing pool without touching the schema
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a repository and make sure the `teams` table exists
    pub async fn with_schema(pool: PgPool) -> Result<Self, DomainError> {
        let repository = Self::new(pool);
        repository.ensure_table().await?;
        Ok(repository)
    }

    pub async fn ensure_table(&self) -> Result<(), DomainError> {
        debug!("Ensuring teams table exists");

        sqlx::query(CREATE_TEAMS_TABLE)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to create teams table: {}", e)))?;

        Ok(())
    }
}

#[async_trait]
impl TeamRepository for PostgresTeamRepository {
    async fn list(&self) -> Result<Vec<Team>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, created_at, updated_at
            FROM teams
            ORDER BY created_at, id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to list teams: {}", e)))?;

        rows.iter().map(row_to_team).collect()
    }

    async fn create(&self, team: Team) -> Result<Team, DomainError> {
        let row = sqlx::query(
            r#"
            INSERT INTO teams (id, name, created_at, updated_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, created_at, updated_at
            "#,
        )
        .bind(team.id().as_str())
        .bind(team.name())
        .bind(team.created_at())
        .bind(team.updated_at())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to create team: {}", e)))?;

        row_to_team(&row)
    }

    async fn get(&self, id: &TeamId) -> Result<Team, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, name, created_at, updated_at
            FROM teams
            WHERE id = $1
            "#,
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to get team: {}", e)))?;

        match row {
            Some(row) => row_to_team(&row),
            None => Err(DomainError::not_found(team_not_found_message(id.as_str()))),
        }
    }

    async fn update(&self, team: Team) -> Result<Team, DomainError> {
        let row = sqlx::query(
            r#"
            UPDATE teams
            SET name = $2, updated_at = $3
            WHERE id = $1
            RETURNING id, name, created_at, updated_at
            "#,
        )
        .bind(team.id().as_str())
        .bind(team.name())
        .bind(team.updated_at())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to update team: {}", e)))?;

        match row {
            Some(row) => row_to_team(&row),
            None => Err(DomainError::not_found(team_not_found_message(
                team.id().as_str(),
            ))),
        }
    }

    async fn delete(&self, team: &Team) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM teams WHERE id = $1")
            .bind(team.id().as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to delete team: {}", e)))?;

        debug!(id = %team.id(), rows = result.rows_affected(), "Deleted team");

        Ok(())
    }
}

fn row_to_team(row: &PgRow) -> Result<Team, DomainError> {
    let id: String = column(row, "id")?;
    let name: String = column(row, "name")?;
    let created_at: DateTime<Utc> = column(row, "created_at")?;
    let updated_at: DateTime<Utc> = column(row, "updated_at")?;

    let team_id = TeamId::new(id)
        .map_err(|e| DomainError::storage(format!("Invalid team guid in database: {}", e)))?;

    Ok(Team::restore(team_id, name, created_at, updated_at))
}

fn column<'r, T>(row: &'r PgRow, name: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, sqlx::Postgres> + sqlx::Type<sqlx::Postgres>,
{
    row.try_get(name)
        .map_err(|e| DomainError::storage(format!("Failed to read column '{}': {}", name, e)))
}
