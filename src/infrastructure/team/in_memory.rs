//! In-memory team repository

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use crate::domain::team::{team_not_found_message, Team, TeamId, TeamRepository};
use crate::domain::DomainError;

/// Thread-safe in-memory implementation of TeamRepository
///
/// Useful for development and tests. Data is lost when the process terminates.
#[derive(Debug, Default)]
pub struct InMemoryTeamRepository {
    teams: RwLock<HashMap<String, Team>>,
}

impl InMemoryTeamRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-populated with teams
    pub fn with_teams(teams: Vec<Team>) -> Self {
        let map = teams
            .into_iter()
            .map(|team| (team.id().as_str().to_string(), team))
            .collect();

        Self {
            teams: RwLock::new(map),
        }
    }
}

#[async_trait]
impl TeamRepository for InMemoryTeamRepository {
    async fn list(&self) -> Result<Vec<Team>, DomainError> {
        let teams = self.teams.read().map_err(|e| {
            DomainError::storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let mut result: Vec<Team> = teams.values().cloned().collect();
        result.sort_by(|a, b| {
            a.created_at()
                .cmp(&b.created_at())
                .then_with(|| a.id().as_str().cmp(b.id().as_str()))
        });

        Ok(result)
    }

    async fn create(&self, team: Team) -> Result<Team, DomainError> {
        let key = team.id().as_str().to_string();
        let mut teams = self.teams.write().map_err(|e| {
            DomainError::storage(format!("Failed to acquire write lock: {}", e))
        })?;

        if teams.contains_key(&key) {
            return Err(DomainError::storage(format!(
                "Team with guid '{}' already exists",
                key
            )));
        }

        teams.insert(key, team.clone());
        Ok(team)
    }

    async fn get(&self, id: &TeamId) -> Result<Team, DomainError> {
        let teams = self.teams.read().map_err(|e| {
            DomainError::storage(format!("Failed to acquire read lock: {}", e))
        })?;

        teams
            .get(id.as_str())
            .cloned()
            .ok_or_else(|| DomainError::not_found(team_not_found_message(id.as_str())))
    }

    async fn update(&self, team: Team) -> Result<Team, DomainError> {
        let key = team.id().as_str().to_string();
        let mut teams = self.teams.write().map_err(|e| {
            DomainError::storage(format!("Failed to acquire write lock: {}", e))
        })?;

        match teams.get_mut(&key) {
            Some(existing) => {
                *existing = team.clone();
                Ok(team)
            }
            None => Err(DomainError::not_found(team_not_found_message(&key))),
        }
    }

    async fn delete(&self, team: &Team) -> Result<(), DomainError> {
        let mut teams = self.teams.write().map_err(|e| {
            DomainError::storage(format!("Failed to acquire write lock: {}", e))
        })?;

        teams.remove(team.id().as_str());
        Ok(())
    }
}
