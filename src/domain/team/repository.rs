//! Team repository trait

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

use super::entity::{Team, TeamId};
use crate::domain::DomainError;

/// Persistence capability for teams.
///
/// The repository is the single source of truth for team state. Callers
/// assign ids and timestamps before `create`, and merge onto a freshly
/// fetched record before `update`.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// List all teams. An empty store yields an empty list.
    async fn list(&self) -> Result<Vec<Team>, DomainError>;

    /// Persist a fully populated team and return the stored representation
    async fn create(&self, team: Team) -> Result<Team, DomainError>;

    /// Fetch a team, failing with `DomainError::NotFound` when no record matches
    async fn get(&self, id: &TeamId) -> Result<Team, DomainError>;

    /// Replace the record matching the team's id (last write wins)
    async fn update(&self, team: Team) -> Result<Team, DomainError>;

    /// Remove the record matching the team's id
    async fn delete(&self, team: &Team) -> Result<(), DomainError>;
}

/// Message used whenever a guid does not resolve to a team
pub fn team_not_found_message(id: &str) -> String {
    format!("No team found for guid '{}'", id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_team_not_found_message() {
        assert_eq!(
            team_not_found_message("some-guid"),
            "No team found for guid 'some-guid'"
        );
    }

    #[tokio::test]
    async fn test_mock_team_repository() {
        let mut mock = MockTeamRepository::new();

        mock.expect_list().returning(|| Ok(vec![]));
        mock.expect_get()
            .returning(|id| Err(DomainError::not_found(team_not_found_message(id.as_str()))));

        assert!(mock.list().await.unwrap().is_empty());

        let err = mock.get(&TeamId::new("missing").unwrap()).await.unwrap_err();
        assert!(err.is_not_found());
    }
}
