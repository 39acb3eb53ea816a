//! Team entity and related types

use chrono::{DateTime, Duration, SubsecRound, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::validation::{validate_team_id, validate_team_name, TeamValidationError};

/// Opaque team identifier, exposed at the HTTP boundary as the "guid"
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TeamId(String);

impl TeamId {
    /// Create a TeamId from an existing guid
    pub fn new(id: impl Into<String>) -> Result<Self, TeamValidationError> {
        let id = id.into();
        validate_team_id(&id)?;
        Ok(Self(id))
    }

    /// Generate a fresh server-side guid
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for TeamId {
    type Error = TeamValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<TeamId> for String {
    fn from(id: TeamId) -> Self {
        id.0
    }
}

impl std::fmt::Display for TeamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Team entity
///
/// `id` and `created_at` are fixed when the team is created. `updated_at`
/// moves forward on every mutation and never precedes `created_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "TeamRecord")]
pub struct Team {
    id: TeamId,
    name: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Wire form of a team; decoding goes through `Team::restore`
#[derive(Deserialize)]
struct TeamRecord {
    id: TeamId,
    name: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<TeamRecord> for Team {
    fn from(record: TeamRecord) -> Self {
        Team::restore(record.id, record.name, record.created_at, record.updated_at)
    }
}

impl Team {
    /// Create a new team with a generated guid and `created_at == updated_at`
    pub fn new(name: impl Into<String>) -> Result<Self, TeamValidationError> {
        let name = name.into();
        validate_team_name(&name)?;
        let now = now();

        Ok(Self {
            id: TeamId::generate(),
            name,
            created_at: now,
            updated_at: now,
        })
    }

    /// Rebuild a team from persisted fields
    pub fn restore(
        id: TeamId,
        name: impl Into<String>,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            created_at,
            updated_at: updated_at.max(created_at),
        }
    }

    pub fn id(&self) -> &TeamId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Rename the team and refresh `updated_at`
    pub fn rename(&mut self, name: impl Into<String>) -> Result<(), TeamValidationError> {
        let name = name.into();
        validate_team_name(&name)?;
        self.name = name;
        self.touch();
        Ok(())
    }

    /// Refresh `updated_at`, strictly advancing it even when the clock has not moved
    pub fn touch(&mut self) {
        let now = now();

        self.updated_at = if now > self.updated_at {
            now
        } else {
            self.updated_at + Duration::microseconds(1)
        };
    }
}

/// Current time at the microsecond precision the relational store keeps
fn now() -> DateTime<Utc> {
    Utc::now().trunc_subsecs(6)
}
