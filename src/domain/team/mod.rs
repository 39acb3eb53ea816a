//! Team domain module
//!
//! A team is the only managed record: a display name addressed by a
//! server-assigned guid, with creation and update timestamps.

mod entity;
mod repository;
mod validation;

pub use entity::{Team, TeamId};
pub use repository::{team_not_found_message, TeamRepository};
pub use validation::{
    validate_team_id, validate_team_name, TeamValidationError, MAX_TEAM_ID_LENGTH,
    MAX_TEAM_NAME_LENGTH,
};

#[cfg(test)]
pub use repository::MockTeamRepository;
