//! Team validation

use thiserror::Error;

/// Errors that can occur during team validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TeamValidationError {
    #[error("Team guid cannot be empty")]
    EmptyId,

    #[error("Team guid cannot exceed {0} characters")]
    IdTooLong(usize),

    #[error("Team name cannot be empty")]
    EmptyName,

    #[error("Team name cannot exceed {0} characters")]
    NameTooLong(usize),
}

pub const MAX_TEAM_ID_LENGTH: usize = 64;
pub const MAX_TEAM_NAME_LENGTH: usize = 100;

/// Validate a team guid. Only emptiness and length are checked, the format stays opaque.
pub fn validate_team_id(id: &str) -> Result<(), TeamValidationError> {
    if id.is_empty() {
        return Err(TeamValidationError::EmptyId);
    }

    if id.len() > MAX_TEAM_ID_LENGTH {
        return Err(TeamValidationError::IdTooLong(MAX_TEAM_ID_LENGTH));
    }

    Ok(())
}

/// Validate a team name
pub fn validate_team_name(name: &str) -> Result<(), TeamValidationError> {
    if name.trim().is_empty() {
        return Err(TeamValidationError::EmptyName);
    }

    if name.chars().count() > MAX_TEAM_NAME_LENGTH {
        return Err(TeamValidationError::NameTooLong(MAX_TEAM_NAME_LENGTH));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_team_id() {
        assert!(validate_team_id("some-guid").is_ok());
        assert!(validate_team_id("1").is_ok());
        assert!(validate_team_id("5b0c2f5e-8d0e-4c43-9a53-0c0f1f0a9d11").is_ok());
    }

    #[test]
    fn test_empty_team_id() {
        assert_eq!(validate_team_id(""), Err(TeamValidationError::EmptyId));
    }

    #[test]
    fn test_team_id_too_long() {
        let long_id = "a".repeat(65);
        assert_eq!(
            validate_team_id(&long_id),
            Err(TeamValidationError::IdTooLong(64))
        );
    }

    #[test]
    fn test_valid_team_name() {
        assert!(validate_team_name("Dynasty").is_ok());
        assert!(validate_team_name("Wolves of Wall St. #2").is_ok());
    }

    #[test]
    fn test_blank_team_name() {
        assert_eq!(validate_team_name(""), Err(TeamValidationError::EmptyName));
        assert_eq!(validate_team_name("   "), Err(TeamValidationError::EmptyName));
    }

    #[test]
    fn test_team_name_too_long() {
        let long_name = "a".repeat(101);
        assert_eq!(
            validate_team_name(&long_name),
            Err(TeamValidationError::NameTooLong(100))
        );
    }
}
