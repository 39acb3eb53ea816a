//! Team resource endpoints

use axum::extract::{Path, State};
use serde::Deserialize;
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, ApiResponse, Json};
use crate::domain::team::{team_not_found_message, Team, TeamId};
use crate::domain::DomainError;

/// Body accepted by `POST /v1/teams`. Client-supplied `id` and timestamps are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateTeamPayload {
    #[serde(default)]
    pub name: String,
}

/// Body accepted by `PATCH /v1/teams/{id}`. Only `name` is settable.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTeamPayload {
    #[serde(default)]
    pub name: Option<String>,
}

/// GET /v1/teams
pub async fn list_teams(State(state): State<AppState>) -> Result<ApiResponse<Vec<Team>>, ApiError> {
    let teams = state.team_repository.list().await?;

    debug!(count = teams.len(), "Listed teams");

    Ok(ApiResponse::ok(teams))
}

/// POST /v1/teams
pub async fn create_team(
    State(state): State<AppState>,
    Json(payload): Json<CreateTeamPayload>,
) -> Result<ApiResponse<Team>, ApiError> {
    let team = Team::new(payload.name).map_err(|e| ApiError::bad_request(e.to_string()))?;

    debug!(id = %team.id(), name = %team.name(), "Creating team");

    let stored = state.team_repository.create(team).await?;

    Ok(ApiResponse::created(stored))
}

/// GET /v1/teams/{id}
pub async fn get_team(
    State(state): State<AppState>,
    Path(guid): Path<String>,
) -> Result<ApiResponse<Team>, ApiError> {
    let team = fetch_team(&state, &guid).await?;

    Ok(ApiResponse::ok(team))
}

/// PATCH /v1/teams/{id}
pub async fn update_team(
    State(state): State<AppState>,
    Path(guid): Path<String>,
    Json(payload): Json<UpdateTeamPayload>,
) -> Result<ApiResponse<Team>, ApiError> {
    let mut team = fetch_team(&state, &guid).await?;

    match payload.name {
        Some(name) => team
            .rename(name)
            .map_err(|e| ApiError::bad_request(e.to_string()))?,
        None => team.touch(),
    }

    debug!(id = %team.id(), name = %team.name(), "Updating team");

    let updated = state
        .team_repository
        .update(team)
        .await
        .map_err(|e| team_error(e, &guid))?;

    Ok(ApiResponse::ok(updated))
}

/// DELETE /v1/teams/{id}
pub async fn delete_team(
    State(state): State<AppState>,
    Path(guid): Path<String>,
) -> Result<ApiResponse<()>, ApiError> {
    let team = fetch_team(&state, &guid).await?;

    debug!(id = %team.id(), "Deleting team");

    state
        .team_repository
        .delete(&team)
        .await
        .map_err(|e| team_error(e, &guid))?;

    Ok(ApiResponse::no_content())
}

/// Resolve a guid to its stored team, distinguishing absence (404) from backend failure (500)
async fn fetch_team(state: &AppState, guid: &str) -> Result<Team, ApiError> {
    // A guid that cannot be a valid id cannot name a stored team either
    let id = TeamId::new(guid).map_err(|_| ApiError::not_found(team_not_found_message(guid)))?;

    state
        .team_repository
        .get(&id)
        .await
        .map_err(|e| team_error(e, guid))
}

fn team_error(err: DomainError, guid: &str) -> ApiError {
    if err.is_not_found() {
        return ApiError::not_found(team_not_found_message(guid));
    }

    ApiError::from(err)
}
