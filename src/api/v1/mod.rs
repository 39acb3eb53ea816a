//! Version 1 API routes

pub mod players;
pub mod teams;

use axum::{routing::get, Router};

use super::state::AppState;

/// Routes mounted under `/v1`
pub fn create_v1_router() -> Router<AppState> {
    Router::new()
        .route("/teams", get(teams::list_teams).post(teams::create_team))
        .route(
            "/teams/{id}",
            get(teams::get_team)
                .patch(teams::update_team)
                .delete(teams::delete_team),
        )
        .route("/player/{player_key}", get(players::get_player))
}
