use axum::{middleware, routing::get, Router};
use tower_http::trace::TraceLayer;

use super::health;
use super::middleware::{cors_middleware, logging_middleware, timeout_middleware};
use super::state::AppState;
use super::v1;

/// Create the full router with application state
pub fn create_router(state: AppState) -> Router {
    let request_timeout = state.request_timeout;

    Router::new()
        .route("/health", get(health::health_check))
        .nest("/v1", v1::create_v1_router())
        .with_state(state)
        // Innermost, so a timeout is still logged and carries CORS headers
        .layer(middleware::from_fn_with_state(
            request_timeout,
            timeout_middleware,
        ))
        .layer(middleware::from_fn(logging_middleware))
        // Wraps every route so OPTIONS is answered before method dispatch
        .layer(middleware::from_fn(cors_middleware))
        .layer(TraceLayer::new_for_http())
}
