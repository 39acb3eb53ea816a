//! Per-request deadline

use std::time::Duration;

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tokio::time::timeout;

use crate::api::types::ApiError;

/// Abort the handler once `limit` elapses and answer 408 with the usual error body.
///
/// Dropping the handler future cancels any in-flight backend call.
pub async fn timeout_middleware(
    State(limit): State<Duration>,
    request: Request<Body>,
    next: Next,
) -> Response {
    match timeout(limit, next.run(request)).await {
        Ok(response) => response,
        Err(_) => ApiError::new(
            StatusCode::REQUEST_TIMEOUT,
            format!("Request timed out after {}ms", limit.as_millis()),
        )
        .into_response(),
    }
}
