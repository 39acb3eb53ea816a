//! Health check endpoint

use axum::http::StatusCode;

/// Returns 200 with no body while the process is serving
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}
