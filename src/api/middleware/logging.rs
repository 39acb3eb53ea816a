//! Request logging middleware

use std::time::Instant;

use axum::{body::Body, http::Request, middleware::Next, response::Response};
use tracing::{debug, error, info, warn};

use crate::api::types::ErrorMessage;

/// Log each request on completion. Failed requests are logged once with
/// method, path, status and the error message carried by the response.
///
/// No span is opened here; `TraceLayer` owns request spans.
pub async fn logging_middleware(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    debug!(method = %method, path = %path, "Incoming request");

    let response = next.run(request).await;

    let status = response.status();
    let duration_ms = start.elapsed().as_millis();

    match response.extensions().get::<ErrorMessage>() {
        Some(ErrorMessage(message)) if status.is_server_error() => {
            error!(
                method = %method,
                path = %path,
                status = status.as_u16(),
                duration_ms = %duration_ms,
                error = %message,
                "Request failed"
            );
        }
        Some(ErrorMessage(message)) => {
            warn!(
                method = %method,
                path = %path,
                status = status.as_u16(),
                duration_ms = %duration_ms,
                error = %message,
                "Request rejected"
            );
        }
        None => {
            info!(
                method = %method,
                path = %path,
                status = status.as_u16(),
                duration_ms = %duration_ms,
                "Request completed"
            );
        }
    }

    response
}
