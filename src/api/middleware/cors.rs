//! Cross-origin headers

use axum::{
    body::Body,
    http::{HeaderValue, Method, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

pub const ALLOW_ORIGIN: &str = "*";
pub const ALLOW_HEADERS: &str = "authorization";
pub const ALLOW_METHODS: &str = "PATCH,PUT,POST,OPTIONS,GET,DELETE";

/// Allow any origin on every response; answer `OPTIONS` directly with no body.
pub async fn cors_middleware(request: Request<Body>, next: Next) -> Response {
    if request.method() == Method::OPTIONS {
        let mut response = StatusCode::OK.into_response();
        let headers = response.headers_mut();

        headers.insert(
            "access-control-allow-origin",
            HeaderValue::from_static(ALLOW_ORIGIN),
        );
        headers.insert(
            "access-control-allow-headers",
            HeaderValue::from_static(ALLOW_HEADERS),
        );
        headers.insert(
            "access-control-allow-methods",
            HeaderValue::from_static(ALLOW_METHODS),
        );

        return response;
    }

    let mut response = next.run(request).await;
    response.headers_mut().insert(
        "access-control-allow-origin",
        HeaderValue::from_static(ALLOW_ORIGIN),
    );

    response
}
