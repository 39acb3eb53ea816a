//! Success response codec

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// JSON success response. An absent body writes neither a body nor a Content-Type.
#[derive(Debug, Clone)]
pub struct ApiResponse<T> {
    status: StatusCode,
    body: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn new(status: StatusCode, body: Option<T>) -> Self {
        Self { status, body }
    }

    pub fn ok(body: T) -> Self {
        Self::new(StatusCode::OK, Some(body))
    }

    pub fn created(body: T) -> Self {
        Self::new(StatusCode::CREATED, Some(body))
    }

    pub fn no_content() -> Self {
        Self::new(StatusCode::NO_CONTENT, None)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        match self.body {
            Some(body) => (self.status, Json(body)).into_response(),
            None => self.status.into_response(),
        }
    }
}
