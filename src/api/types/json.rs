//! JSON body extractor that reports decode failures through the API error format

use axum::{
    extract::{FromRequest, Request},
    http::StatusCode,
};
use bytes::Bytes;
use serde::de::DeserializeOwned;

use super::error::ApiError;

/// Request body decoded as JSON.
///
/// The Content-Type header is not checked; an empty body or malformed JSON is
/// rejected with 400 before the handler runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct Json<T>(pub T);

impl<T> Json<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<S, T> FromRequest<S> for Json<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state).await.map_err(|rejection| {
            let status = match rejection.status() {
                StatusCode::PAYLOAD_TOO_LARGE => StatusCode::PAYLOAD_TOO_LARGE,
                _ => StatusCode::BAD_REQUEST,
            };
            ApiError::new(
                status,
                format!("Failed to read request body: {}", rejection.body_text()),
            )
        })?;

        decode(&bytes).map(Json)
    }
}

/// Decode a JSON document, mapping every failure to a 400
pub fn decode<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, ApiError> {
    serde_json::from_slice(bytes)
        .map_err(|e| ApiError::bad_request(format!("Invalid JSON body: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Payload {
        name: String,
    }

    async fn extract(body: &'static str) -> Result<Json<Payload>, ApiError> {
        let request = axum::http::Request::builder()
            .method("POST")
            .uri("/")
            .body(Body::from(body))
            .unwrap();

        Json::<Payload>::from_request(request, &()).await
    }

    #[tokio::test]
    async fn test_decodes_without_content_type() {
        let Json(payload) = extract(r#"{"name":"Dynasty"}"#).await.unwrap();
        assert_eq!(payload.name, "Dynasty");
    }

    #[tokio::test]
    async fn test_empty_body_is_bad_request() {
        let err = extract("").await.unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
        assert!(err.message.contains("EOF"));
    }

    #[tokio::test]
    async fn test_malformed_body_is_bad_request() {
        let err = extract("{bad:json}").await.unwrap_err();
        assert_eq!(err.status, StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_into_inner() {
        assert_eq!(Json(42).into_inner(), 42);
    }
}
