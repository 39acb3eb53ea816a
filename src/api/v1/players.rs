//! Player metadata relay endpoint

use axum::extract::{Path, State};
use tracing::debug;

use crate::api::state::AppState;
use crate::api::types::{ApiError, ApiResponse};
use crate::domain::{PlayerKey, PlayerMetadata};

/// GET /v1/player/{player_key}
pub async fn get_player(
    State(state): State<AppState>,
    Path(player_key): Path<String>,
) -> Result<ApiResponse<PlayerMetadata>, ApiError> {
    let key = PlayerKey::new(player_key)
        .ok_or_else(|| ApiError::bad_request("Invalid player key"))?;

    debug!(player_key = %key, "Fetching player metadata");

    let metadata = state.player_provider.player_metadata(&key).await?;

    Ok(ApiResponse::ok(metadata))
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use axum::{
        body::Body,
        http::{Request, StatusCode},
        Router,
    };
    use serde_json::json;
    use tower::ServiceExt;
    use wiremock::{matchers::method, Mock, MockServer, ResponseTemplate};

    use crate::api::create_router;
    use crate::api::state::AppState;
    use crate::api::types::ApiErrorResponse;
    use crate::domain::player::{FantasyContent, MockPlayerProvider};
    use crate::domain::team::MockTeamRepository;
    use crate::domain::{DomainError, PlayerMetadata};
    use crate::infrastructure::YahooPlayerProvider;

    fn router(provider: MockPlayerProvider) -> Router {
        create_router(AppState::new(
            Arc::new(MockTeamRepository::new()),
            Arc::new(provider),
        ))
    }

    async fn get(router: Router, uri: &str) -> (StatusCode, bytes::Bytes) {
        let response = router
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();

        (status, body)
    }

    #[tokio::test]
    async fn test_get_player_relays_metadata() {
        let mut provider = MockPlayerProvider::new();
        provider
            .expect_player_metadata()
            .withf(|key| key.as_str() == "nfl.p.30977")
            .times(1)
            .returning(|_| {
                Ok(PlayerMetadata {
                    fantasy_content: FantasyContent {
                        xml_lang: "en-US".to_string(),
                        refresh_rate: "60".to_string(),
                        ..Default::default()
                    },
                })
            });

        let (status, body) = get(router(provider), "/v1/player/nfl.p.30977").await;

        assert_eq!(status, StatusCode::OK);

        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["fantasy_content"]["xml:lang"], "en-US");
        assert_eq!(json["fantasy_content"]["refresh_rate"], "60");
    }

    #[tokio::test]
    async fn test_get_player_provider_failure_is_bad_gateway() {
        let mut provider = MockPlayerProvider::new();
        provider
            .expect_player_metadata()
            .returning(|_| Err(DomainError::provider("yahoo", "status 503")));

        let (status, body) = get(router(provider), "/v1/player/nfl.p.30977").await;

        assert_eq!(status, StatusCode::BAD_GATEWAY);

        let error: ApiErrorResponse = serde_json::from_slice(&body).unwrap();
        assert_eq!(error.error, "yahoo: status 503");
    }

    #[tokio::test]
    async fn test_get_player_missing_token_is_internal_error() {
        let mut provider = MockPlayerProvider::new();
        provider
            .expect_player_metadata()
            .returning(|_| Err(DomainError::configuration("Yahoo access token is not configured")));

        let (status, _) = get(router(provider), "/v1/player/nfl.p.30977").await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_get_player_encoded_path_cannot_escape_player_resource() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "fantasy_content": {}
            })))
            .mount(&mock_server)
            .await;

        let provider = YahooPlayerProvider::new(
            mock_server.uri(),
            Some("secret-token".to_string()),
            Duration::from_secs(5),
        )
        .unwrap();
        let router = create_router(AppState::new(
            Arc::new(MockTeamRepository::new()),
            Arc::new(provider),
        ));

        let (status, _) = get(router, "/v1/player/..%2F..%2Fusers;use_login=1%2Fgames%3F").await;
        assert_eq!(status, StatusCode::OK);

        let requests = mock_server.received_requests().await.unwrap();
        assert_eq!(requests.len(), 1);

        let url = &requests[0].url;
        assert!(url.path().starts_with("/fantasy/v2/player/"));
        assert!(url.path().ends_with("/stats/metadata"));
        assert_eq!(url.query(), Some("format=json"));
    }

    #[tokio::test]
    async fn test_get_player_blank_key_is_bad_request() {
        let mut provider = MockPlayerProvider::new();
        provider.expect_player_metadata().never();

        let (status, _) = get(router(provider), "/v1/player/%20").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_get_player_dot_segment_key_is_bad_request() {
        let mut provider = MockPlayerProvider::new();
        provider.expect_player_metadata().never();

        let (status, _) = get(router(provider), "/v1/player/%2E%2E").await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
