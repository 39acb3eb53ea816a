//! Yahoo Fantasy Sports player metadata client

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::Url;
use tracing::debug;

use crate::domain::player::{PlayerKey, PlayerMetadata, PlayerProvider};
use crate::domain::DomainError;

/// Production endpoint for the Yahoo Fantasy Sports API
pub const YAHOO_FANTASY_BASE_URL: &str = "https://fantasysports.yahooapis.com";

const PROVIDER: &str = "yahoo";

/// Relays player metadata requests to Yahoo Fantasy Sports
#[derive(Debug, Clone)]
pub struct YahooPlayerProvider {
    client: reqwest::Client,
    base_url: Url,
    access_token: Option<String>,
}

impl YahooPlayerProvider {
    pub fn new(
        base_url: impl Into<String>,
        access_token: Option<String>,
        timeout: Duration,
    ) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| {
                DomainError::configuration(format!("Failed to build HTTP client: {}", e))
            })?;

        let base_url = base_url.into();
        let base_url = Url::parse(&base_url).map_err(|e| {
            DomainError::configuration(format!("Invalid Yahoo base URL '{}': {}", base_url, e))
        })?;

        if base_url.cannot_be_a_base() {
            return Err(DomainError::configuration(format!(
                "Yahoo base URL '{}' cannot carry a path",
                base_url
            )));
        }

        Ok(Self {
            client,
            base_url,
            access_token,
        })
    }

    /// The key is pushed as a single percent-encoded path segment, so `/`, `?`
    /// and `#` inside it cannot change the upstream resource.
    fn metadata_url(&self, key: &PlayerKey) -> Url {
        let mut url = self.base_url.clone();

        // Checked in `new`
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(["fantasy", "v2", "player"])
                .push(key.as_str())
                .extend(["stats", "metadata"]);
        }

        url
    }
}

#[async_trait]
impl PlayerProvider for YahooPlayerProvider {
    async fn player_metadata(&self, key: &PlayerKey) -> Result<PlayerMetadata, DomainError> {
        let token = self
            .access_token
            .as_deref()
            .filter(|t| !t.is_empty())
            .ok_or_else(|| DomainError::configuration("Yahoo access token is not configured"))?;

        let url = self.metadata_url(key);
        debug!(player_key = %key, url = %url, "Fetching player metadata");

        let response = self
            .client
            .get(url)
            .query(&[("format", "json")])
            .header(AUTHORIZATION, format!("Bearer {}", token))
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| DomainError::provider(PROVIDER, format!("Request failed: {}", e)))?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DomainError::provider(
                PROVIDER,
                format!("Upstream returned {}: {}", status, body),
            ));
        }

        response.json::<PlayerMetadata>().await.map_err(|e| {
            DomainError::provider(PROVIDER, format!("Failed to decode response: {}", e))
        })
    }
}
