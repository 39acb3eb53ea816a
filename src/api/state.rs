//! Application state shared by handlers

use std::sync::Arc;
use std::time::Duration;

use crate::domain::player::PlayerProvider;
use crate::domain::team::TeamRepository;

/// Dependencies injected into every handler.
///
/// Handlers keep no state between requests; the repository owns all team data.
#[derive(Clone)]
pub struct AppState {
    pub team_repository: Arc<dyn TeamRepository>,
    pub player_provider: Arc<dyn PlayerProvider>,
    /// Deadline applied to every request by the router
    pub request_timeout: Duration,
}

impl AppState {
    pub fn new(
        team_repository: Arc<dyn TeamRepository>,
        player_provider: Arc<dyn PlayerProvider>,
    ) -> Self {
        Self {
            team_repository,
            player_provider,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }
}

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(15);
