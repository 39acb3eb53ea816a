//! Player metadata document as returned by the fantasy provider

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Provider-specific player key (e.g. `nfl.p.30977`), passed through untouched
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PlayerKey(String);

impl PlayerKey {
    pub fn new(key: impl Into<String>) -> Option<Self> {
        let key = key.into();

        // Dot segments would be dropped from the upstream path
        if key.trim().is_empty() || key == "." || key == ".." {
            return None;
        }

        Some(Self(key))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PlayerKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Top-level player metadata response
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerMetadata {
    #[serde(default)]
    pub fantasy_content: FantasyContent,
}

/// Envelope the provider wraps every resource in
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FantasyContent {
    #[serde(rename = "xml:lang", default)]
    pub xml_lang: String,
    #[serde(rename = "yahoo:uri", default)]
    pub yahoo_uri: String,
    /// Heterogeneous player fragments, kept as raw JSON
    #[serde(default)]
    pub player: Vec<Value>,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub copyright: String,
    #[serde(default)]
    pub refresh_rate: String,
}
