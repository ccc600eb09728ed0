//! Review summary types - the payloads exchanged with the summariser backend.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Base URL of the Steam store page for an app
const STORE_BASE: &str = "https://store.steampowered.com/app";

/// Base URL of the Steam CDN hosting header banners
const BANNER_BASE: &str = "https://cdn.akamai.steamstatic.com/steam/apps";

/// Opaque Steam application identifier.
///
/// The backend sends it either as a JSON number or as a string; both are kept
/// verbatim as text. No validation is performed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "RawAppId", into = "String")]
pub struct AppId(String);

#[derive(Deserialize)]
#[serde(untagged)]
enum RawAppId {
    Number(u64),
    Text(String),
}

impl From<RawAppId> for AppId {
    fn from(raw: RawAppId) -> Self {
        match raw {
            RawAppId::Number(n) => AppId(n.to_string()),
            RawAppId::Text(s) => AppId(s),
        }
    }
}

impl From<AppId> for String {
    fn from(id: AppId) -> Self {
        id.0
    }
}

impl From<String> for AppId {
    fn from(s: String) -> Self {
        AppId(s)
    }
}

impl From<&str> for AppId {
    fn from(s: &str) -> Self {
        AppId(s.to_string())
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AppId {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Steam store page for this app
    pub fn store_url(&self) -> String {
        format!("{}/{}/", STORE_BASE, self.0)
    }

    /// Header banner image for this app
    pub fn banner_url(&self) -> String {
        format!("{}/{}/header.jpg", BANNER_BASE, self.0)
    }
}

/// A game returned by the `/search` endpoint, eligible for selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub appid: AppId,
    pub name: String,
}

impl Candidate {
    pub fn new(appid: impl Into<AppId>, name: impl Into<String>) -> Self {
        Self {
            appid: appid.into(),
            name: name.into(),
        }
    }
}

/// What reviewers liked and disliked, as ordered bullet points.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewSummary {
    #[serde(default)]
    pub praised: Vec<String>,
    #[serde(default)]
    pub criticized: Vec<String>,
}

impl ReviewSummary {
    /// Check if the summary has any content
    pub fn is_empty(&self) -> bool {
        self.praised.is_empty() && self.criticized.is_empty()
    }
}

/// Response of the `/summarize` endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryResult {
    /// Display name of the game
    pub game: String,
    pub app_id: AppId,
    pub summary: ReviewSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_id_accepts_numbers_and_strings() {
        let numeric: Candidate = serde_json::from_str(r#"{"appid": 730, "name": "Counter-Strike 2"}"#).unwrap();
        let text: Candidate = serde_json::from_str(r#"{"appid": "730", "name": "Counter-Strike 2"}"#).unwrap();
        assert_eq!(numeric, text);
        assert_eq!(numeric.appid.as_str(), "730");
    }

    #[test]
    fn external_links_use_the_app_id() {
        let id = AppId::from("1145360");
        assert_eq!(id.store_url(), "https://store.steampowered.com/app/1145360/");
        assert_eq!(
            id.banner_url(),
            "https://cdn.akamai.steamstatic.com/steam/apps/1145360/header.jpg"
        );
    }

    #[test]
    fn summary_result_parses_backend_payload() {
        let body = r#"{
            "game": "Hades",
            "app_id": 1145360,
            "summary": { "praised": ["Combat", "Music"], "criticized": ["Grind"] }
        }"#;
        let result: SummaryResult = serde_json::from_str(body).unwrap();
        assert_eq!(result.game, "Hades");
        assert_eq!(result.app_id, AppId::from("1145360"));
        assert_eq!(result.summary.praised, vec!["Combat", "Music"]);
        assert_eq!(result.summary.criticized, vec!["Grind"]);
    }

    #[test]
    fn missing_lists_default_to_empty() {
        let result: SummaryResult =
            serde_json::from_str(r#"{"game": "X", "app_id": 1, "summary": {}}"#).unwrap();
        assert!(result.summary.is_empty());
    }
}
