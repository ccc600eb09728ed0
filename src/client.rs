//! HTTP client for the review summariser backend.
//!
//! Uses reqwest for the `/search` and `/summarize` endpoints.

use crate::config::Config;
use crate::summary::{AppId, Candidate, SummaryResult};
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;

/// User-Agent string identifying this client
const USER_AGENT: &str = concat!("steamsum/", env!("CARGO_PKG_VERSION"));

/// Shown when the backend has no reviews for the requested app
pub const NOT_FOUND_MESSAGE: &str = "Game not found. Check the name and try again.";

/// Shown for any other unsuccessful response status
pub const GENERIC_FAILURE_MESSAGE: &str = "Something went wrong. Please try again.";

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("game not found")]
    NotFound,
    #[error("backend responded with status {0}")]
    Status(StatusCode),
    #[error("{0}")]
    Request(#[from] reqwest::Error),
    #[error("invalid backend URL: {0}")]
    InvalidUrl(String),
}

impl ApiError {
    /// The single line shown to the user for a failed summary request
    pub fn user_message(&self) -> String {
        match self {
            ApiError::NotFound => NOT_FOUND_MESSAGE.to_string(),
            ApiError::Status(_) => GENERIC_FAILURE_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}

/// Client for the summariser backend.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let http = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, ApiError> {
        Self::new(&config.api.base_url, config.timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Look up games whose name matches `query`, in backend relevance order
    pub async fn search(&self, query: &str) -> Result<Vec<Candidate>, ApiError> {
        let url = self.endpoint("search", &[("q", query)])?;
        self.get_json(url).await
    }

    /// Fetch the praised/criticized summary for an app
    pub async fn summarize(&self, app_id: &AppId) -> Result<SummaryResult, ApiError> {
        let url = self.endpoint("summarize", &[("app_id", app_id.as_str())])?;
        self.get_json(url).await
    }

    fn endpoint(&self, path: &str, params: &[(&str, &str)]) -> Result<Url, ApiError> {
        Url::parse_with_params(&format!("{}/{}", self.base_url, path), params)
            .map_err(|e| ApiError::InvalidUrl(format!("{}: {}", self.base_url, e)))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: Url) -> Result<T, ApiError> {
        tracing::debug!(%url, "GET");
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound);
        }
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }

        Ok(response.json::<T>().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_messages_distinguish_not_found() {
        assert_eq!(ApiError::NotFound.user_message(), NOT_FOUND_MESSAGE);
        assert_eq!(
            ApiError::Status(StatusCode::INTERNAL_SERVER_ERROR).user_message(),
            GENERIC_FAILURE_MESSAGE
        );
        assert_eq!(
            ApiError::Status(StatusCode::BAD_GATEWAY).user_message(),
            GENERIC_FAILURE_MESSAGE
        );
    }

    #[test]
    fn endpoint_encodes_query_and_trims_slash() {
        let client = ApiClient::new("http://localhost:8000/", Duration::from_secs(1)).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8000");

        let url = client.endpoint("search", &[("q", "half life & co")]).unwrap();
        assert_eq!(url.path(), "/search");
        let pairs: Vec<_> = url.query_pairs().collect();
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].0, "q");
        assert_eq!(pairs[0].1, "half life & co");
    }

    #[test]
    fn malformed_base_url_is_reported() {
        let client = ApiClient::new("not a url", Duration::from_secs(1)).unwrap();
        let err = client.endpoint("search", &[("q", "x")]).unwrap_err();
        assert!(matches!(err, ApiError::InvalidUrl(_)));
    }
}
