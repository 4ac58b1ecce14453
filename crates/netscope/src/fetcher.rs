//! Snapshot Fetcher - one HTTP request per telemetry snapshot
//!
//! Pure request/response against `GET /api/data?minutes=N`; no retry, no
//! caching. In-flight bookkeeping belongs to the scheduler, not here.

use anyhow::{Context, Result};
use netscope_common::TelemetrySnapshot;
use std::time::Duration;

/// Fetch failure kinds. Both are handled identically upstream: logged, then
/// dropped, leaving the last-known-good views untouched until the next cycle.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Transport failure or non-success HTTP status.
    #[error("network error: {0}")]
    Network(String),

    /// Body did not match the expected snapshot shape.
    #[error("malformed response: {0}")]
    Malformed(String),
}

/// HTTP client for the backend's aggregation endpoint.
pub struct SnapshotFetcher {
    http: reqwest::Client,
    base_url: String,
}

impl SnapshotFetcher {
    /// Build a fetcher for `base_url` (scheme + host + port, no trailing path).
    pub fn new(base_url: &str, request_timeout: Duration) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(request_timeout)
            .user_agent(concat!("netscope/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Fetch one snapshot scoped to the last `minutes` minutes.
    pub async fn fetch(&self, minutes: u32) -> Result<TelemetrySnapshot, FetchError> {
        let url = format!("{}/api/data?minutes={}", self.base_url, minutes);

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if !response.status().is_success() {
            return Err(FetchError::Network(format!(
                "HTTP {} from {}",
                response.status(),
                url
            )));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        parse_snapshot(&body)
    }
}

/// Structural parse of a response body into a snapshot.
pub fn parse_snapshot(body: &[u8]) -> Result<TelemetrySnapshot, FetchError> {
    serde_json::from_slice(body).map_err(|e| FetchError::Malformed(e.to_string()))
}
