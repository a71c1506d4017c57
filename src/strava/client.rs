//! HTTP client for the Strava API v3.

use std::time::Duration;

use serde::de::DeserializeOwned;

use super::models::{ExploreResponse, SegmentDetail, SegmentSummary};
use super::pacer::RequestPacer;
use super::{SegmentSource, StravaError};
use crate::discovery::geo::BoundingBox;

/// Production API base URL.
const DEFAULT_BASE_URL: &str = "https://www.strava.com/api/v3";

/// Default spacing between consecutive API requests.
pub const DEFAULT_PACING: Duration = Duration::from_millis(1000);

/// Climb-category filter bounds sent to the explore endpoint (full range).
const MIN_CLIMB_CAT: &str = "0";
const MAX_CLIMB_CAT: &str = "5";

/// Strava API client with bearer auth and request pacing.
pub struct StravaClient {
    /// HTTP client
    http: reqwest::Client,
    /// API base URL
    base_url: String,
    /// Bearer token, environment-sourced by the caller
    access_token: String,
    /// Minimum-interval gate awaited before every request
    pacer: RequestPacer,
}

impl StravaClient {
    /// Create a client against the production API with default pacing.
    pub fn new(access_token: String) -> Self {
        Self::with_base_url(access_token, DEFAULT_BASE_URL.to_string())
    }

    /// Create a client with a custom base URL (used by tests).
    pub fn with_base_url(access_token: String, base_url: String) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http,
            base_url,
            access_token,
            pacer: RequestPacer::new(DEFAULT_PACING),
        }
    }

    /// Replace the pacing interval. Zero disables pacing.
    pub fn with_pacing(mut self, interval: Duration) -> Self {
        self.pacer = RequestPacer::new(interval);
        self
    }

    /// Paced, authenticated GET returning a deserialized JSON body.
    async fn get_json<R: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<R, StravaError> {
        self.pacer.pace().await;

        let response = self
            .http
            .get(url)
            .header("Authorization", format!("Bearer {}", self.access_token))
            .query(query)
            .send()
            .await
            .map_err(|e| {
                if e.is_connect() || e.is_timeout() {
                    StravaError::NetworkError(e.to_string())
                } else {
                    StravaError::ApiError(e.to_string())
                }
            })?;

        let status = response.status();

        if status.is_success() {
            response
                .json()
                .await
                .map_err(|e| StravaError::MalformedResponse(e.to_string()))
        } else if status.as_u16() == 401 || status.as_u16() == 403 {
            Err(StravaError::Unauthorized)
        } else if status.as_u16() == 429 {
            Err(StravaError::RateLimited)
        } else {
            Err(StravaError::ApiError(format!(
                "API returned status {}",
                status
            )))
        }
    }
}

impl SegmentSource for StravaClient {
    /// `GET /segments/explore` for running segments inside `bounds`.
    ///
    /// The endpoint caps results at roughly ten summaries per call
    /// regardless of area, which is why discovery grids the search area.
    async fn explore(&self, bounds: &BoundingBox) -> Result<Vec<SegmentSummary>, StravaError> {
        let url = format!("{}/segments/explore", self.base_url);
        let query = [
            ("bounds", bounds.to_query()),
            ("activity_type", "running".to_string()),
            ("min_cat", MIN_CLIMB_CAT.to_string()),
            ("max_cat", MAX_CLIMB_CAT.to_string()),
        ];
        let response: ExploreResponse = self.get_json(&url, &query).await?;
        Ok(response.segments)
    }

    /// `GET /segments/{id}` for the full segment record.
    async fn segment_detail(&self, segment_id: u64) -> Result<SegmentDetail, StravaError> {
        let url = format!("{}/segments/{}", self.base_url, segment_id);
        self.get_json(&url, &[]).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation_uses_production_url() {
        let client = StravaClient::new("test-token".to_string());
        assert_eq!(client.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_custom_base_url() {
        let client = StravaClient::with_base_url(
            "test-token".to_string(),
            "http://localhost:9".to_string(),
        );
        assert_eq!(client.base_url, "http://localhost:9");
    }

    #[tokio::test]
    async fn test_unreachable_host_maps_to_network_error() {
        // Port 9 (discard) on localhost refuses connections.
        let client = StravaClient::with_base_url(
            "test-token".to_string(),
            "http://127.0.0.1:9".to_string(),
        )
        .with_pacing(Duration::ZERO);

        let bounds = BoundingBox {
            min_lat: 52.0,
            min_lng: 13.0,
            max_lat: 52.1,
            max_lng: 13.1,
        };
        let result = client.explore(&bounds).await;
        assert!(matches!(result, Err(StravaError::NetworkError(_))));
    }
}
