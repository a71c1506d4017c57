//! Strava API v3 integration: segment search, detail fetch, bearer auth,
//! and request pacing.

pub mod client;
pub mod models;
pub mod pacer;

use thiserror::Error;

use crate::discovery::geo::BoundingBox;

pub use client::StravaClient;
pub use models::{ActivityType, ExploreResponse, SegmentDetail, SegmentSummary, Xoms};
pub use pacer::RequestPacer;

/// Errors from Strava API calls.
#[derive(Debug, Error)]
pub enum StravaError {
    /// Access token missing or rejected (401/403).
    #[error("Strava rejected the access token")]
    Unauthorized,

    /// Too many requests in the current window (429).
    #[error("Rate limited by the Strava API")]
    RateLimited,

    /// Any other non-success response.
    #[error("Strava API error: {0}")]
    ApiError(String),

    /// Connection, DNS, or timeout failure.
    #[error("Network error: {0}")]
    NetworkError(String),

    /// Response body did not match the expected shape.
    #[error("Malformed API response: {0}")]
    MalformedResponse(String),
}

/// Source of segment data.
///
/// Implemented by [`StravaClient`] against the real API and by scripted
/// doubles in discovery tests.
pub trait SegmentSource: Send + Sync {
    /// Search a bounding box for running-segment summaries.
    fn explore(
        &self,
        bounds: &BoundingBox,
    ) -> impl std::future::Future<Output = Result<Vec<SegmentSummary>, StravaError>> + Send;

    /// Fetch the full record for one segment.
    fn segment_detail(
        &self,
        segment_id: u64,
    ) -> impl std::future::Future<Output = Result<SegmentDetail, StravaError>> + Send;
}
