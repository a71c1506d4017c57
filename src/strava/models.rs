//! Strava API data models.
//!
//! Only the fields this crate consumes are modeled; unknown payload fields
//! are ignored during deserialization.

use serde::{Deserialize, Serialize};

/// Activity category of a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActivityType {
    Run,
    Ride,
    #[serde(other)]
    Other,
}

impl ActivityType {
    pub fn is_run(&self) -> bool {
        matches!(self, ActivityType::Run)
    }
}

/// Lightweight segment summary from the explore endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentSummary {
    pub id: u64,
    pub name: String,
    pub distance: f64,
}

/// Response wrapper of the explore endpoint. A missing `segments` key
/// deserializes to an empty list.
#[derive(Debug, Clone, Deserialize)]
pub struct ExploreResponse {
    #[serde(default)]
    pub segments: Vec<SegmentSummary>,
}

/// Best-effort display times for a segment, keyed by scope.
///
/// The values are display text ("6:36", "13s"), not numbers; see
/// [`crate::analysis::parse_kom_time`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Xoms {
    #[serde(default)]
    pub kom: Option<String>,
    #[serde(default)]
    pub qom: Option<String>,
    #[serde(default)]
    pub overall: Option<String>,
}

/// Full segment record from the detail endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SegmentDetail {
    pub id: u64,
    pub name: String,
    pub activity_type: ActivityType,
    pub distance: f64,
    #[serde(default)]
    pub xoms: Option<Xoms>,
}

impl SegmentDetail {
    /// Raw overall best-effort text, if the segment has one.
    pub fn overall_xom(&self) -> Option<&str> {
        self.xoms.as_ref().and_then(|x| x.overall.as_deref())
    }
}
