//! Plausibility analysis of a single segment effort.
//!
//! Given a distance and an elapsed time, derives the athlete pace, the
//! interpolated world-record pace for that distance, and the ratio between
//! the effort and the record. Efforts more than 20% faster than the world
//! record are flagged as impossible.

use serde::{Deserialize, Serialize};

use crate::analysis::world_records::interpolate_world_record;

/// Ratio below which a claimed effort is considered impossible.
const IMPOSSIBLE_RATIO: f64 = 0.8;

/// Plausibility verdict for one effort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffortFlag {
    /// Distance or elapsed time was missing.
    NoData,
    /// Distance was zero or negative.
    InvalidDistance,
    /// Faster than any human has run the distance, or the distance has no
    /// reference record at all.
    Impossible,
    /// Consistent with known human performance.
    Plausible,
}

impl EffortFlag {
    pub fn as_str(&self) -> &'static str {
        match self {
            EffortFlag::NoData => "no_data",
            EffortFlag::InvalidDistance => "invalid_distance",
            EffortFlag::Impossible => "impossible",
            EffortFlag::Plausible => "plausible",
        }
    }
}

impl std::fmt::Display for EffortFlag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Derived numbers for one analyzed effort.
///
/// All numeric fields are `None` when the flag is `NoData` or
/// `InvalidDistance`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EffortAnalysis {
    /// Elapsed time rounded to whole seconds.
    pub elapsed_time_s: Option<u32>,
    /// Athlete pace in seconds per kilometer, one decimal.
    pub pace_s_per_km: Option<f64>,
    /// World-record pace for the same distance, one decimal.
    pub wr_pace_s_per_km: Option<f64>,
    /// Elapsed time divided by the reference record time, two decimals.
    pub ratio: Option<f64>,
    pub flag: EffortFlag,
}

impl EffortAnalysis {
    fn empty(flag: EffortFlag) -> Self {
        Self {
            elapsed_time_s: None,
            pace_s_per_km: None,
            wr_pace_s_per_km: None,
            ratio: None,
            flag,
        }
    }
}

/// Analyze one effort over a segment.
///
/// Decision order: missing input wins over invalid distance, which wins over
/// the record comparison. When the distance has no tabulated reference, the
/// elapsed time itself stands in as the reference so the pace fields stay
/// defined; the ratio is exactly 1.0 in that branch and the flag is
/// `Impossible`. Pure function, no side effects.
pub fn analyze_effort(distance_m: Option<f64>, elapsed_time_s: Option<f64>) -> EffortAnalysis {
    let (distance_m, elapsed_time_s) = match (distance_m, elapsed_time_s) {
        (Some(d), Some(t)) => (d, t),
        _ => return EffortAnalysis::empty(EffortFlag::NoData),
    };

    if distance_m <= 0.0 {
        return EffortAnalysis::empty(EffortFlag::InvalidDistance);
    }

    let distance_km = distance_m / 1000.0;
    let pace_s_per_km = elapsed_time_s / distance_km;

    let (wr_time_s, flag) = match interpolate_world_record(distance_m) {
        Some(wr) => {
            let flag = if elapsed_time_s / wr < IMPOSSIBLE_RATIO {
                EffortFlag::Impossible
            } else {
                EffortFlag::Plausible
            };
            (wr, flag)
        }
        // No reference record for this distance. Fall back to the elapsed
        // time itself so the pace fields stay defined; the comparison is
        // degenerate and the ratio below is 1.0 by construction.
        None => (elapsed_time_s, EffortFlag::Impossible),
    };

    let wr_pace_s_per_km = wr_time_s / distance_km;

    EffortAnalysis {
        elapsed_time_s: Some(elapsed_time_s.round() as u32),
        pace_s_per_km: Some(round1(pace_s_per_km)),
        wr_pace_s_per_km: Some(round1(wr_pace_s_per_km)),
        ratio: Some(round2(elapsed_time_s / wr_time_s)),
        flag,
    }
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
