//! Segment survey: discovery, KOM parsing, plausibility analysis, and
//! achievability ranking.
//!
//! This is the pipeline the binary runs: discover running segments around a
//! center, parse each segment's overall best-effort time, analyze it against
//! world-record paces, classify whether the KOM is within reach of the
//! configured athlete, and rank the rows slowest first.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::analysis::{analyze_effort, parse_kom_time, EffortAnalysis, EffortFlag};
use crate::discovery::explorer::{collect_run_segments, SearchLimits};
use crate::discovery::geo::LatLng;
use crate::strava::SegmentSource;

/// Achievability of a segment KOM for the configured athlete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Achievability {
    /// The KOM itself is flagged impossible.
    Impossible,
    /// Plausible, and the pace is within the athlete's ceiling.
    PotentiallyAchievable,
    /// Plausible, but faster than the athlete's ceiling.
    ValidButNotSolvable,
}

impl Achievability {
    pub fn as_str(&self) -> &'static str {
        match self {
            Achievability::Impossible => "impossible",
            Achievability::PotentiallyAchievable => "potentially achievable",
            Achievability::ValidButNotSolvable => "valid but not solvable",
        }
    }
}

impl std::fmt::Display for Achievability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One analyzed segment in the survey report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultRow {
    pub id: u64,
    pub name: String,
    pub distance_m: f64,
    /// Parsed overall best-effort time in seconds.
    pub kom_s: u32,
    pub analysis: EffortAnalysis,
    pub category: Achievability,
}

impl ResultRow {
    /// Sort key for the pace-descending ranking. Rows without a computed
    /// pace sort last.
    fn pace_key(&self) -> f64 {
        self.analysis.pace_s_per_km.unwrap_or(0.0)
    }
}

/// Parameters of one survey run.
#[derive(Debug, Clone, Copy)]
pub struct SurveyParams {
    pub center: LatLng,
    /// Radius of the first discovery tier in kilometres.
    pub radius_km: f64,
    /// Radius ceiling for discovery.
    pub max_radius_km: f64,
    /// How many segments discovery should deliver at most.
    pub max_segments: usize,
    /// Pace ceiling in s/km below which a KOM counts as achievable.
    pub user_max_pace_s_per_km: f64,
}

impl Default for SurveyParams {
    fn default() -> Self {
        Self {
            center: LatLng::new(52.513673468165, 13.474815751923392),
            radius_km: 1.0,
            max_radius_km: 10.0,
            max_segments: 50,
            user_max_pace_s_per_km: 220.0,
        }
    }
}

/// Survey running segments around a center point.
///
/// Discovery failure degrades to an empty result set rather than an error;
/// an empty return is the valid "no data available" outcome. Rows come back
/// sorted by athlete pace descending, slowest KOM first.
pub async fn survey_segments_around<S: SegmentSource>(
    source: &S,
    params: &SurveyParams,
) -> Vec<ResultRow> {
    let limits = SearchLimits {
        min_segments: params.max_segments,
        initial_radius_km: params.radius_km,
        max_radius_km: params.max_radius_km,
    };

    let segments = match collect_run_segments(source, params.center, &limits).await {
        Ok(segments) => {
            tracing::debug!("Explorer found {} segments", segments.len());
            segments
        }
        Err(e) => {
            tracing::warn!("Segment discovery failed: {}", e);
            Vec::new()
        }
    };

    let mut rows = Vec::new();
    for segment in segments {
        let kom_s = match segment.overall_xom() {
            None => {
                tracing::debug!(
                    "Segment without XOM: {} ({} m)",
                    segment.name,
                    segment.distance
                );
                continue;
            }
            Some(overall) => match parse_kom_time(overall) {
                Some(kom_s) => kom_s,
                None => {
                    tracing::warn!(
                        "Unparseable KOM time {:?} for segment {}",
                        overall,
                        segment.name
                    );
                    continue;
                }
            },
        };

        let analysis = analyze_effort(Some(segment.distance), Some(kom_s as f64));
        let category = classify(&analysis, params.user_max_pace_s_per_km);

        rows.push(ResultRow {
            id: segment.id,
            name: segment.name,
            distance_m: segment.distance,
            kom_s,
            analysis,
            category,
        });
    }

    // Slowest pace first; stable sort, so ties keep discovery order.
    rows.sort_by(|a, b| {
        b.pace_key()
            .partial_cmp(&a.pace_key())
            .unwrap_or(Ordering::Equal)
    });
    rows
}

fn classify(analysis: &EffortAnalysis, user_max_pace_s_per_km: f64) -> Achievability {
    if analysis.flag == EffortFlag::Impossible {
        return Achievability::Impossible;
    }
    match analysis.pace_s_per_km {
        Some(pace) if pace < user_max_pace_s_per_km => Achievability::PotentiallyAchievable,
        _ => Achievability::ValidButNotSolvable,
    }
}
