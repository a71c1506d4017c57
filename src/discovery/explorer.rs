//! Expanding-radius segment discovery.
//!
//! The explore endpoint returns at most about ten summaries per query no
//! matter how large the area, so a single bounding box cannot satisfy a
//! fifty-segment quota. Discovery grids the area into cells, fetches details
//! cell by cell, and while the quota is unmet doubles the radius and
//! densifies the grid until the radius ceiling is reached.

use std::collections::HashSet;

use crate::discovery::geo::{BoundingBox, LatLng};
use crate::strava::{SegmentDetail, SegmentSource, StravaError};

/// Grid subdivision used for the first radius tier.
const INITIAL_GRID_SIZE: usize = 2;

/// Limits for one discovery run.
#[derive(Debug, Clone, Copy)]
pub struct SearchLimits {
    /// Stop as soon as this many running segments are collected.
    pub min_segments: usize,
    /// Radius of the first search tier in kilometres.
    pub initial_radius_km: f64,
    /// Stop expanding once the radius exceeds this bound.
    pub max_radius_km: f64,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            min_segments: 50,
            initial_radius_km: 0.1,
            max_radius_km: 10.0,
        }
    }
}

/// Collect up to `limits.min_segments` running segments around `center`.
///
/// Results are deduplicated by identifier in first-seen order and filtered
/// to `Run` activity. A failed detail fetch skips that one segment; a failed
/// area search aborts the run with the error (the caller decides whether an
/// empty set is acceptable).
pub async fn collect_run_segments<S: SegmentSource>(
    source: &S,
    center: LatLng,
    limits: &SearchLimits,
) -> Result<Vec<SegmentDetail>, StravaError> {
    let mut collected: Vec<SegmentDetail> = Vec::new();
    let mut seen: HashSet<u64> = HashSet::new();
    let mut radius_km = limits.initial_radius_km;
    let mut grid_size = INITIAL_GRID_SIZE;

    while collected.len() < limits.min_segments && radius_km <= limits.max_radius_km {
        tracing::debug!(
            "Querying explorer, radius {} km, grid {}x{}",
            radius_km,
            grid_size,
            grid_size
        );

        scan_grid(
            source,
            center,
            radius_km,
            grid_size,
            limits.min_segments,
            &mut seen,
            &mut collected,
        )
        .await?;

        if collected.len() < limits.min_segments {
            radius_km *= 2.0;
            grid_size += 1;
            tracing::debug!(
                "Found {} of {} segments, radius increased to {} km, grid {}x{}",
                collected.len(),
                limits.min_segments,
                radius_km,
                grid_size,
                grid_size
            );
        }
    }

    collected.truncate(limits.min_segments);
    Ok(collected)
}

/// Scan every cell of one radius tier, returning as soon as the quota is
/// met.
async fn scan_grid<S: SegmentSource>(
    source: &S,
    center: LatLng,
    radius_km: f64,
    grid_size: usize,
    quota: usize,
    seen: &mut HashSet<u64>,
    collected: &mut Vec<SegmentDetail>,
) -> Result<(), StravaError> {
    let bounds = BoundingBox::around(center, radius_km);

    for cell in bounds.cells(grid_size) {
        let summaries = source.explore(&cell).await?;
        tracing::debug!("Explorer cell returned {} summaries", summaries.len());

        for summary in summaries {
            if collected.len() >= quota {
                return Ok(());
            }

            let detail = match source.segment_detail(summary.id).await {
                Ok(detail) => detail,
                Err(e) => {
                    tracing::warn!("Failed to fetch detail for segment {}: {}", summary.id, e);
                    continue;
                }
            };

            if !detail.activity_type.is_run() {
                tracing::debug!("Segment ignored, not a run: {}", detail.name);
                continue;
            }

            if seen.insert(detail.id) {
                tracing::debug!(
                    "Running segment added: {} ({} m)",
                    detail.name,
                    detail.distance
                );
                collected.push(detail);
            }
        }

        if collected.len() >= quota {
            return Ok(());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strava::models::{ActivityType, SegmentSummary, Xoms};
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Source that answers every explore call with the same summary list
    /// and serves details from a fixed map.
    struct ScriptedSource {
        summaries: Vec<SegmentSummary>,
        details: HashMap<u64, SegmentDetail>,
        fail_explore: bool,
        explore_calls: AtomicUsize,
        detail_calls: AtomicUsize,
    }

    impl ScriptedSource {
        fn new(details: Vec<SegmentDetail>) -> Self {
            let summaries = details
                .iter()
                .map(|d| SegmentSummary {
                    id: d.id,
                    name: d.name.clone(),
                    distance: d.distance,
                })
                .collect();
            Self {
                summaries,
                details: details.into_iter().map(|d| (d.id, d)).collect(),
                fail_explore: false,
                explore_calls: AtomicUsize::new(0),
                detail_calls: AtomicUsize::new(0),
            }
        }

        fn failing() -> Self {
            let mut source = Self::new(Vec::new());
            source.fail_explore = true;
            source
        }
    }

    impl SegmentSource for ScriptedSource {
        async fn explore(
            &self,
            _bounds: &BoundingBox,
        ) -> Result<Vec<SegmentSummary>, StravaError> {
            self.explore_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_explore {
                return Err(StravaError::ApiError("scripted failure".to_string()));
            }
            Ok(self.summaries.clone())
        }

        async fn segment_detail(&self, segment_id: u64) -> Result<SegmentDetail, StravaError> {
            self.detail_calls.fetch_add(1, Ordering::SeqCst);
            self.details
                .get(&segment_id)
                .cloned()
                .ok_or_else(|| StravaError::ApiError(format!("no detail for {}", segment_id)))
        }
    }

    fn segment(id: u64, name: &str, activity_type: ActivityType) -> SegmentDetail {
        SegmentDetail {
            id,
            name: name.to_string(),
            activity_type,
            distance: 1000.0 + id as f64,
            xoms: Some(Xoms {
                kom: None,
                qom: None,
                overall: Some("6:36".to_string()),
            }),
        }
    }

    fn center() -> LatLng {
        LatLng::new(52.513673468165, 13.474815751923392)
    }

    fn limits(min: usize, initial: f64, max: f64) -> SearchLimits {
        SearchLimits {
            min_segments: min,
            initial_radius_km: initial,
            max_radius_km: max,
        }
    }

    #[tokio::test]
    async fn test_stops_at_quota() {
        let source = ScriptedSource::new(vec![
            segment(1, "A", ActivityType::Run),
            segment(2, "B", ActivityType::Run),
            segment(3, "C", ActivityType::Run),
            segment(4, "D", ActivityType::Run),
            segment(5, "E", ActivityType::Run),
        ]);

        let result = collect_run_segments(&source, center(), &limits(3, 1.0, 10.0))
            .await
            .unwrap();

        assert_eq!(result.len(), 3);
        assert_eq!(
            result.iter().map(|s| s.id).collect::<Vec<_>>(),
            vec![1, 2, 3],
            "first-seen order must be preserved"
        );
        // The quota was met inside the first cell.
        assert_eq!(source.explore_calls.load(Ordering::SeqCst), 1);
        assert_eq!(source.detail_calls.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_deduplicates_across_cells() {
        // Five distinct segments but a quota of ten: every cell repeats the
        // same summaries, so the run exhausts both radius tiers.
        let source = ScriptedSource::new(vec![
            segment(1, "A", ActivityType::Run),
            segment(2, "B", ActivityType::Run),
            segment(3, "C", ActivityType::Run),
            segment(4, "D", ActivityType::Run),
            segment(5, "E", ActivityType::Run),
        ]);

        let result = collect_run_segments(&source, center(), &limits(10, 1.0, 2.0))
            .await
            .unwrap();

        assert_eq!(result.len(), 5);
        let ids: HashSet<u64> = result.iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), 5, "no identifier may appear twice");
    }

    #[tokio::test]
    async fn test_filters_non_running_segments() {
        let source = ScriptedSource::new(vec![
            segment(1, "Run A", ActivityType::Run),
            segment(2, "Ride B", ActivityType::Ride),
            segment(3, "Hike C", ActivityType::Other),
            segment(4, "Run D", ActivityType::Run),
        ]);

        let result = collect_run_segments(&source, center(), &limits(4, 1.0, 1.0))
            .await
            .unwrap();

        assert_eq!(result.iter().map(|s| s.id).collect::<Vec<_>>(), vec![1, 4]);
    }

    #[tokio::test]
    async fn test_detail_failure_skips_that_segment() {
        let mut source = ScriptedSource::new(vec![
            segment(1, "A", ActivityType::Run),
            segment(2, "B", ActivityType::Run),
            segment(3, "C", ActivityType::Run),
        ]);
        // Detail for segment 2 is missing, so its fetch errors.
        source.details.remove(&2);

        let result = collect_run_segments(&source, center(), &limits(3, 1.0, 1.0))
            .await
            .unwrap();

        assert_eq!(result.iter().map(|s| s.id).collect::<Vec<_>>(), vec![1, 3]);
    }

    #[tokio::test]
    async fn test_explore_failure_propagates() {
        let source = ScriptedSource::failing();
        let result = collect_run_segments(&source, center(), &limits(5, 1.0, 10.0)).await;
        assert!(matches!(result, Err(StravaError::ApiError(_))));
    }

    #[tokio::test]
    async fn test_terminates_when_quota_unreachable() {
        let source = ScriptedSource::new(Vec::new());

        let result = collect_run_segments(&source, center(), &limits(10, 1.0, 2.0))
            .await
            .unwrap();

        assert!(result.is_empty());
        // Two tiers: 2x2 cells at 1 km, 3x3 cells at 2 km, then 4 km > max.
        assert_eq!(source.explore_calls.load(Ordering::SeqCst), 13);
    }
}
