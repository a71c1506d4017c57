//! World-record reference times for running distances.
//!
//! The table holds men's outdoor records at standard distances and is the
//! anchor set for pace-plausibility checks: a claimed best effort far below
//! the interpolated record time for its distance cannot be real.

/// Reference records as `(distance_m, record_time_s)` anchors.
///
/// Distances and times are both strictly increasing; the interpolator
/// relies on that ordering.
pub const WORLD_RECORDS: &[(f64, f64)] = &[
    (100.0, 9.58),
    (200.0, 19.19),
    (400.0, 43.03),
    (800.0, 100.91),
    (1000.0, 131.96),
    (1500.0, 206.00),
    (3000.0, 440.67),
    (5000.0, 755.36),
    (10000.0, 1571.00),
    (21097.5, 3402.00),
    (42195.0, 7235.00),
];

/// Expected world-record time in seconds for an arbitrary distance.
///
/// Linear interpolation in time between the two nearest anchors. Distances
/// outside the tabulated range (below 100 m or beyond the marathon) return
/// `None`, meaning "unsupported distance", not an error.
pub fn interpolate_world_record(distance_m: f64) -> Option<f64> {
    let (first, last) = (WORLD_RECORDS[0], WORLD_RECORDS[WORLD_RECORDS.len() - 1]);
    if !(distance_m >= first.0 && distance_m <= last.0) {
        return None;
    }

    for pair in WORLD_RECORDS.windows(2) {
        let (d0, t0) = pair[0];
        let (d1, t1) = pair[1];
        if distance_m <= d1 {
            if distance_m == d1 {
                return Some(t1);
            }
            let fraction = (distance_m - d0) / (d1 - d0);
            return Some(t0 + fraction * (t1 - t0));
        }
    }

    // Unreachable: the range check above guarantees a bracketing window.
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_strictly_increasing() {
        for pair in WORLD_RECORDS.windows(2) {
            assert!(
                pair[0].0 < pair[1].0,
                "distances must increase: {} vs {}",
                pair[0].0,
                pair[1].0
            );
            assert!(
                pair[0].1 < pair[1].1,
                "record times must increase: {} vs {}",
                pair[0].1,
                pair[1].1
            );
        }
    }

    #[test]
    fn test_anchor_distances_exact() {
        assert_eq!(interpolate_world_record(100.0), Some(9.58));
        assert_eq!(interpolate_world_record(1000.0), Some(131.96));
        assert_eq!(interpolate_world_record(42195.0), Some(7235.00));
    }

    #[test]
    fn test_midpoint_between_anchors() {
        // Halfway between 1000 m (131.96 s) and 1500 m (206.00 s).
        let t = interpolate_world_record(1250.0).expect("supported distance");
        let expected = (131.96 + 206.00) / 2.0;
        assert!(
            (t - expected).abs() < 1e-9,
            "midpoint should interpolate linearly, got {}",
            t
        );
    }

    #[test]
    fn test_outside_supported_range() {
        assert_eq!(interpolate_world_record(50.0), None);
        assert_eq!(interpolate_world_record(99.9), None);
        assert_eq!(interpolate_world_record(50000.0), None);
        assert_eq!(interpolate_world_record(0.0), None);
        assert_eq!(interpolate_world_record(-200.0), None);
    }

    #[test]
    fn test_monotonic_over_supported_range() {
        let mut previous = 0.0;
        let mut d = 100.0;
        while d <= 42195.0 {
            let t = interpolate_world_record(d).expect("supported distance");
            assert!(
                t > previous,
                "expected time must increase with distance (d = {} m)",
                d
            );
            previous = t;
            d += 45.0;
        }
    }
}
