//! Geographic helpers for segment discovery.
//!
//! The explore endpoint takes a rectangular search area; discovery builds
//! that rectangle from a center point and a radius, then subdivides it into
//! a grid of cells to work around the per-query result cap.

use serde::{Deserialize, Serialize};

/// Kilometres per degree of latitude.
const KM_PER_DEG_LAT: f64 = 110.574;
/// Kilometres per degree of longitude at the equator.
const KM_PER_DEG_LNG: f64 = 111.320;

/// A point on the map in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Axis-aligned search rectangle in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub min_lng: f64,
    pub max_lat: f64,
    pub max_lng: f64,
}

impl BoundingBox {
    /// Bounding box of the circle around `center` with radius `radius_km`.
    ///
    /// Latitude uses a fixed kilometres-per-degree constant; longitude is
    /// corrected by the cosine of the latitude.
    pub fn around(center: LatLng, radius_km: f64) -> Self {
        let lat_delta = radius_km / KM_PER_DEG_LAT;
        let lng_delta = radius_km / (KM_PER_DEG_LNG * center.lat.to_radians().cos());
        Self {
            min_lat: center.lat - lat_delta,
            min_lng: center.lng - lng_delta,
            max_lat: center.lat + lat_delta,
            max_lng: center.lng + lng_delta,
        }
    }

    /// Split into `grid_size x grid_size` equal cells, row-major with
    /// latitude bands outer and longitude columns inner.
    pub fn cells(&self, grid_size: usize) -> Vec<BoundingBox> {
        let lat_step = (self.max_lat - self.min_lat) / grid_size as f64;
        let lng_step = (self.max_lng - self.min_lng) / grid_size as f64;
        let mut cells = Vec::with_capacity(grid_size * grid_size);
        for i in 0..grid_size {
            for j in 0..grid_size {
                cells.push(BoundingBox {
                    min_lat: self.min_lat + i as f64 * lat_step,
                    min_lng: self.min_lng + j as f64 * lng_step,
                    max_lat: self.min_lat + (i + 1) as f64 * lat_step,
                    max_lng: self.min_lng + (j + 1) as f64 * lng_step,
                });
            }
        }
        cells
    }

    /// Query form expected by the explore endpoint:
    /// `"min_lat,min_lng,max_lat,max_lng"`.
    pub fn to_query(&self) -> String {
        format!(
            "{},{},{},{}",
            self.min_lat, self.min_lng, self.max_lat, self.max_lng
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BERLIN: LatLng = LatLng {
        lat: 52.513673468165,
        lng: 13.474815751923392,
    };

    #[test]
    fn test_box_is_symmetric_around_center() {
        let bbox = BoundingBox::around(BERLIN, 1.0);
        let lat_delta = 1.0 / 110.574;
        assert!((bbox.max_lat - BERLIN.lat - lat_delta).abs() < 1e-12);
        assert!((BERLIN.lat - bbox.min_lat - lat_delta).abs() < 1e-12);
        assert!(((bbox.max_lng - BERLIN.lng) - (BERLIN.lng - bbox.min_lng)).abs() < 1e-12);
    }

    #[test]
    fn test_longitude_delta_grows_with_latitude() {
        let at_equator = BoundingBox::around(LatLng::new(0.0, 10.0), 1.0);
        let far_north = BoundingBox::around(LatLng::new(60.0, 10.0), 1.0);
        let width_equator = at_equator.max_lng - at_equator.min_lng;
        let width_north = far_north.max_lng - far_north.min_lng;
        assert!(
            width_north > width_equator,
            "cos-corrected longitude span must widen away from the equator"
        );
    }

    #[test]
    fn test_cells_cover_the_box() {
        let bbox = BoundingBox::around(BERLIN, 2.0);
        let cells = bbox.cells(3);
        assert_eq!(cells.len(), 9);

        // Corners of the grid coincide with the corners of the box.
        assert_eq!(cells[0].min_lat, bbox.min_lat);
        assert_eq!(cells[0].min_lng, bbox.min_lng);
        let last = cells.last().unwrap();
        assert!((last.max_lat - bbox.max_lat).abs() < 1e-12);
        assert!((last.max_lng - bbox.max_lng).abs() < 1e-12);

        // Adjacent cells share edges exactly.
        assert_eq!(cells[0].max_lng, cells[1].min_lng);
        assert_eq!(cells[0].max_lat, cells[3].min_lat);
    }

    #[test]
    fn test_query_string_order() {
        let bbox = BoundingBox {
            min_lat: 1.5,
            min_lng: 2.5,
            max_lat: 3.5,
            max_lng: 4.5,
        };
        assert_eq!(bbox.to_query(), "1.5,2.5,3.5,4.5");
    }
}
