//! Grid-based segment discovery around a center point.

pub mod explorer;
pub mod geo;

pub use explorer::{collect_run_segments, SearchLimits};
pub use geo::{BoundingBox, LatLng};
