//! KomScout - Strava KOM Plausibility Survey
//!
//! Discovers running segments around a point through the Strava API, checks
//! every KOM time against interpolated world-record paces, and reports which
//! crowns are realistic targets and which look physically impossible.

pub mod analysis;
pub mod config;
pub mod discovery;
pub mod report;
pub mod strava;
pub mod survey;

// Re-export commonly used types
pub use analysis::{analyze_effort, interpolate_world_record, parse_kom_time};
pub use analysis::{EffortAnalysis, EffortFlag};
pub use config::{load_config, AppConfig};
pub use discovery::{collect_run_segments, LatLng, SearchLimits};
pub use report::{export_csv_to_file, export_impossible_csv_to_file, impossible_path, print_report};
pub use strava::{SegmentSource, StravaClient, StravaError};
pub use survey::{survey_segments_around, Achievability, ResultRow, SurveyParams};
