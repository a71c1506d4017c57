//! Effort plausibility analysis: world-record references, pace math, and
//! best-effort time parsing.

pub mod effort;
pub mod kom_time;
pub mod world_records;

pub use effort::{analyze_effort, EffortAnalysis, EffortFlag};
pub use kom_time::parse_kom_time;
pub use world_records::interpolate_world_record;
