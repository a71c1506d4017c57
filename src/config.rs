//! Application configuration.
//!
//! Settings live in a TOML file under the platform data directory; a
//! missing file yields the defaults, which reproduce the original survey
//! setup (Berlin center, 1 km start radius, 70 segments, 220 s/km pace
//! ceiling). The Strava access token is deliberately not part of the file;
//! it comes from the environment.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::discovery::geo::LatLng;
use crate::survey::SurveyParams;

/// Environment variable holding the Strava bearer token.
pub const ACCESS_TOKEN_ENV: &str = "STRAVA_ACCESS_TOKEN";

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Application version
    pub version: String,
    /// Data directory path
    #[serde(skip)]
    pub data_dir: PathBuf,
    /// Search-area settings
    pub search: SearchSettings,
    /// Analysis settings
    pub analysis: AnalysisSettings,
    /// API settings
    pub api: ApiSettings,
    /// Export settings
    pub export: ExportSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            data_dir: PathBuf::new(),
            search: SearchSettings::default(),
            analysis: AnalysisSettings::default(),
            api: ApiSettings::default(),
            export: ExportSettings::default(),
        }
    }
}

impl AppConfig {
    /// Survey parameters derived from the configured search and analysis
    /// settings.
    pub fn survey_params(&self) -> SurveyParams {
        SurveyParams {
            center: LatLng::new(self.search.center_lat, self.search.center_lng),
            radius_km: self.search.radius_km,
            max_radius_km: self.search.max_radius_km,
            max_segments: self.search.max_segments,
            user_max_pace_s_per_km: self.analysis.user_max_pace_s_per_km,
        }
    }
}

/// Search-area settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchSettings {
    /// Center latitude in decimal degrees
    pub center_lat: f64,
    /// Center longitude in decimal degrees
    pub center_lng: f64,
    /// Radius of the first discovery tier in kilometres
    pub radius_km: f64,
    /// Radius ceiling for discovery in kilometres
    pub max_radius_km: f64,
    /// Number of segments to collect
    pub max_segments: usize,
}

impl Default for SearchSettings {
    fn default() -> Self {
        // Example location: Berlin
        Self {
            center_lat: 52.513673468165,
            center_lng: 13.474815751923392,
            radius_km: 1.0,
            max_radius_km: 10.0,
            max_segments: 70,
        }
    }
}

/// Analysis settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisSettings {
    /// Pace ceiling in s/km below which a KOM counts as achievable
    pub user_max_pace_s_per_km: f64,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            user_max_pace_s_per_km: 220.0,
        }
    }
}

/// Strava API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiSettings {
    /// Minimum interval between consecutive API requests in milliseconds
    pub pacing_ms: u64,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self { pacing_ms: 1000 }
    }
}

/// Export settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportSettings {
    /// Path of the full CSV export; the impossible-only file derives its
    /// name from this one
    pub path: PathBuf,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from("segment_analysis.csv"),
        }
    }
}

/// Get the application data directory.
pub fn get_data_dir() -> PathBuf {
    directories::ProjectDirs::from("com", "komscout", "KomScout")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Get the configuration file path.
pub fn get_config_path() -> PathBuf {
    get_data_dir().join("config.toml")
}

/// Load application configuration from file.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let path = get_config_path();

    if !path.exists() {
        let config = AppConfig {
            data_dir: get_data_dir(),
            ..Default::default()
        };
        return Ok(config);
    }

    let content =
        std::fs::read_to_string(&path).map_err(|e| ConfigError::IoError(e.to_string()))?;

    let mut config: AppConfig =
        toml::from_str(&content).map_err(|e| ConfigError::ParseError(e.to_string()))?;

    config.data_dir = get_data_dir();

    Ok(config)
}

/// Save application configuration to file.
pub fn save_config(config: &AppConfig) -> Result<(), ConfigError> {
    let path = get_config_path();

    // Ensure parent directory exists
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| ConfigError::IoError(e.to_string()))?;
    }

    let content =
        toml::to_string_pretty(config).map_err(|e| ConfigError::SerializeError(e.to_string()))?;

    std::fs::write(&path, content).map_err(|e| ConfigError::IoError(e.to_string()))?;

    Ok(())
}

/// Read the Strava access token from the environment.
pub fn access_token_from_env() -> Option<String> {
    std::env::var(ACCESS_TOKEN_ENV)
        .ok()
        .filter(|token| !token.is_empty())
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Serialize error: {0}")]
    SerializeError(String),
}
