//! KomScout - Strava KOM Plausibility Survey
//!
//! Main entry point for the application.

use std::time::Duration;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use komscout::config;
use komscout::report::{
    export_csv_to_file, export_impossible_csv_to_file, impossible_path, print_report,
};
use komscout::strava::StravaClient;
use komscout::survey::survey_segments_around;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Configure tracing subscriber
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting KomScout v{}", env!("CARGO_PKG_VERSION"));

    // A .env file may carry the token during development
    dotenvy::dotenv().ok();

    let config_path = config::get_config_path();
    let first_run = !config_path.exists();
    let app_config = config::load_config().context("Failed to load configuration")?;
    if first_run {
        // Materialize the defaults so there is a file to edit.
        config::save_config(&app_config).context("Failed to write default configuration")?;
        tracing::info!("Wrote default configuration to {}", config_path.display());
    }

    let access_token = config::access_token_from_env()
        .with_context(|| format!("{} is not set", config::ACCESS_TOKEN_ENV))?;

    let client = StravaClient::new(access_token)
        .with_pacing(Duration::from_millis(app_config.api.pacing_ms));

    let params = app_config.survey_params();
    let rows = survey_segments_around(&client, &params).await;

    if rows.is_empty() {
        println!("Strava not responding");
        return Ok(());
    }

    print_report(&rows);

    let export_path = &app_config.export.path;
    export_csv_to_file(&rows, export_path)
        .with_context(|| format!("Failed to export {}", export_path.display()))?;

    let impossible = impossible_path(export_path);
    export_impossible_csv_to_file(&rows, &impossible)
        .with_context(|| format!("Failed to export {}", impossible.display()))?;

    tracing::info!(
        "Exported {} segments to {} (impossible-only copy: {})",
        rows.len(),
        export_path.display(),
        impossible.display()
    );

    Ok(())
}
