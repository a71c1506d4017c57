//! Survey reporting: console listing and CSV export.

pub mod console;
pub mod exporter_csv;

use thiserror::Error;

pub use console::print_report;
pub use exporter_csv::{
    export_csv, export_csv_to_file, export_impossible_csv, export_impossible_csv_to_file,
    generate_export_filename, impossible_path,
};

/// Errors during report export.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Nothing to export
    #[error("No rows to export")]
    NoData,

    /// Failed to write export data
    #[error("Failed to write data: {0}")]
    WriteFailed(String),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
