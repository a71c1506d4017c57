//! CSV export of survey results.
//!
//! Two files stand in for the original two-sheet workbook: the full result
//! list and the impossible-only subset.

use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};

use super::ExportError;
use crate::analysis::EffortFlag;
use crate::survey::ResultRow;

const CSV_HEADER: &str = "name,id,kom_s,pace_s_per_km,wr_pace_s_per_km,flag";

/// Export all rows to CSV format.
pub fn export_csv(rows: &[ResultRow]) -> Result<String, ExportError> {
    if rows.is_empty() {
        return Err(ExportError::NoData);
    }
    render_csv(rows.iter())
}

/// Export only the rows whose effort is flagged impossible.
///
/// The header is always present; the body may be empty.
pub fn export_impossible_csv(rows: &[ResultRow]) -> Result<String, ExportError> {
    render_csv(
        rows.iter()
            .filter(|r| r.analysis.flag == EffortFlag::Impossible),
    )
}

fn render_csv<'a, I>(rows: I) -> Result<String, ExportError>
where
    I: Iterator<Item = &'a ResultRow>,
{
    let mut output = Vec::new();

    // Write header
    writeln!(output, "{}", CSV_HEADER).map_err(|e| ExportError::WriteFailed(e.to_string()))?;

    // Write data rows
    for row in rows {
        writeln!(
            output,
            "{},{},{},{},{},{}",
            escape_field(&row.name),
            row.id,
            row.kom_s,
            row.analysis
                .pace_s_per_km
                .map_or(String::new(), |v| format!("{:.1}", v)),
            row.analysis
                .wr_pace_s_per_km
                .map_or(String::new(), |v| format!("{:.1}", v)),
            row.analysis.flag,
        )
        .map_err(|e| ExportError::WriteFailed(e.to_string()))?;
    }

    String::from_utf8(output).map_err(|e| ExportError::WriteFailed(e.to_string()))
}

/// Quote a free-text field when it contains CSV metacharacters.
fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Write the full export to a file.
pub fn export_csv_to_file(rows: &[ResultRow], path: &Path) -> Result<(), ExportError> {
    let content = export_csv(rows)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Write the impossible-only export to a file.
pub fn export_impossible_csv_to_file(rows: &[ResultRow], path: &Path) -> Result<(), ExportError> {
    let content = export_impossible_csv(rows)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Companion filename for the impossible-only export:
/// `segment_analysis.csv` becomes `segment_analysis_impossible.csv`.
pub fn impossible_path(base: &Path) -> PathBuf {
    let stem = base
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("export");
    let name = match base.extension().and_then(|e| e.to_str()) {
        Some(ext) => format!("{}_impossible.{}", stem, ext),
        None => format!("{}_impossible", stem),
    };
    base.with_file_name(name)
}

/// Generate a default filename for a timestamped export.
pub fn generate_export_filename(started_at: DateTime<Utc>) -> String {
    format!("komscout_{}.csv", started_at.format("%Y%m%d_%H%M%S"))
}
