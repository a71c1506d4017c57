//! Console listing of survey results.

use crate::analysis::EffortFlag;
use crate::survey::ResultRow;

/// Print the full listing, then the impossible-only subset.
pub fn print_report(rows: &[ResultRow]) {
    println!("{} segments in the extended area:", rows.len());
    for row in rows {
        println!("{}", format_row(row));
    }

    println!();
    println!("Segments in the extended area containing an error:");
    for row in rows
        .iter()
        .filter(|r| r.analysis.flag == EffortFlag::Impossible)
    {
        println!("{}", format_row(row));
    }
}

/// One listing line.
pub fn format_row(row: &ResultRow) -> String {
    format!(
        "{} | KOM: {} s | Pace: {} s/km | WR Pace: {} s/km | Flag: {} | ID: {}",
        row.name,
        row.kom_s,
        fmt_pace(row.analysis.pace_s_per_km),
        fmt_pace(row.analysis.wr_pace_s_per_km),
        row.analysis.flag,
        row.id
    )
}

fn fmt_pace(value: Option<f64>) -> String {
    value.map_or("n/a".to_string(), |v| format!("{:.1}", v))
}
