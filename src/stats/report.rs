//! Statistics Report Module
//! Formats column statistics as a fixed-width text table.

use crate::stats::ColumnStats;
use std::path::Path;

pub const REPORT_TITLE: &str = "Strain-Stress Data Analysis";

/// Row labels in report order.
pub const ROW_LABELS: [&str; 8] = ["count", "mean", "std", "min", "25%", "50%", "75%", "max"];

const COLUMN_GAP: &str = "  ";

fn format_value(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else {
        format!("{value:.6}")
    }
}

/// Render the statistics table: one column per numeric input column, one row per statistic.
pub fn format_stats_table(stats: &[ColumnStats]) -> String {
    if stats.is_empty() {
        return "No numeric columns to summarize.\n".to_string();
    }

    let label_width = ROW_LABELS.iter().map(|l| l.len()).max().unwrap_or(0);

    let cells: Vec<Vec<String>> = stats
        .iter()
        .map(|s| s.values().iter().map(|v| format_value(*v)).collect())
        .collect();

    let widths: Vec<usize> = stats
        .iter()
        .zip(&cells)
        .map(|(s, col)| {
            col.iter()
                .map(String::len)
                .chain(std::iter::once(s.name.len()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();

    out.push_str(&" ".repeat(label_width));
    for (s, &width) in stats.iter().zip(&widths) {
        out.push_str(COLUMN_GAP);
        out.push_str(&format!("{:>width$}", s.name));
    }
    out.push('\n');

    for (row, label) in ROW_LABELS.iter().enumerate() {
        out.push_str(&format!("{label:<label_width$}"));
        for (col, &width) in cells.iter().zip(&widths) {
            out.push_str(COLUMN_GAP);
            out.push_str(&format!("{:>width$}", col[row]));
        }
        out.push('\n');
    }

    out
}

/// Full report text: title, blank line, source file, then the table.
pub fn format_report(source_path: &Path, stats: &[ColumnStats]) -> String {
    format!(
        "{REPORT_TITLE}\n\nFile: {}\n{}",
        source_path.display(),
        format_stats_table(stats)
    )
}
