//! Console report rendering.
//!
//! Stdout carries exactly one of two shapes: the all-handled line, or a
//! header followed by one line per finding. Logs and errors go to stderr.

use std::path::Path;
use std::time::SystemTime;

use chrono::{DateTime, Local};
use revsweep_core::constants::{REPORT_PATH_WIDTH, TIMESTAMP_FORMAT};

use crate::scanner::ScanReport;

/// Render the report into its final console form.
pub fn render(report: &ScanReport, base: &Path) -> String {
    if report.findings.is_empty() {
        return "All review files are fully handled!\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "Found {} file(s) needing attention:\n\n",
        report.findings.len()
    ));

    for finding in &report.findings {
        let timestamp = format_mtime(finding.modified);
        let rel = relative_path(&finding.path, base);
        output.push_str(&format!(
            "  {timestamp}  {rel:<width$}  {}\n",
            finding.reason,
            width = REPORT_PATH_WIDTH,
        ));
    }
    output
}

/// Format an mtime as local time with minute precision.
fn format_mtime(mtime: SystemTime) -> String {
    DateTime::<Local>::from(mtime)
        .format(TIMESTAMP_FORMAT)
        .to_string()
}

/// Render the path relative to the base directory, falling back to the
/// full path when the base is not a prefix.
fn relative_path(path: &Path, base: &Path) -> String {
    path.strip_prefix(base)
        .unwrap_or(path)
        .display()
        .to_string()
}
