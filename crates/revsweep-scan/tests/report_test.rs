//! Report rendering tests.
//!
//! The console contract is exact: one of two output shapes, local-time
//! minute-precision timestamps, and a 35-column path field.

use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use chrono::{DateTime, Local};
use revsweep_scan::render;
use revsweep_scan::scanner::types::{Finding, FindingReason, ScanReport};

// ---- Helpers ----

fn mtime(secs: u64) -> SystemTime {
    SystemTime::UNIX_EPOCH + Duration::from_secs(secs)
}

/// The timestamp exactly as render formats it.
fn expected_timestamp(t: SystemTime) -> String {
    DateTime::<Local>::from(t).format("%Y-%m-%d %H:%M").to_string()
}

fn report_with(findings: Vec<Finding>) -> ScanReport {
    ScanReport {
        findings,
        ..Default::default()
    }
}

// ---- Output shapes ----

/// Zero findings render the all-handled line, nothing else.
#[test]
fn all_handled_shape() {
    let report = report_with(Vec::new());
    assert_eq!(
        render(&report, Path::new("/base")),
        "All review files are fully handled!\n"
    );
}

/// Findings render the header, a blank line, and one line per finding.
#[test]
fn findings_shape() {
    let t = mtime(1_700_000_000);
    let report = report_with(vec![Finding {
        modified: t,
        path: PathBuf::from("/base/reviews/a.txt"),
        reason: FindingReason::MissingReviewSection,
    }]);

    let expected = format!(
        "Found 1 file(s) needing attention:\n\n  {}  {:<35}  MISSING ISSUE REVIEW section\n",
        expected_timestamp(t),
        "reviews/a.txt",
    );
    assert_eq!(render(&report, Path::new("/base")), expected);
}

/// The header count matches the number of findings, and line order is the
/// report's order (render never re-sorts).
#[test]
fn header_count_and_order() {
    let report = report_with(vec![
        Finding {
            modified: mtime(2_000_000),
            path: PathBuf::from("/base/reviews/first.txt"),
            reason: FindingReason::PendingIssues { count: 2 },
        },
        Finding {
            modified: mtime(1_000_000),
            path: PathBuf::from("/base/ux-tests/second.txt"),
            reason: FindingReason::MissingReviewSection,
        },
    ]);

    let output = render(&report, Path::new("/base"));
    assert!(output.starts_with("Found 2 file(s) needing attention:\n\n"));

    let first = output.find("reviews/first.txt").unwrap();
    let second = output.find("ux-tests/second.txt").unwrap();
    assert!(first < second, "render must keep the report's order");
}

// ---- Line format ----

/// The path field is left-justified to 35 columns.
#[test]
fn path_field_padded_to_35() {
    let t = mtime(1_700_000_000);
    let report = report_with(vec![Finding {
        modified: t,
        path: PathBuf::from("/base/reviews/a.txt"),
        reason: FindingReason::PendingIssues { count: 3 },
    }]);

    let output = render(&report, Path::new("/base"));
    let padded = format!("  {:<35}  has 3 PENDING issue(s)\n", "reviews/a.txt");
    assert!(
        output.contains(&padded),
        "short paths must be padded: {output:?}"
    );
}

/// Long paths are never truncated.
#[test]
fn long_path_not_truncated() {
    let long_rel = "reviews/a-very-long-review-file-name-that-exceeds-the-column.txt";
    let report = report_with(vec![Finding {
        modified: mtime(1_700_000_000),
        path: PathBuf::from(format!("/base/{long_rel}")),
        reason: FindingReason::MissingReviewSection,
    }]);

    let output = render(&report, Path::new("/base"));
    assert!(output.contains(long_rel));
}

/// The reason strings match the fixed wording exactly.
#[test]
fn reason_wording() {
    assert_eq!(
        FindingReason::MissingReviewSection.to_string(),
        "MISSING ISSUE REVIEW section"
    );
    assert_eq!(
        FindingReason::PendingIssues { count: 1 }.to_string(),
        "has 1 PENDING issue(s)"
    );
    assert_eq!(
        FindingReason::PendingIssues { count: 12 }.to_string(),
        "has 12 PENDING issue(s)"
    );
}

// ---- Path relativization ----

/// Paths outside the base fall back to the full path.
#[test]
fn unrelated_base_falls_back_to_full_path() {
    let report = report_with(vec![Finding {
        modified: mtime(1_700_000_000),
        path: PathBuf::from("/elsewhere/reviews/a.txt"),
        reason: FindingReason::MissingReviewSection,
    }]);

    let output = render(&report, Path::new("/base"));
    assert!(output.contains("/elsewhere/reviews/a.txt"));
}

/// A relative base ("." style discovery) still strips cleanly.
#[test]
fn current_dir_base_strips() {
    let report = report_with(vec![Finding {
        modified: mtime(1_700_000_000),
        path: PathBuf::from("./reviews/a.txt"),
        reason: FindingReason::MissingReviewSection,
    }]);

    let output = render(&report, Path::new("."));
    assert!(output.contains("  reviews/a.txt"));
    assert!(!output.contains("./reviews/a.txt"));
}
