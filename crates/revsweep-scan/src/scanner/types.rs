//! Scanner data types: Finding, ScanReport, ScanStats.

use std::fmt;
use std::path::PathBuf;
use std::time::SystemTime;

/// Why a review file needs attention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FindingReason {
    /// The file has no review heading at all.
    MissingReviewSection,
    /// The last review section still lists pending issues.
    PendingIssues { count: usize },
}

impl fmt::Display for FindingReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingReviewSection => write!(f, "MISSING ISSUE REVIEW section"),
            Self::PendingIssues { count } => write!(f, "has {count} PENDING issue(s)"),
        }
    }
}

/// One review file that needs attention.
#[derive(Debug, Clone)]
pub struct Finding {
    /// Source file mtime; primary sort key, most recent first.
    pub modified: SystemTime,
    /// Path as discovered; rendered relative to the base directory.
    pub path: PathBuf,
    pub reason: FindingReason,
}

/// The primary output of a scan: sorted findings plus aggregate statistics.
#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    pub findings: Vec<Finding>,
    pub stats: ScanStats,
}

/// Aggregate statistics for one scan run. Logged at debug level,
/// never printed to stdout.
#[derive(Debug, Clone, Default)]
pub struct ScanStats {
    pub files_scanned: usize,
    pub files_clean: usize,
    pub scan_ms: u64,
}
