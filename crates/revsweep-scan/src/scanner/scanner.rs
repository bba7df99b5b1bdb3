//! Sequential review file scanner.

use std::path::Path;
use std::time::{Instant, SystemTime};

use revsweep_core::config::ScanConfig;
use revsweep_core::errors::ScanError;
use tracing::debug;

use super::types::{Finding, FindingReason, ScanReport, ScanStats};
use super::walker::discover_files;
use crate::review::{self, ReviewStatus};

/// Scans the configured review directories and reports files that still
/// need attention.
pub struct Scanner {
    config: ScanConfig,
}

impl Scanner {
    pub fn new(config: ScanConfig) -> Self {
        Self { config }
    }

    /// Run the scan: enumerate review files per configured directory,
    /// classify each one, and return the findings sorted most recently
    /// modified first.
    pub fn scan(&self) -> Result<ScanReport, ScanError> {
        let started = Instant::now();
        let base = self.config.effective_base_dir();

        let mut findings = Vec::new();
        let mut stats = ScanStats::default();

        for dir in self.config.effective_review_dirs() {
            let files = discover_files(&base, &dir)?;
            debug!(dir = %dir, matches = files.len(), "enumerated review directory");

            for path in files {
                let (modified, status) = scan_file(&path)?;
                stats.files_scanned += 1;

                let reason = match status {
                    ReviewStatus::MissingSection => FindingReason::MissingReviewSection,
                    ReviewStatus::Pending { count } => {
                        FindingReason::PendingIssues { count }
                    }
                    ReviewStatus::Clean => {
                        stats.files_clean += 1;
                        continue;
                    }
                };
                findings.push(Finding {
                    modified,
                    path,
                    reason,
                });
            }
        }

        // Most recently modified first; equal mtimes ordered by path.
        findings.sort_by(|a, b| {
            b.modified
                .cmp(&a.modified)
                .then_with(|| a.path.cmp(&b.path))
        });

        stats.scan_ms = started.elapsed().as_millis() as u64;
        debug!(
            scanned = stats.files_scanned,
            clean = stats.files_clean,
            findings = findings.len(),
            elapsed_ms = stats.scan_ms,
            "scan complete"
        );

        Ok(ScanReport { findings, stats })
    }
}

/// Read one review file and classify its last review section.
/// The file is fully read and closed before the next one is opened.
fn scan_file(path: &Path) -> Result<(SystemTime, ReviewStatus), ScanError> {
    let metadata = std::fs::metadata(path).map_err(|e| ScanError::IoError {
        path: path.to_path_buf(),
        source: e,
    })?;
    let modified = metadata.modified().map_err(|e| ScanError::IoError {
        path: path.to_path_buf(),
        source: e,
    })?;

    let bytes = std::fs::read(path).map_err(|e| ScanError::IoError {
        path: path.to_path_buf(),
        source: e,
    })?;
    // Invalid UTF-8 is replaced, never fatal.
    let content = String::from_utf8_lossy(&bytes);

    Ok((modified, review::classify(&content)))
}
