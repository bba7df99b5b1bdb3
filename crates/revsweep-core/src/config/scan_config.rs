//! Scan configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_BASE_DIR, DEFAULT_REVIEW_DIRS};

/// Configuration for the review scan.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScanConfig {
    /// Base directory containing the review directories. Default: ".".
    pub base_dir: Option<PathBuf>,
    /// Directory names scanned for review files, relative to the base.
    /// Default: ["reviews", "ux-tests"].
    #[serde(default)]
    pub review_dirs: Vec<String>,
}

impl ScanConfig {
    /// Returns the effective base directory, defaulting to the current directory.
    pub fn effective_base_dir(&self) -> PathBuf {
        self.base_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_BASE_DIR))
    }

    /// Returns the effective review directories, defaulting to the standard set.
    pub fn effective_review_dirs(&self) -> Vec<String> {
        if self.review_dirs.is_empty() {
            DEFAULT_REVIEW_DIRS.iter().map(|d| d.to_string()).collect()
        } else {
            self.review_dirs.clone()
        }
    }
}
