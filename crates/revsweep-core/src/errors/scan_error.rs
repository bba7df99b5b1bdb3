//! Scanner errors.

use std::path::PathBuf;

/// Errors that can occur during review file scanning.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("IO error scanning {path}: {source}")]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid glob pattern {pattern}: {message}")]
    PatternError { pattern: String, message: String },
}
