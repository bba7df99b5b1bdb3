//! Review file discovery via glob patterns.

use std::path::{Path, PathBuf};

use glob::{glob_with, MatchOptions};
use revsweep_core::constants::REVIEW_FILE_GLOB;
use revsweep_core::errors::ScanError;

/// Enumerate review files directly inside `<base>/<dir>` (non-recursive).
///
/// A missing directory yields no matches and is not an error, matching the
/// glob semantics the review layout relies on. Dotfiles are never matched.
/// Directories that match the pattern are skipped; every other match is
/// returned as-is, so unreadable entries fail at read time and abort the
/// scan.
pub fn discover_files(base: &Path, dir: &str) -> Result<Vec<PathBuf>, ScanError> {
    let pattern = base.join(dir).join(REVIEW_FILE_GLOB);
    let pattern = pattern.to_string_lossy();

    // Dotfiles are not review files; `*` must not match a leading dot.
    let options = MatchOptions {
        require_literal_leading_dot: true,
        ..MatchOptions::new()
    };
    let entries = glob_with(&pattern, options).map_err(|e| ScanError::PatternError {
        pattern: pattern.to_string(),
        message: e.to_string(),
    })?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| {
            let path = e.path().to_path_buf();
            ScanError::IoError {
                path,
                source: e.into_error(),
            }
        })?;
        // Glob also matches directories named like review files; skip them.
        // Anything else, dangling symlinks included, flows to the per-file
        // read, where a failure aborts the scan.
        if !path.is_dir() {
            files.push(path);
        }
    }
    Ok(files)
}
