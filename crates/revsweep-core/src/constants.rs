//! Shared constants for the revsweep review scanner.

/// revsweep version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default base directory containing the review directories.
pub const DEFAULT_BASE_DIR: &str = ".";

/// Number of default review directories.
pub const DEFAULT_REVIEW_DIR_COUNT: usize = 2;

/// Default review directories scanned under the base.
pub const DEFAULT_REVIEW_DIRS: [&str; DEFAULT_REVIEW_DIR_COUNT] = ["reviews", "ux-tests"];

// ---- Review File Format ----

/// Glob pattern for review files within each review directory.
/// Matching is non-recursive; nested subdirectories are never scanned.
pub const REVIEW_FILE_GLOB: &str = "*.txt";

/// Heading that opens a review section. Lines are compared against this
/// after trimming whitespace and `=` decoration, ASCII case-insensitive.
pub const REVIEW_HEADING: &str = "ISSUE REVIEW";

/// Prefix that marks an issue line, compared case-sensitively on the
/// trimmed line.
pub const ISSUE_LINE_PREFIX: &str = "- Issue";

/// Tail pattern marking an issue as pending: a hyphen status separator,
/// optional whitespace, the word `pending`, optional trailing whitespace.
pub const PENDING_TAIL_PATTERN: &str = r"-\s*pending\s*$";

// ---- Report Format ----

/// Minimum column width for the relative path in a report line.
/// Longer paths are never truncated.
pub const REPORT_PATH_WIDTH: usize = 35;

/// Timestamp format for report lines (local time, minute precision).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M";
