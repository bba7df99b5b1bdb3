//! Review-section classification heuristics.
//!
//! Pure text analysis over one file's content: locate the last review
//! heading and count the pending issue lines from it to the end of the file.
//! Earlier sections are superseded; body text above the last heading may
//! mention reviews without being one.

use std::sync::LazyLock;

use regex::Regex;
use revsweep_core::constants::{ISSUE_LINE_PREFIX, PENDING_TAIL_PATTERN, REVIEW_HEADING};

/// Compiled pending status-marker pattern.
static PENDING_TAIL: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(PENDING_TAIL_PATTERN).ok());

/// Per-file classification of the last review section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewStatus {
    /// No qualifying review heading anywhere in the file.
    MissingSection,
    /// The last review section still lists pending issues.
    Pending { count: usize },
    /// The last review section has no pending issues.
    Clean,
}

/// Returns true if the line is a review heading: after trimming whitespace
/// and `=` decoration, it equals `ISSUE REVIEW` ASCII case-insensitively.
pub fn is_review_heading(line: &str) -> bool {
    line.trim()
        .trim_matches('=')
        .trim()
        .eq_ignore_ascii_case(REVIEW_HEADING)
}

/// Index of the last review heading, if any.
pub fn last_heading_index(lines: &[&str]) -> Option<usize> {
    lines.iter().rposition(|line| is_review_heading(line))
}

/// Returns true if the trimmed line is an issue line whose status marker
/// is `pending`. The prefix check is case-sensitive, and the marker requires
/// the hyphen separator: `- Issue 3: blocked - pending` counts,
/// `- Issue 3: blocked - pending review` does not.
pub fn is_pending_issue(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.starts_with(ISSUE_LINE_PREFIX)
        && PENDING_TAIL.as_ref().is_some_and(|re| re.is_match(trimmed))
}

/// Classify one file's content by its last review section.
pub fn classify(content: &str) -> ReviewStatus {
    let lines: Vec<&str> = content.lines().collect();

    let Some(heading) = last_heading_index(&lines) else {
        return ReviewStatus::MissingSection;
    };

    let count = lines[heading..]
        .iter()
        .filter(|line| is_pending_issue(line))
        .count();

    if count == 0 {
        ReviewStatus::Clean
    } else {
        ReviewStatus::Pending { count }
    }
}
