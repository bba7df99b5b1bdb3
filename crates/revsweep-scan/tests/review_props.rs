//! Property-based tests for the review classifier.
//!
//! Uses proptest to fuzz-verify:
//!   - pending counts are bounded and at least 1
//!   - content before the last heading never changes the classification
//!   - the pending predicate implies the issue-line prefix

use proptest::prelude::*;

use revsweep_scan::review::{classify, is_pending_issue, ReviewStatus};

/// One line of a synthetic review file: arbitrary printable text, headings,
/// and issue lines in both statuses.
fn review_line() -> impl Strategy<Value = String> {
    prop_oneof![
        "[ -~]{0,40}",
        Just("ISSUE REVIEW".to_string()),
        Just("=== ISSUE REVIEW ===".to_string()),
        (0usize..10).prop_map(|i| format!("- Issue {i}: needs work - pending")),
        (0usize..10).prop_map(|i| format!("- Issue {i}: handled - resolved")),
    ]
}

proptest! {
    /// A Pending classification always carries a count of at least 1.
    #[test]
    fn prop_pending_count_at_least_one(
        lines in prop::collection::vec(review_line(), 0..30),
    ) {
        let content = lines.join("\n");
        if let ReviewStatus::Pending { count } = classify(&content) {
            prop_assert!(count >= 1, "Pending must carry count >= 1, got {}", count);
        }
    }

    /// The pending count never exceeds the number of issue-prefixed lines.
    #[test]
    fn prop_pending_bounded_by_issue_lines(
        lines in prop::collection::vec(review_line(), 0..30),
    ) {
        let content = lines.join("\n");
        let issue_lines = lines
            .iter()
            .filter(|line| line.trim().starts_with("- Issue"))
            .count();

        if let ReviewStatus::Pending { count } = classify(&content) {
            prop_assert!(
                count <= issue_lines,
                "pending count {} exceeds issue lines {}",
                count,
                issue_lines
            );
        }
    }

    /// Arbitrary lines prepended before a heading-bearing document do not
    /// change its classification: only the last review section counts.
    #[test]
    fn prop_prefix_lines_never_change_classification(
        prefix in prop::collection::vec(review_line(), 0..20),
        pending in 0usize..5,
    ) {
        let mut doc = String::from("=== ISSUE REVIEW ===\n");
        for i in 0..pending {
            doc.push_str(&format!("- Issue {i}: needs work - pending\n"));
        }
        let base_status = classify(&doc);

        let prefixed = format!("{}\n{}", prefix.join("\n"), doc);
        prop_assert_eq!(classify(&prefixed), base_status);
    }

    /// Every pending line is an issue line.
    #[test]
    fn prop_pending_implies_issue_prefix(line in "[ -~]{0,80}") {
        if is_pending_issue(&line) {
            prop_assert!(line.trim().starts_with("- Issue"));
        }
    }

    /// Classification never panics on arbitrary unicode content.
    #[test]
    fn prop_classify_total(content in "\\PC{0,256}") {
        let _ = classify(&content);
    }
}
