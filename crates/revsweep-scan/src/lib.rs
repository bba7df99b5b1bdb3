//! # revsweep-scan
//!
//! The revsweep scanner pipeline: review file discovery, review-section
//! classification, and console report rendering.

pub mod report;
pub mod review;
pub mod scanner;

// Re-export the most commonly used types at the crate root.
pub use report::render;
pub use review::{classify, ReviewStatus};
pub use scanner::{Finding, FindingReason, ScanReport, ScanStats, Scanner};
