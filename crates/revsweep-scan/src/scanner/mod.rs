//! Scanner subsystem: review file discovery and per-file classification.
//!
//! The scanner is the entry point to the revsweep pipeline. It enumerates
//! `*.txt` files in the configured review directories, classifies each file's
//! last review section, and produces a `ScanReport` of findings sorted most
//! recently modified first.

pub mod scanner;
pub mod types;
pub mod walker;

pub use scanner::Scanner;
pub use types::{Finding, FindingReason, ScanReport, ScanStats};
