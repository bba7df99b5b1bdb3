//! # revsweep-core
//!
//! Foundation crate for the revsweep review scanner.
//! Defines configuration, errors, constants, and tracing setup.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;

// Re-export the most commonly used types at the crate root.
pub use config::{ScanConfig, SweepConfig};
pub use errors::{ConfigError, ScanError, SweepError};
