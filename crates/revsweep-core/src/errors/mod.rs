//! Error handling for revsweep.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod scan_error;
pub mod sweep_error;

pub use config_error::ConfigError;
pub use scan_error::ScanError;
pub use sweep_error::SweepError;
