//! Configuration system for revsweep.
//! TOML-based, layered resolution: env > project > defaults.

pub mod scan_config;
pub mod sweep_config;

pub use scan_config::ScanConfig;
pub use sweep_config::SweepConfig;
