//! Top-level revsweep configuration with layered resolution.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::ScanConfig;
use crate::errors::ConfigError;

/// Top-level configuration for a revsweep run.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`REVSWEEP_*`)
/// 2. Project config (`revsweep.toml` in the scan root)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SweepConfig {
    pub scan: ScanConfig,
}

impl SweepConfig {
    /// Load configuration with layered resolution.
    ///
    /// Resolution order (highest priority first):
    /// 1. Environment variables (`REVSWEEP_BASE_DIR`, `REVSWEEP_REVIEW_DIRS`)
    /// 2. Project config (`revsweep.toml` in `root`)
    /// 3. Compiled defaults
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 2: project config
        let project_config_path = root.join("revsweep.toml");
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 1 (highest priority): environment variables
        Self::apply_env_overrides(&mut config);

        // Validate the final config
        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &SweepConfig) -> Result<(), ConfigError> {
        let dirs = config.scan.effective_review_dirs();
        let mut seen = HashSet::new();
        for dir in &dirs {
            if dir.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: "scan.review_dirs".to_string(),
                    message: "entries must be non-empty".to_string(),
                });
            }
            // Duplicates would report the same files twice.
            if !seen.insert(dir.as_str()) {
                return Err(ConfigError::ValidationFailed {
                    field: "scan.review_dirs".to_string(),
                    message: format!("duplicate entry: {dir}"),
                });
            }
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut SweepConfig, path: &Path) -> Result<(), ConfigError> {
        let content =
            std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
                path: path.display().to_string(),
            })?;

        let file_config: SweepConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a value.
    fn merge(base: &mut SweepConfig, other: &SweepConfig) {
        if other.scan.base_dir.is_some() {
            base.scan.base_dir = other.scan.base_dir.clone();
        }
        if !other.scan.review_dirs.is_empty() {
            base.scan.review_dirs = other.scan.review_dirs.clone();
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `REVSWEEP_BASE_DIR=/path`, `REVSWEEP_REVIEW_DIRS=reviews,qa`.
    fn apply_env_overrides(config: &mut SweepConfig) {
        if let Ok(val) = std::env::var("REVSWEEP_BASE_DIR") {
            config.scan.base_dir = Some(PathBuf::from(val));
        }
        if let Ok(val) = std::env::var("REVSWEEP_REVIEW_DIRS") {
            let dirs: Vec<String> = val
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
            if !dirs.is_empty() {
                config.scan.review_dirs = dirs;
            }
        }
    }
}
