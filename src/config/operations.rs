//! Config loading, validation, and utility operations.

use super::model::{Config, CONFIG_FILE_NAME};
use crate::diff::TrailingRuns;
use crate::error::{HunkNavError, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(HunkNavError::ConfigError)` - Read error, parse error, or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            HunkNavError::ConfigError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Load `.hunknav.yaml` from `root`, or defaults if there is none.
    pub fn load_from_root<P: AsRef<Path>>(root: P) -> Result<Self> {
        let path = root.as_ref().join(CONFIG_FILE_NAME);
        if path.is_file() {
            log::debug!("loading config from {}", path.display());
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document deserializes as unit, not as an empty mapping.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        // A comment-only document is null.
        let config = serde_yaml::from_str::<Option<Config>>(yaml)
            .map_err(|e| HunkNavError::ConfigError(format!("failed to parse config YAML: {}", e)))?
            .unwrap_or_default();

        config.validate()?;
        Ok(config)
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `exclude` entries must be non-empty, valid globs
    /// - `undecodable_placeholder` must be non-empty
    pub fn validate(&self) -> Result<()> {
        if self.undecodable_placeholder.is_empty() {
            return Err(HunkNavError::ConfigError(
                "undecodable_placeholder must not be empty".to_string(),
            ));
        }

        self.exclude_set()?;
        Ok(())
    }

    /// Compile `exclude` into a glob set.
    pub fn exclude_set(&self) -> Result<GlobSet> {
        let mut builder = GlobSetBuilder::new();
        for pattern in &self.exclude {
            if pattern.is_empty() {
                return Err(HunkNavError::ConfigError(
                    "exclude entries must be non-empty".to_string(),
                ));
            }
            let glob = Glob::new(pattern).map_err(|e| {
                HunkNavError::ConfigError(format!("invalid exclude pattern '{}': {}", pattern, e))
            })?;
            builder.add(glob);
        }

        builder
            .build()
            .map_err(|e| HunkNavError::ConfigError(format!("failed to build exclude set: {}", e)))
    }

    pub fn trailing_runs(&self) -> TrailingRuns {
        if self.flush_trailing_runs {
            TrailingRuns::Flush
        } else {
            TrailingRuns::Drop
        }
    }
}
