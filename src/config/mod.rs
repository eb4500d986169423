//! Configuration model for hunknav.
//!
//! This module defines the Config struct that represents `.hunknav.yaml` at
//! the working copy root. It supports forward-compatible YAML parsing
//! (unknown fields are ignored), defaults for every field, and validation of
//! config values.

mod model;
mod operations;


// Re-export public API
pub use model::{Config, CONFIG_FILE_NAME, DEFAULT_PLACEHOLDER};
