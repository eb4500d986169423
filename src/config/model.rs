//! Config struct definition and default implementation.

use serde::{Deserialize, Serialize};

/// File name looked up at the working copy root.
pub const CONFIG_FILE_NAME: &str = ".hunknav.yaml";

/// Text returned in place of file content that is not valid UTF-8.
pub const DEFAULT_PLACEHOLDER: &str = "Unable to decode file...";

/// Configuration for hunknav.
///
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Parsing settings
    // =========================================================================
    /// Close add/delete runs left open at the end of a hunk body.
    ///
    /// Off by default: zero-context replacement hunks then produce no regions
    /// for their final run.
    pub flush_trailing_runs: bool,

    // =========================================================================
    // Display settings
    // =========================================================================
    /// Describe hunks as a single `file:line` instead of three lines.
    pub concise_descriptions: bool,

    // =========================================================================
    // Backend settings
    // =========================================================================
    /// Glob patterns of repo-relative paths to leave out of changed-file lists.
    pub exclude: Vec<String>,

    /// Text shown instead of content that cannot be decoded.
    #[serde(default = "default_placeholder")]
    pub undecodable_placeholder: String,
}

fn default_placeholder() -> String {
    DEFAULT_PLACEHOLDER.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            flush_trailing_runs: false,
            concise_descriptions: false,
            exclude: Vec::new(),
            undecodable_placeholder: default_placeholder(),
        }
    }
}
