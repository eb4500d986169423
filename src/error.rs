//! Error types for hunknav.
//!
//! Uses thiserror for derive macros. Every variant maps to one exit code.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for hunknav operations.
#[derive(Error, Debug)]
pub enum HunkNavError {
    /// Neither `git rev-parse` nor `svn info` found a working copy.
    #[error("no version control system found (not inside a Git or SVN working copy)")]
    NoVersionControlFound,

    /// A hunk header did not match `@@ -a[,b] +c[,d] @@`.
    #[error("malformed hunk header: {0:?}")]
    MalformedHunkHeader(String),

    /// User provided invalid arguments or the system is in an invalid state.
    #[error("{0}")]
    UserError(String),

    /// A version control command could not be run or exited non-zero.
    #[error("Version control command failed: {0}")]
    VcsError(String),

    /// The config file could not be read, parsed, or validated.
    #[error("Invalid configuration: {0}")]
    ConfigError(String),
}

impl HunkNavError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            HunkNavError::NoVersionControlFound => exit_codes::NO_VCS,
            HunkNavError::MalformedHunkHeader(_) => exit_codes::MALFORMED_INPUT,
            HunkNavError::UserError(_) => exit_codes::USER_ERROR,
            HunkNavError::VcsError(_) => exit_codes::VCS_FAILURE,
            HunkNavError::ConfigError(_) => exit_codes::USER_ERROR,
        }
    }
}

/// Result type alias for hunknav operations.
pub type Result<T> = std::result::Result<T, HunkNavError>;
