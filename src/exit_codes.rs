//! Exit code constants for the hunknav CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, bad config, missing file)
//! - 2: Malformed diff input (unparseable hunk header)
//! - 3: Version control command failure
//! - 4: No version control system found

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, invalid config, or invalid state.
pub const USER_ERROR: i32 = 1;

/// Diff text could not be parsed.
pub const MALFORMED_INPUT: i32 = 2;

/// A git or svn invocation failed.
pub const VCS_FAILURE: i32 = 3;

/// Neither a Git nor an SVN working copy contains the working directory.
pub const NO_VCS: i32 = 4;
