//! Implementation of the `hunknav show` command.
//!
//! Prints a file's content at a version token, or from the working copy.

use super::open_session;
use crate::cli::ShowArgs;
use crate::error::Result;
use std::path::Path;

/// Execute the `hunknav show` command.
pub fn cmd_show(args: ShowArgs, directory: Option<&Path>) -> Result<()> {
    let session = open_session(directory)?;
    let content = session.backend().fetch_content(&args.file, &args.version)?;

    print!("{}", content);
    Ok(())
}
