//! Implementation of the `hunknav versions` command.
//!
//! Prints the version tokens a diff spec compares.

use super::open_session;
use crate::cli::SpecArgs;
use crate::error::Result;
use crate::vcs::Versions;
use std::path::Path;

/// Execute the `hunknav versions` command.
pub fn cmd_versions(args: SpecArgs, directory: Option<&Path>) -> Result<()> {
    let session = open_session(directory)?;
    let versions = session.backend().resolve_versions(&args.spec)?;

    print!("{}", render_versions(&versions));
    Ok(())
}

fn render_versions((old, new): &Versions) -> String {
    format!("old: {}\nnew: {}\n", display_token(old), display_token(new))
}

fn display_token(token: &str) -> &str {
    if token.is_empty() {
        "(working copy)"
    } else {
        token
    }
}
