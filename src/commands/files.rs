//! Implementation of the `hunknav files` command.
//!
//! Lists the changed files of a diff spec with their hunk counts.

use super::open_session;
use crate::cli::SpecArgs;
use crate::diff::FileDiff;
use crate::error::Result;
use std::path::Path;

/// Execute the `hunknav files` command.
pub fn cmd_files(args: SpecArgs, directory: Option<&Path>) -> Result<()> {
    let mut session = open_session(directory)?;
    let files = session.backend_mut().enumerate_changed_files(&args.spec)?;

    if files.is_empty() {
        println!("No changes.");
        return Ok(());
    }

    print!("{}", render_files(files));
    Ok(())
}

/// One line per file: name, hunk count, absolute path.
fn render_files(files: &[FileDiff]) -> String {
    let width = files.iter().map(|f| f.filename.len()).max().unwrap_or(0);

    files
        .iter()
        .map(|file| {
            format!(
                "{:width$}  {:>3} hunk(s)  {}\n",
                file.filename,
                file.hunks.len(),
                file.abs_filename.display(),
                width = width
            )
        })
        .collect()
}
