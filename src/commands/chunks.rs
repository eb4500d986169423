//! Implementation of the `hunknav chunks` command.
//!
//! Prints the add-focused and delete-focused chunk groupings of every hunk.

use super::open_session;
use crate::cli::SpecArgs;
use crate::diff::{Chunks, FileDiff};
use crate::error::Result;
use std::path::Path;

/// Execute the `hunknav chunks` command.
pub fn cmd_chunks(args: SpecArgs, directory: Option<&Path>) -> Result<()> {
    let mut session = open_session(directory)?;
    let files = session.backend_mut().enumerate_changed_files(&args.spec)?;

    print!("{}", render_chunks(files));
    Ok(())
}

fn render_chunks(files: &[FileDiff]) -> String {
    let mut out = String::new();

    for file in files {
        for hunk in &file.hunks {
            let (add_chunks, del_chunks) = hunk.sort_chunks();
            out.push_str(&format!("{}:{}\n", file.filename, hunk.new_line_start));
            push_chunks(&mut out, "add", &add_chunks);
            push_chunks(&mut out, "del", &del_chunks);
        }
    }

    out
}

fn push_chunks(out: &mut String, label: &str, chunks: &Chunks) {
    for (index, chunk) in chunks.iter().enumerate() {
        out.push_str(&format!("  {} chunk {}:\n", label, index + 1));
        for line in chunk {
            out.push_str(&format!("    {}\n", line));
        }
    }
}
