//! Implementation of the `hunknav hunks` command.
//!
//! Describes every hunk of every changed file, with the filespecs an editor
//! needs to open the old and new side at the hunk's first line.

use super::open_session;
use crate::cli::HunksArgs;
use crate::diff::FileDiff;
use crate::error::{HunkNavError, Result};
use serde_json::{json, Value};
use std::path::Path;

/// Execute the `hunknav hunks` command.
pub fn cmd_hunks(args: HunksArgs, directory: Option<&Path>) -> Result<()> {
    let mut session = open_session(directory)?;
    let concise = session.config.concise_descriptions;
    let files = session.backend_mut().enumerate_changed_files(&args.spec)?;

    if args.json {
        let output = serde_json::to_string_pretty(&hunks_json(files, concise)).map_err(|e| {
            HunkNavError::UserError(format!("failed to serialize hunks: {}", e))
        })?;
        println!("{}", output);
    } else {
        print!("{}", render_hunks(files, concise));
    }

    Ok(())
}

fn render_hunks(files: &[FileDiff], concise: bool) -> String {
    let mut out = String::new();

    for file in files {
        for hunk in &file.hunks {
            for line in file.hunk_description(hunk, concise) {
                out.push_str(&line);
                out.push('\n');
            }
            let (old_spec, new_spec) = file.filespecs(hunk);
            out.push_str(&format!("  old: {}\n  new: {}\n\n", old_spec, new_spec));
        }
    }

    out
}

fn hunks_json(files: &[FileDiff], concise: bool) -> Value {
    let hunks: Vec<Value> = files
        .iter()
        .flat_map(|file| {
            file.hunks.iter().map(move |hunk| {
                let (old_spec, new_spec) = file.filespecs(hunk);
                let (lines_removed, lines_added) = hunk.changed_line_counts();
                json!({
                    "file": file.filename,
                    "type": hunk.hunk_type,
                    "old_line_start": hunk.old_line_start,
                    "old_hunk_len": hunk.old_hunk_len,
                    "new_line_start": hunk.new_line_start,
                    "new_hunk_len": hunk.new_hunk_len,
                    "lines_removed": lines_removed,
                    "lines_added": lines_added,
                    "description": file.hunk_description(hunk, concise),
                    "old_filespec": old_spec,
                    "new_filespec": new_spec,
                })
            })
        })
        .collect();

    Value::Array(hunks)
}
