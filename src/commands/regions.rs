//! Implementation of the `hunknav regions` command.
//!
//! Prints the paired old/new regions of every hunk, either in diff
//! coordinates (1-based lines) or in an editor's 0-based coordinates.

use crate::cli::RegionsArgs;
use crate::context::{Overrides, Session};
use crate::diff::{DiffRegion, FileDiff, HunkDiff};
use crate::error::{HunkNavError, Result};
use serde::Serialize;
use std::fmt::Display;
use std::path::Path;

/// Region lists of one hunk, in whichever coordinate space was asked for.
#[derive(Debug, Serialize)]
struct HunkRegions<'a, R> {
    file: &'a str,
    old_line_start: usize,
    new_line_start: usize,
    old: Vec<R>,
    new: Vec<R>,
}

impl<'a, R> HunkRegions<'a, R> {
    fn collect(file: &'a FileDiff, hunk: &HunkDiff, convert: impl Fn(&DiffRegion) -> R) -> Self {
        Self {
            file: &file.filename,
            old_line_start: hunk.old_line_start,
            new_line_start: hunk.new_line_start,
            old: hunk.old_regions().iter().map(&convert).collect(),
            new: hunk.new_regions().iter().map(&convert).collect(),
        }
    }
}

impl<R: Display> HunkRegions<'_, R> {
    fn render(&self) -> String {
        let mut out = format!(
            "{} -{} +{}\n",
            self.file, self.old_line_start, self.new_line_start
        );
        if self.old.is_empty() {
            out.push_str("  (no closed regions)\n");
        }
        for (old, new) in self.old.iter().zip(&self.new) {
            out.push_str(&format!("  {}  {}\n", old, new));
        }
        out
    }
}

/// Execute the `hunknav regions` command.
pub fn cmd_regions(args: RegionsArgs, directory: Option<&Path>) -> Result<()> {
    let overrides = Overrides {
        flush_trailing_runs: args.strict,
    };
    let mut session = Session::open(directory, overrides)?;
    let files = session.backend_mut().enumerate_changed_files(&args.spec)?;

    let output = if args.zero_based {
        format_regions(files, DiffRegion::to_host_span, args.json)?
    } else {
        format_regions(files, |region: &DiffRegion| *region, args.json)?
    };

    print!("{}", output);
    Ok(())
}

fn format_regions<R, F>(files: &[FileDiff], convert: F, json: bool) -> Result<String>
where
    R: Display + Serialize,
    F: Fn(&DiffRegion) -> R,
{
    let convert = &convert;
    let hunks: Vec<HunkRegions<'_, R>> = files
        .iter()
        .flat_map(|file| {
            file.hunks
                .iter()
                .map(move |hunk| HunkRegions::collect(file, hunk, convert))
        })
        .collect();

    if json {
        let mut output = serde_json::to_string_pretty(&hunks).map_err(|e| {
            HunkNavError::UserError(format!("failed to serialize regions: {}", e))
        })?;
        output.push('\n');
        return Ok(output);
    }

    Ok(hunks.iter().map(HunkRegions::render).collect())
}
