//! Whole-file diff text split into hunks.

use crate::error::Result;
use std::path::{Path, PathBuf};

use super::header::HunkHeader;
use super::hunk::{HunkDiff, TrailingRuns};

/// The diff of one file: its names plus one [`HunkDiff`] per `@@` block.
#[derive(Debug, Clone)]
pub struct FileDiff {
    /// Repository-relative path as reported by the VCS.
    pub filename: String,
    /// Absolute path of the working-copy file.
    pub abs_filename: PathBuf,
    /// Name used for the old side in filespecs (defaults to `filename`).
    pub old_file: String,
    /// The raw diff text this was built from.
    pub diff_text: String,
    pub hunks: Vec<HunkDiff>,
}

impl FileDiff {
    /// Split `diff_text` into hunks.
    ///
    /// Lines before the first `@@` header (`diff --git`, `index`, `---`,
    /// `+++`, SVN `Index:` banners) are ignored.
    ///
    /// # Returns
    ///
    /// * `Ok(FileDiff)` - Every hunk header parsed
    /// * `Err(HunkNavError::MalformedHunkHeader)` - Some `@@` line did not parse
    pub fn new(
        filename: impl Into<String>,
        abs_filename: impl Into<PathBuf>,
        diff_text: impl Into<String>,
        trailing: TrailingRuns,
    ) -> Result<Self> {
        let filename = filename.into();
        let diff_text = diff_text.into();
        let hunks = split_hunks(&diff_text, trailing)?;

        log::debug!("{}: {} hunk(s)", filename, hunks.len());

        Ok(Self {
            old_file: filename.clone(),
            filename,
            abs_filename: abs_filename.into(),
            diff_text,
            hunks,
        })
    }

    /// Text describing a hunk for list display.
    ///
    /// Concise form is a single `file:line`; the full form adds the header
    /// context and a `N | ++--` change summary.
    pub fn hunk_description(&self, hunk: &HunkDiff, concise: bool) -> Vec<String> {
        if concise {
            return vec![format!("{}:{}", self.filename, hunk.new_line_start)];
        }

        vec![
            format!("{} : {}", self.filename, hunk.new_line_start),
            hunk.context.clone(),
            format!(
                "{} | {}{}",
                hunk.old_hunk_len + hunk.new_hunk_len,
                "+".repeat(hunk.new_hunk_len),
                "-".repeat(hunk.old_hunk_len)
            ),
        ]
    }

    /// `(old_file:old_line, abs_filename:new_line)` for a hunk of this file.
    pub fn filespecs(&self, hunk: &HunkDiff) -> (String, String) {
        (
            format!("{}:{}", self.old_file, hunk.old_line_start),
            format!("{}:{}", display_path(&self.abs_filename), hunk.new_line_start),
        )
    }
}

fn display_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

fn split_hunks(diff_text: &str, trailing: TrailingRuns) -> Result<Vec<HunkDiff>> {
    let mut hunks = Vec::new();
    let mut current: Option<(HunkHeader, Vec<String>)> = None;

    for line in diff_text.lines() {
        if line.starts_with("@@") {
            if let Some((header, body)) = current.take() {
                hunks.push(HunkDiff::from_parts(header, body, trailing));
            }
            current = Some((HunkHeader::parse(line)?, Vec::new()));
        } else if let Some((_, body)) = current.as_mut() {
            body.push(line.to_string());
        }
    }

    if let Some((header, body)) = current {
        hunks.push(HunkDiff::from_parts(header, body, trailing));
    }

    Ok(hunks)
}
