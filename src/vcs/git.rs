//! Git backend.

use super::command::{run_command, split_spec, CommandOutput};
use super::{read_working_copy, BackendOptions, ChangedFiles, VcsBackend, Versions};
use crate::diff::FileDiff;
use crate::error::Result;
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

/// A changed file line in `git diff --stat` output: `path | 3 ++-`.
static STAT_CHANGED_FILE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*([\w.\-/]+)\s*\|").expect("Invalid git stat regex")
});

/// `--stat` abbreviates long paths (`.../dir/file`) to fit the terminal
/// width; a width this large keeps every name whole.
const STAT_WIDTH: &str = "100000";

/// The shapes a Git diff spec can take.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GitRevisions<'a> {
    /// `A...B`: compare B against the merge base of A and B.
    MergeBase(&'a str, &'a str),
    /// `A..B`.
    Range(&'a str, &'a str),
    /// A single commit-ish compared against the working copy.
    Single(&'a str),
    /// Empty spec: HEAD against the working copy.
    WorkingCopy,
}

impl<'a> GitRevisions<'a> {
    /// Classify a diff spec. The last `...` (then `..`) separates the sides.
    pub fn parse(diff_spec: &'a str) -> Self {
        if let Some((old, new)) = diff_spec.rsplit_once("...") {
            GitRevisions::MergeBase(old, new)
        } else if let Some((old, new)) = diff_spec.rsplit_once("..") {
            GitRevisions::Range(old, new)
        } else if !diff_spec.is_empty() {
            GitRevisions::Single(diff_spec)
        } else {
            GitRevisions::WorkingCopy
        }
    }

    /// Map to `(old, new)` version tokens. `merge_base` is only called for
    /// the `A...B` form.
    pub fn versions<F>(&self, merge_base: F) -> Result<Versions>
    where
        F: FnOnce(&str, &str) -> Result<String>,
    {
        Ok(match *self {
            GitRevisions::MergeBase(old, new) => (merge_base(old, new)?, new.to_string()),
            GitRevisions::Range(old, new) => (old.to_string(), new.to_string()),
            GitRevisions::Single(rev) => (rev.to_string(), String::new()),
            GitRevisions::WorkingCopy => ("HEAD".to_string(), String::new()),
        })
    }
}

/// Backend for Git repositories.
#[derive(Debug)]
pub struct GitBackend {
    root: PathBuf,
    options: BackendOptions,
    changed: ChangedFiles,
}

impl GitBackend {
    pub fn new(root: impl Into<PathBuf>, options: BackendOptions) -> Self {
        Self {
            root: root.into(),
            options,
            changed: ChangedFiles::default(),
        }
    }

    fn git(&self, args: &[String]) -> Result<CommandOutput> {
        run_command("git", &self.root, args)
    }

    /// `git merge-base A B`.
    pub fn merge_base(&self, a: &str, b: &str) -> Result<String> {
        let output = self.git(&["merge-base".to_string(), a.to_string(), b.to_string()])?;
        Ok(output.trimmed())
    }

    fn collect_changed_files(&self, diff_spec: &str) -> Result<Vec<FileDiff>> {
        let spec_args = split_spec(diff_spec)?;

        let mut stat_args = vec![
            "diff".to_string(),
            format!("--stat={}", STAT_WIDTH),
            format!("--stat-name-width={}", STAT_WIDTH),
        ];
        stat_args.extend(spec_args.iter().cloned());
        let stat = self.git(&stat_args)?.text_lossy();

        let mut files = Vec::new();
        for filename in parse_stat_filenames(&stat) {
            if self.options.is_excluded(filename) {
                continue;
            }

            let mut diff_args = vec!["diff".to_string()];
            diff_args.extend(spec_args.iter().cloned());
            diff_args.extend(["-U0".to_string(), "--".to_string(), filename.to_string()]);
            let diff_text = self.git(&diff_args)?.text_lossy();

            files.push(FileDiff::new(
                filename,
                self.root.join(filename),
                diff_text,
                self.options.trailing,
            )?);
        }

        Ok(files)
    }
}

/// Filenames from `git diff --stat` output, in order.
pub(super) fn parse_stat_filenames(stat: &str) -> Vec<&str> {
    stat.lines()
        .filter_map(|line| STAT_CHANGED_FILE.captures(line))
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .collect()
}

impl VcsBackend for GitBackend {
    fn name(&self) -> &'static str {
        "git"
    }

    fn root(&self) -> &Path {
        &self.root
    }

    fn enumerate_changed_files(&mut self, diff_spec: &str) -> Result<&[FileDiff]> {
        if !self.changed.is_fetched() {
            let files = self.collect_changed_files(diff_spec)?;
            self.changed.store(files);
        }
        Ok(self.changed.get())
    }

    fn resolve_versions(&self, diff_spec: &str) -> Result<Versions> {
        GitRevisions::parse(diff_spec).versions(|a, b| self.merge_base(a, b))
    }

    fn fetch_content(&self, filename: &str, version: &str) -> Result<String> {
        if version.is_empty() {
            return read_working_copy(&self.root, filename, &self.options);
        }

        let output = self.git(&["show".to_string(), format!("{}:{}", version, filename)])?;
        Ok(self.options.content_or_placeholder(output.text(), filename))
    }
}
