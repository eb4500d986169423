//! SVN backend.

use super::command::{run_command, split_spec, CommandOutput};
use super::{read_working_copy, BackendOptions, ChangedFiles, VcsBackend, Versions};
use crate::diff::FileDiff;
use crate::error::Result;
use regex::{Captures, Regex};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

static ROOT_PATH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"Root Path:\s*([:\\/\w.\-]*)").expect("Invalid svn root regex")
});

/// An added or modified entry in `svn status` / `svn diff --summarize` output.
///
/// The flag columns must be followed by whitespace so that a path starting
/// with a flag letter (`Makefile`) is not eaten by the flag class.
static STATUS_CHANGED_FILE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*[AM][+CMLSKOTB ]{0,6}\s+([\w.\-/\\]+)").expect("Invalid svn status regex")
});

static DUAL_REV: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-r *(\d+):(\d+)").expect("Invalid svn revision regex"));

static REV: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-r *(\d+)").expect("Invalid svn revision regex"));

static COMMIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^-c *(\d+)").expect("Invalid svn commit regex"));

/// The shapes an SVN diff spec can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SvnRevisions {
    /// `-rA:B`: two explicit revisions.
    Dual(u64, u64),
    /// `-rA`: a revision against HEAD.
    Single(u64),
    /// `-cN`: the change made by commit N.
    Commit(u64),
    /// Anything else: HEAD against the working copy.
    WorkingCopy,
}

impl SvnRevisions {
    /// Classify a diff spec by its leading revision flag.
    pub fn parse(diff_spec: &str) -> Self {
        if let Some(caps) = DUAL_REV.captures(diff_spec)
            && let (Some(a), Some(b)) = (capture_number(&caps, 1), capture_number(&caps, 2))
        {
            return SvnRevisions::Dual(a, b);
        }
        if let Some(caps) = REV.captures(diff_spec)
            && let Some(rev) = capture_number(&caps, 1)
        {
            return SvnRevisions::Single(rev);
        }
        if let Some(caps) = COMMIT.captures(diff_spec)
            && let Some(rev) = capture_number(&caps, 1)
        {
            return SvnRevisions::Commit(rev);
        }
        SvnRevisions::WorkingCopy
    }

    /// Map to `(old, new)` version tokens in `-r N` form.
    pub fn versions(&self) -> Versions {
        match *self {
            SvnRevisions::Dual(a, b) => (format!("-r {}", a), format!("-r {}", b)),
            SvnRevisions::Single(rev) => (format!("-r {}", rev), "-r HEAD".to_string()),
            SvnRevisions::Commit(rev) => {
                (format!("-r {}", rev.saturating_sub(1)), format!("-r {}", rev))
            }
            SvnRevisions::WorkingCopy => ("-r HEAD".to_string(), String::new()),
        }
    }

    /// Arguments that list the changed files for `diff_spec`.
    fn listing_args(&self, diff_spec: &str) -> Result<Vec<String>> {
        let args = match self {
            SvnRevisions::Dual(..) | SvnRevisions::Commit(_) => {
                let mut args = vec!["diff".to_string()];
                args.extend(split_spec(diff_spec)?);
                args.push("--summarize".to_string());
                args
            }
            // A lone revision can only be compared against HEAD.
            SvnRevisions::Single(_) => {
                let mut args = vec!["diff".to_string()];
                args.extend(split_spec(&format!("{}:HEAD", diff_spec))?);
                args.push("--summarize".to_string());
                args
            }
            SvnRevisions::WorkingCopy => {
                let mut args = vec!["status".to_string()];
                args.extend(split_spec(diff_spec)?);
                args
            }
        };
        Ok(args)
    }
}

fn capture_number(caps: &Captures<'_>, i: usize) -> Option<u64> {
    caps.get(i)?.as_str().parse().ok()
}

/// Working copy root from `svn info` output.
pub(super) fn parse_root_path(info: &str) -> Option<PathBuf> {
    let caps = ROOT_PATH.captures(info)?;
    let root = caps.get(1)?.as_str();
    if root.is_empty() {
        None
    } else {
        Some(PathBuf::from(root))
    }
}

/// Added/modified paths from `svn status` or `svn diff --summarize` output.
pub(super) fn parse_status_filenames(status: &str) -> Vec<&str> {
    status
        .lines()
        .filter_map(|line| STATUS_CHANGED_FILE.captures(line))
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .collect()
}

/// Backend for SVN working copies.
#[derive(Debug)]
pub struct SvnBackend {
    root: PathBuf,
    options: BackendOptions,
    changed: ChangedFiles,
}

impl SvnBackend {
    pub fn new(root: impl Into<PathBuf>, options: BackendOptions) -> Self {
        Self {
            root: root.into(),
            options,
            changed: ChangedFiles::default(),
        }
    }

    fn svn(&self, args: &[String]) -> Result<CommandOutput> {
        run_command("svn", &self.root, args)
    }

    fn collect_changed_files(&self, diff_spec: &str) -> Result<Vec<FileDiff>> {
        let listing_args = SvnRevisions::parse(diff_spec).listing_args(diff_spec)?;
        let listing = self.svn(&listing_args)?.text_lossy();
        let spec_args = split_spec(diff_spec)?;

        let mut files = Vec::new();
        for filename in parse_status_filenames(&listing) {
            let abs_filename = self.root.join(filename);

            if abs_filename.is_dir() {
                log::debug!("skipping directory {}", filename);
                continue;
            }
            if self.options.is_excluded(&filename.replace('\\', "/")) {
                continue;
            }

            let mut diff_args = vec!["diff".to_string()];
            diff_args.extend(spec_args.iter().cloned());
            diff_args.push(filename.to_string());
            let diff_text = self.svn(&diff_args)?.text_lossy();

            files.push(FileDiff::new(
                filename,
                abs_filename,
                diff_text,
                self.options.trailing,
            )?);
        }

        Ok(files)
    }
}

impl VcsBackend for SvnBackend {
    fn name(&self) -> &'static str {
        "svn"
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
        Ok(SvnRevisions::parse(diff_spec).versions())
    }

    fn fetch_content(&self, filename: &str, version: &str) -> Result<String> {
        if version.is_empty() {
            return read_working_copy(&self.root, filename, &self.options);
        }

        let mut args = vec!["cat".to_string()];
        args.extend(split_spec(version)?);
        args.push(filename.to_string());
        let output = self.svn(&args)?;
        Ok(self.options.content_or_placeholder(output.text(), filename))
    }
}
