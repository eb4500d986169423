//! Version control backends.
//!
//! A backend answers three questions about a diff spec: which files changed
//! (with their diff text), which two versions are being compared, and what a
//! file looked like at one of those versions. [`locate`] picks Git or SVN
//! once, by probing the working directory.

mod command;
mod git;
mod svn;

pub use command::{run_command, split_spec, CommandOutput};
pub use git::{GitBackend, GitRevisions};
pub use svn::{SvnBackend, SvnRevisions};

use crate::config::Config;
use crate::diff::{FileDiff, TrailingRuns};
use crate::error::{HunkNavError, Result};
use globset::GlobSet;
use std::path::{Path, PathBuf};

/// `(old_version, new_version)`; an empty token means the working copy.
pub type Versions = (String, String);

/// Operations every version control backend provides.
pub trait VcsBackend {
    /// Short name for display ("git" or "svn").
    fn name(&self) -> &'static str;

    /// Root of the working copy.
    fn root(&self) -> &Path;

    /// Changed files for `diff_spec`, each with its `-U0` diff text.
    ///
    /// Fetched once: later calls return the first result whatever the
    /// argument.
    fn enumerate_changed_files(&mut self, diff_spec: &str) -> Result<&[FileDiff]>;

    /// Resolve `diff_spec` to the version tokens of the old and new side.
    fn resolve_versions(&self, diff_spec: &str) -> Result<Versions>;

    /// Content of `filename` at `version`.
    ///
    /// Content that is not valid UTF-8 comes back as the configured
    /// placeholder text instead of an error.
    fn fetch_content(&self, filename: &str, version: &str) -> Result<String>;
}

/// Settings shared by both backends.
#[derive(Debug, Clone)]
pub struct BackendOptions {
    pub trailing: TrailingRuns,
    /// Repo-relative paths matching this set are not listed.
    pub exclude: GlobSet,
    pub placeholder: String,
}

impl BackendOptions {
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self {
            trailing: config.trailing_runs(),
            exclude: config.exclude_set()?,
            placeholder: config.undecodable_placeholder.clone(),
        })
    }

    fn is_excluded(&self, filename: &str) -> bool {
        let excluded = self.exclude.is_match(filename);
        if excluded {
            log::debug!("skipping excluded file {}", filename);
        }
        excluded
    }

    /// Decoded content, or the placeholder when it was not valid UTF-8.
    fn content_or_placeholder(&self, text: Option<&str>, filename: &str) -> String {
        match text {
            Some(text) => text.to_string(),
            None => {
                log::warn!("content of {} is not valid UTF-8", filename);
                self.placeholder.clone()
            }
        }
    }
}

impl Default for BackendOptions {
    fn default() -> Self {
        Self {
            trailing: TrailingRuns::default(),
            exclude: GlobSet::empty(),
            placeholder: crate::config::DEFAULT_PLACEHOLDER.to_string(),
        }
    }
}

/// Fetch-once latch for the changed-file list.
#[derive(Debug, Default)]
struct ChangedFiles {
    files: Option<Vec<FileDiff>>,
}

impl ChangedFiles {
    fn is_fetched(&self) -> bool {
        self.files.is_some()
    }

    fn store(&mut self, files: Vec<FileDiff>) {
        self.files = Some(files);
    }

    fn get(&self) -> &[FileDiff] {
        self.files.as_deref().unwrap_or_default()
    }
}

/// Read a working-copy file, used for the empty version token.
fn read_working_copy(root: &Path, filename: &str, options: &BackendOptions) -> Result<String> {
    let path = root.join(filename);
    let bytes = std::fs::read(&path).map_err(|e| {
        HunkNavError::UserError(format!("failed to read '{}': {}", path.display(), e))
    })?;
    Ok(options.content_or_placeholder(std::str::from_utf8(&bytes).ok(), filename))
}

/// Which version control system manages a working copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VcsKind {
    Git,
    Svn,
}

/// A working copy found by [`locate`], not yet opened as a backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkingCopy {
    pub kind: VcsKind,
    pub root: PathBuf,
}

impl WorkingCopy {
    /// Open the backend for this working copy.
    pub fn open(self, options: BackendOptions) -> Box<dyn VcsBackend> {
        match self.kind {
            VcsKind::Git => Box::new(GitBackend::new(self.root, options)),
            VcsKind::Svn => Box::new(SvnBackend::new(self.root, options)),
        }
    }
}

/// Find the working copy containing `cwd`.
///
/// Git is probed first (`git rev-parse --show-toplevel`), then SVN
/// (`svn info`).
///
/// # Returns
///
/// * `Ok(WorkingCopy)` - The detected system and its working copy root
/// * `Err(HunkNavError::NoVersionControlFound)` - Neither probe succeeded
pub fn locate<P: AsRef<Path>>(cwd: P) -> Result<WorkingCopy> {
    let cwd = cwd.as_ref();

    match run_command("git", cwd, &["rev-parse", "--show-toplevel"]) {
        Ok(output) => {
            let root = PathBuf::from(output.trimmed());
            log::debug!("found git repository at {}", root.display());
            return Ok(WorkingCopy {
                kind: VcsKind::Git,
                root,
            });
        }
        Err(e) => log::debug!("git probe failed: {}", e),
    }

    match run_command("svn", cwd, &["info"]) {
        Ok(output) => match svn::parse_root_path(&output.text_lossy()) {
            Some(root) => {
                log::debug!("found svn working copy at {}", root.display());
                return Ok(WorkingCopy {
                    kind: VcsKind::Svn,
                    root,
                });
            }
            None => log::warn!(
                "couldn't find SVN root in `svn info` output:\n{}",
                output.text_lossy()
            ),
        },
        Err(e) => log::debug!("svn probe failed: {}", e),
    }

    Err(HunkNavError::NoVersionControlFound)
}
