//! Working copy context resolution for hunknav.
//!
//! Every command starts here: find the working copy from the invocation
//! directory, load its `.hunknav.yaml`, apply command-line overrides, and
//! open the matching backend. The backend is chosen once per session.

use crate::config::Config;
use crate::error::{HunkNavError, Result};
use crate::vcs::{self, BackendOptions, VcsBackend};
use std::env;
use std::path::{Path, PathBuf};

/// Overrides from command-line flags, applied on top of the config file.
#[derive(Debug, Clone, Copy, Default)]
pub struct Overrides {
    /// `--strict`: close runs left open at the end of a hunk.
    pub flush_trailing_runs: bool,
}

/// An opened working copy: its effective config and backend.
pub struct Session {
    pub config: Config,
    backend: Box<dyn VcsBackend>,
}

impl Session {
    /// Open a session for `directory`, or the current working directory.
    ///
    /// # Returns
    ///
    /// * `Ok(Session)` - Working copy found and config loaded
    /// * `Err(HunkNavError::UserError)` - `directory` does not exist
    /// * `Err(HunkNavError::NoVersionControlFound)` - Not inside a Git or SVN working copy
    /// * `Err(HunkNavError::ConfigError)` - `.hunknav.yaml` is invalid
    pub fn open(directory: Option<&Path>, overrides: Overrides) -> Result<Self> {
        let cwd = resolve_directory(directory)?;
        let working_copy = vcs::locate(&cwd)?;

        let mut config = Config::load_from_root(&working_copy.root)?;
        if overrides.flush_trailing_runs {
            config.flush_trailing_runs = true;
        }

        let backend = working_copy.open(BackendOptions::from_config(&config)?);
        Ok(Self { config, backend })
    }

    pub fn backend(&self) -> &dyn VcsBackend {
        self.backend.as_ref()
    }

    pub fn backend_mut(&mut self) -> &mut dyn VcsBackend {
        self.backend.as_mut()
    }
}

fn resolve_directory(directory: Option<&Path>) -> Result<PathBuf> {
    match directory {
        Some(dir) if dir.is_dir() => Ok(dir.to_path_buf()),
        Some(dir) => Err(HunkNavError::UserError(format!(
            "directory '{}' does not exist",
            dir.display()
        ))),
        None => env::current_dir().map_err(|e| {
            HunkNavError::UserError(format!("failed to get current working directory: {}", e))
        }),
    }
}
