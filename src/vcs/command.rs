//! Blocking runner for `git` and `svn` subprocesses.
//!
//! Stdout is kept as raw bytes so that callers can tell undecodable file
//! content apart from command failure.

use crate::error::{HunkNavError, Result};
use std::path::Path;
use std::process::{Command, Output};

/// Result of a successful command execution.
#[derive(Debug, Clone)]
pub struct CommandOutput {
    /// Raw standard output.
    pub stdout: Vec<u8>,
    /// Standard error, lossily decoded and trimmed.
    pub stderr: String,
}

impl CommandOutput {
    fn from_output(output: &Output) -> Self {
        Self {
            stdout: output.stdout.clone(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
    }

    /// Stdout as UTF-8, or `None` if it is not valid UTF-8.
    pub fn text(&self) -> Option<&str> {
        std::str::from_utf8(&self.stdout).ok()
    }

    /// Stdout as UTF-8 with invalid sequences replaced.
    pub fn text_lossy(&self) -> String {
        String::from_utf8_lossy(&self.stdout).into_owned()
    }

    /// Trimmed stdout, for single-value answers like a path or a SHA.
    pub fn trimmed(&self) -> String {
        self.text_lossy().trim().to_string()
    }
}

/// Run `program` with `args` in `cwd`.
///
/// # Returns
///
/// * `Ok(CommandOutput)` - The process exited with status 0
/// * `Err(HunkNavError::VcsError)` - The process could not start or exited non-zero
pub fn run_command<P: AsRef<Path>, S: AsRef<str>>(
    program: &str,
    cwd: P,
    args: &[S],
) -> Result<CommandOutput> {
    let cwd = cwd.as_ref();
    let args: Vec<&str> = args.iter().map(AsRef::as_ref).collect();
    let subcommand = args.first().copied().unwrap_or("");

    log::debug!("running {} {} in {}", program, args.join(" "), cwd.display());

    let output = Command::new(program)
        .current_dir(cwd)
        .args(&args)
        .output()
        .map_err(|e| {
            HunkNavError::VcsError(format!(
                "failed to execute {} {}: {}",
                program, subcommand, e
            ))
        })?;

    let command_output = CommandOutput::from_output(&output);

    if output.status.success() {
        Ok(command_output)
    } else {
        let exit_code = output.status.code().unwrap_or(-1);
        let error_msg = if command_output.stderr.is_empty() {
            command_output.trimmed()
        } else {
            command_output.stderr.clone()
        };

        Err(HunkNavError::VcsError(format!(
            "{} {} failed (exit code {}): {}",
            program, subcommand, exit_code, error_msg
        )))
    }
}

/// Split a diff-spec string into arguments the way a shell would.
pub fn split_spec(diff_spec: &str) -> Result<Vec<String>> {
    shell_words::split(diff_spec).map_err(|e| {
        HunkNavError::UserError(format!(
            "failed to parse diff spec '{}': {}\n\
             Fix: check for unmatched quotes or invalid escape sequences.",
            diff_spec, e
        ))
    })
}
