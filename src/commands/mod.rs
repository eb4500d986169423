//! Command implementations for hunknav.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Each command opens a [`Session`] for the target
//! directory and prints to stdout.

mod chunks;
mod files;
mod hunks;
mod regions;
mod show;
mod versions;

use crate::cli::Command;
use crate::context::{Overrides, Session};
use crate::error::Result;
use std::path::Path;

/// Dispatch a command to its implementation.
///
/// `directory` is the `-C` argument; `None` means the current directory.
pub fn dispatch(command: Command, directory: Option<&Path>) -> Result<()> {
    match command {
        Command::Files(args) => files::cmd_files(args, directory),
        Command::Hunks(args) => hunks::cmd_hunks(args, directory),
        Command::Regions(args) => regions::cmd_regions(args, directory),
        Command::Chunks(args) => chunks::cmd_chunks(args, directory),
        Command::Versions(args) => versions::cmd_versions(args, directory),
        Command::Show(args) => show::cmd_show(args, directory),
    }
}

fn open_session(directory: Option<&Path>) -> Result<Session> {
    Session::open(directory, Overrides::default())
}
