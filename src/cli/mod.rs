//! CLI argument parsing for hunknav.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

/// Hunknav: navigate the hunks of a Git or SVN diff.
///
/// Every command takes an optional diff spec, passed to the version control
/// system as-is:
/// - Git: `A...B`, `A..B`, `REV`, or nothing for the working copy
/// - SVN: `-rA:B`, `-rA`, `-cN`, or nothing for the working copy
#[derive(Parser, Debug)]
#[command(name = "hunknav")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Log debug output to stderr (RUST_LOG takes precedence).
    #[arg(short, long, global = true, action = ArgAction::SetTrue)]
    pub verbose: bool,

    /// Run as if started in this directory.
    #[arg(short = 'C', long, global = true, value_name = "DIR")]
    pub directory: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for hunknav.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List changed files with their hunk counts.
    Files(SpecArgs),

    /// Describe every hunk of every changed file.
    ///
    /// Prints each hunk's description followed by its old and new filespecs.
    Hunks(HunksArgs),

    /// Print the old/new changed regions of every hunk.
    Regions(RegionsArgs),

    /// Print the added and deleted chunks of every hunk.
    Chunks(SpecArgs),

    /// Print the version tokens a diff spec compares.
    Versions(SpecArgs),

    /// Print a file's content at a version.
    Show(ShowArgs),
}

/// A bare diff spec.
#[derive(Parser, Debug)]
pub struct SpecArgs {
    /// Diff spec passed to the version control system (default: working copy).
    #[arg(default_value = "", allow_hyphen_values = true)]
    pub spec: String,
}

/// Arguments for the `hunks` command.
#[derive(Parser, Debug)]
pub struct HunksArgs {
    /// Diff spec passed to the version control system (default: working copy).
    #[arg(default_value = "", allow_hyphen_values = true)]
    pub spec: String,

    /// Output JSON instead of text.
    #[arg(long, action = ArgAction::SetTrue)]
    pub json: bool,
}

/// Arguments for the `regions` command.
#[derive(Parser, Debug)]
pub struct RegionsArgs {
    /// Diff spec passed to the version control system (default: working copy).
    #[arg(default_value = "", allow_hyphen_values = true)]
    pub spec: String,

    /// Output JSON instead of text.
    #[arg(long, action = ArgAction::SetTrue)]
    pub json: bool,

    /// Close add/delete runs left open at the end of a hunk.
    #[arg(long, action = ArgAction::SetTrue)]
    pub strict: bool,

    /// Report 0-based editor line numbers instead of 1-based diff lines.
    #[arg(long, action = ArgAction::SetTrue)]
    pub zero_based: bool,
}

/// Arguments for the `show` command.
#[derive(Parser, Debug)]
pub struct ShowArgs {
    /// Repository-relative path of the file.
    pub file: String,

    /// Version token (empty for the working copy).
    #[arg(id = "at", long = "at", value_name = "TOKEN", default_value = "", allow_hyphen_values = true)]
    pub version: String,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
