//! Unified diff parsing into navigable change regions.
//!
//! - `header`: `@@ -a,b +c,d @@` scanning
//! - `hunk`: one hunk and its old/new region lists
//! - `chunks`: `~`-separated groupings for add/delete emphasis
//! - `file`: a whole file's diff split into hunks
//! - `region`: the region values themselves
//!
//! All line numbers are 1-based. Conversion to editor coordinates is done by
//! [`DiffRegion::to_host_span`].

mod chunks;
mod file;
mod header;
mod hunk;
mod region;

#[cfg(test)]
mod tests;

pub use chunks::{sort_chunks, Chunks};
pub use file::FileDiff;
pub use header::HunkHeader;
pub use hunk::{HunkDiff, HunkType, RegionSet, TrailingRuns};
pub use region::{DiffRegion, HostSpan, RegionKind};
