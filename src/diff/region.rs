//! Region values produced by hunk parsing.

use serde::Serialize;
use std::fmt;

/// Which side of a change a region describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RegionKind {
    Add,
    Del,
}

impl fmt::Display for RegionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegionKind::Add => write!(f, "ADD"),
            RegionKind::Del => write!(f, "DEL"),
        }
    }
}

/// A half-open span `[(start_line, start_col), (end_line, end_col))` in one
/// side of a diff. Lines are 1-based.
///
/// A region whose start and end coincide at column 0 is a zero-width marker:
/// it stands in for "nothing changed on this side" so that old and new region
/// lists stay the same length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DiffRegion {
    pub kind: RegionKind,
    pub start_line: usize,
    pub start_col: usize,
    pub end_line: usize,
    pub end_col: usize,
}

impl DiffRegion {
    pub fn new(
        kind: RegionKind,
        start_line: usize,
        start_col: usize,
        end_line: usize,
        end_col: usize,
    ) -> Self {
        Self {
            kind,
            start_line,
            start_col,
            end_line,
            end_col,
        }
    }

    /// Whole-line span `[start_line, end_line)`.
    pub fn lines(kind: RegionKind, start_line: usize, end_line: usize) -> Self {
        Self::new(kind, start_line, 0, end_line, 0)
    }

    /// Zero-width marker at the start of `line`.
    pub fn marker(kind: RegionKind, line: usize) -> Self {
        Self::new(kind, line, 0, line, 0)
    }

    pub fn is_marker(&self) -> bool {
        self.start_line == self.end_line && self.start_col == 0 && self.end_col == 0
    }

    /// Number of whole lines covered.
    pub fn line_count(&self) -> usize {
        self.end_line.saturating_sub(self.start_line)
    }

    /// Convert to the 0-based line coordinates editors use. Columns pass
    /// through unchanged.
    pub fn to_host_span(&self) -> HostSpan {
        HostSpan {
            kind: self.kind,
            start: (self.start_line.saturating_sub(1), self.start_col),
            end: (self.end_line.saturating_sub(1), self.end_col),
        }
    }
}

impl fmt::Display for DiffRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({},{},{},{})",
            self.kind, self.start_line, self.start_col, self.end_line, self.end_col
        )
    }
}

/// A region in a host editor's 0-based `(line, column)` space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HostSpan {
    pub kind: RegionKind,
    pub start: (usize, usize),
    pub end: (usize, usize),
}

impl fmt::Display for HostSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({},{},{},{})",
            self.kind, self.start.0, self.start.1, self.end.0, self.end.1
        )
    }
}
