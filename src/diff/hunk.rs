//! A single `@@ ... @@` hunk and its region reconstruction.

use crate::error::{HunkNavError, Result};
use serde::Serialize;
use std::fmt;

use super::chunks::{self, Chunks};
use super::header::HunkHeader;
use super::region::{DiffRegion, RegionKind};

/// Shape of a hunk, derived from the header lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HunkType {
    /// Old length is 0: only lines were added.
    Add,
    /// New length is 0: only lines were removed.
    Del,
    /// Both sides have lines.
    Mod,
}

impl HunkType {
    fn from_lengths(old_hunk_len: usize, new_hunk_len: usize) -> Self {
        if old_hunk_len == 0 {
            HunkType::Add
        } else if new_hunk_len == 0 {
            HunkType::Del
        } else {
            HunkType::Mod
        }
    }
}

impl fmt::Display for HunkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HunkType::Add => write!(f, "ADD"),
            HunkType::Del => write!(f, "DEL"),
            HunkType::Mod => write!(f, "MOD"),
        }
    }
}

/// What to do with an add or delete run still open when a MOD body ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrailingRuns {
    /// Leave the run unclosed; its region is not emitted.
    #[default]
    Drop,
    /// Close the run as if a context line followed.
    Flush,
}

/// Old-side and new-side regions of one hunk.
///
/// `old[i]` and `new[i]` always describe the same change: one side holds the
/// real span and the other a zero-width marker.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RegionSet {
    pub old: Vec<DiffRegion>,
    pub new: Vec<DiffRegion>,
    /// Old-file line cursor after the last body line.
    pub old_end_line: usize,
    /// New-file line cursor after the last body line.
    pub new_end_line: usize,
}

/// Representation of a single hunk from a unified diff.
#[derive(Debug, Clone)]
pub struct HunkDiff {
    pub old_line_start: usize,
    pub old_hunk_len: usize,
    pub new_line_start: usize,
    pub new_hunk_len: usize,
    pub hunk_type: HunkType,
    /// Header text after the closing `@@`.
    pub context: String,
    /// Body lines, prefix characters included.
    pub lines: Vec<String>,
    regions: RegionSet,
}

impl HunkDiff {
    /// Parse hunk text: a header line followed by body lines.
    ///
    /// `\r\n` and `\n` line endings are treated alike. Regions are built
    /// here, once.
    ///
    /// # Returns
    ///
    /// * `Ok(HunkDiff)` - Header parsed and regions built
    /// * `Err(HunkNavError::MalformedHunkHeader)` - The first line is not a valid header
    pub fn parse(text: &str, trailing: TrailingRuns) -> Result<Self> {
        let mut lines = text.lines();
        let header_line = lines
            .next()
            .ok_or_else(|| HunkNavError::MalformedHunkHeader(String::new()))?;
        let header = HunkHeader::parse(header_line)?;
        let body = lines.map(str::to_string).collect();

        Ok(Self::from_parts(header, body, trailing))
    }

    /// Build a hunk from an already-parsed header and its body lines.
    pub fn from_parts(header: HunkHeader, lines: Vec<String>, trailing: TrailingRuns) -> Self {
        let mut hunk = Self {
            old_line_start: header.old_line_start,
            old_hunk_len: header.old_hunk_len,
            new_line_start: header.new_line_start,
            new_hunk_len: header.new_hunk_len,
            hunk_type: HunkType::from_lengths(header.old_hunk_len, header.new_hunk_len),
            context: header.context,
            lines,
            regions: RegionSet::default(),
        };
        hunk.regions = hunk.parse_diff(trailing);
        hunk
    }

    /// Regions on the old side of the diff.
    pub fn old_regions(&self) -> &[DiffRegion] {
        &self.regions.old
    }

    /// Regions on the new side of the diff.
    pub fn new_regions(&self) -> &[DiffRegion] {
        &self.regions.new
    }

    /// `(removed, added)` line counts covered by the closed regions.
    ///
    /// Markers cover no lines; a run dropped at the end of the body is not
    /// counted.
    pub fn changed_line_counts(&self) -> (usize, usize) {
        let count = |regions: &[DiffRegion]| -> usize {
            regions
                .iter()
                .filter(|region| !region.is_marker())
                .map(DiffRegion::line_count)
                .sum()
        };
        (count(&self.regions.old), count(&self.regions.new))
    }

    pub fn regions(&self) -> &RegionSet {
        &self.regions
    }

    /// Body lines grouped into `(add_chunks, del_chunks)`.
    ///
    /// Independent of the region lists.
    pub fn sort_chunks(&self) -> (Chunks, Chunks) {
        chunks::sort_chunks(&self.lines)
    }

    /// Reconstruct the changed regions from the header and body.
    ///
    /// Pure: repeated calls return identical sets.
    pub fn parse_diff(&self, trailing: TrailingRuns) -> RegionSet {
        match self.hunk_type {
            // The side with length 0 comes out as a zero-width marker.
            HunkType::Add | HunkType::Del => RegionSet {
                old: vec![DiffRegion::lines(
                    RegionKind::Del,
                    self.old_line_start,
                    self.old_line_start.saturating_add(self.old_hunk_len),
                )],
                new: vec![DiffRegion::lines(
                    RegionKind::Add,
                    self.new_line_start,
                    self.new_line_start.saturating_add(self.new_hunk_len),
                )],
                old_end_line: self.old_line_start.saturating_add(self.old_hunk_len),
                new_end_line: self.new_line_start.saturating_add(self.new_hunk_len),
            },
            HunkType::Mod => self.walk_body(trailing),
        }
    }

    fn walk_body(&self, trailing: TrailingRuns) -> RegionSet {
        let mut builder = RegionBuilder::new(self.old_line_start, self.new_line_start);

        for line in &self.lines {
            match line.chars().next() {
                Some(' ') => builder.context(),
                Some('+') => builder.added(),
                Some('-') => builder.removed(),
                _ => log::warn!(
                    "unexpected line {:?} in hunk @@ -{},{} +{},{} @@",
                    line,
                    self.old_line_start,
                    self.old_hunk_len,
                    self.new_line_start,
                    self.new_hunk_len
                ),
            }
            builder.advance();
        }

        if trailing == TrailingRuns::Flush {
            builder.context();
        }

        builder.finish()
    }
}

/// Line-classification state machine for MOD hunks.
///
/// Both cursors advance once per body line whatever its prefix.
struct RegionBuilder {
    old_cur_line: usize,
    new_cur_line: usize,
    old_add_line: usize,
    new_add_start: usize,
    old_del_start: usize,
    new_del_line: usize,
    in_add: bool,
    in_del: bool,
    set: RegionSet,
}

impl RegionBuilder {
    fn new(old_line_start: usize, new_line_start: usize) -> Self {
        Self {
            old_cur_line: old_line_start,
            new_cur_line: new_line_start,
            old_add_line: 0,
            new_add_start: 0,
            old_del_start: 0,
            new_del_line: 0,
            in_add: false,
            in_del: false,
            set: RegionSet::default(),
        }
    }

    /// A context line closes any open runs, add run first.
    fn context(&mut self) {
        if self.in_add {
            self.set.new.push(DiffRegion::lines(
                RegionKind::Add,
                self.new_add_start,
                self.new_cur_line,
            ));
            self.set
                .old
                .push(DiffRegion::marker(RegionKind::Del, self.old_add_line));
            self.in_add = false;
        }
        if self.in_del {
            self.set.old.push(DiffRegion::lines(
                RegionKind::Del,
                self.old_del_start,
                self.old_cur_line,
            ));
            self.set
                .new
                .push(DiffRegion::marker(RegionKind::Add, self.new_del_line));
            self.in_del = false;
        }
    }

    fn added(&mut self) {
        if !self.in_add {
            self.new_add_start = self.new_cur_line;
            self.old_add_line = self.old_cur_line;
            self.in_add = true;
        }
    }

    fn removed(&mut self) {
        if !self.in_del {
            self.new_del_line = self.new_cur_line;
            self.old_del_start = self.old_cur_line;
            self.in_del = true;
        }
    }

    fn advance(&mut self) {
        self.old_cur_line = self.old_cur_line.saturating_add(1);
        self.new_cur_line = self.new_cur_line.saturating_add(1);
    }

    fn finish(mut self) -> RegionSet {
        self.set.old_end_line = self.old_cur_line;
        self.set.new_end_line = self.new_cur_line;
        self.set
    }
}
