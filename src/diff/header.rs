//! Hunk header scanning.
//!
//! Grammar: `@@ -<old_start>[,<old_len>] +<new_start>[,<new_len>] @@[<context>]`.
//! A missing length means a one-line range.

use crate::error::{HunkNavError, Result};

/// The four numbers and trailing context text of a hunk header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HunkHeader {
    pub old_line_start: usize,
    pub old_hunk_len: usize,
    pub new_line_start: usize,
    pub new_hunk_len: usize,
    /// Text after the closing `@@` (usually the enclosing function).
    pub context: String,
}

impl HunkHeader {
    /// Parse a single header line.
    ///
    /// # Returns
    ///
    /// * `Ok(HunkHeader)` - All four numbers were found
    /// * `Err(HunkNavError::MalformedHunkHeader)` - The line does not follow the grammar
    pub fn parse(line: &str) -> Result<Self> {
        Self::scan(line).ok_or_else(|| HunkNavError::MalformedHunkHeader(line.to_string()))
    }

    fn scan(line: &str) -> Option<Self> {
        let mut scanner = Scanner::new(line);

        scanner.tag("@@")?;
        scanner.spaces(1)?;
        scanner.tag("-")?;
        let (old_line_start, old_hunk_len) = scanner.range()?;
        scanner.spaces(1)?;
        scanner.tag("+")?;
        let (new_line_start, new_hunk_len) = scanner.range()?;
        scanner.spaces(1)?;
        scanner.tag("@@")?;

        let rest = scanner.rest();
        let context = rest.strip_prefix(' ').unwrap_or(rest).to_string();

        Some(Self {
            old_line_start,
            old_hunk_len,
            new_line_start,
            new_hunk_len,
            context,
        })
    }
}

/// Cursor over the header text. Every method either consumes input and
/// returns `Some`, or leaves the position unspecified and returns `None`.
struct Scanner<'a> {
    rest: &'a str,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str) -> Self {
        Self { rest: input }
    }

    fn tag(&mut self, tag: &str) -> Option<()> {
        self.rest = self.rest.strip_prefix(tag)?;
        Some(())
    }

    /// Consume a run of at least `min` spaces.
    fn spaces(&mut self, min: usize) -> Option<()> {
        let trimmed = self.rest.trim_start_matches(' ');
        if self.rest.len() - trimmed.len() < min {
            return None;
        }
        self.rest = trimmed;
        Some(())
    }

    fn number(&mut self) -> Option<usize> {
        let end = self
            .rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(self.rest.len());
        if end == 0 {
            return None;
        }
        let value = self.rest[..end].parse().ok()?;
        self.rest = &self.rest[end..];
        Some(value)
    }

    /// `start[,len]`; the length defaults to 1. `start + len` must fit in a
    /// `usize`.
    fn range(&mut self) -> Option<(usize, usize)> {
        let start = self.number()?;
        let len = if self.tag(",").is_some() {
            self.number()?
        } else {
            1
        };
        start.checked_add(len)?;
        Some((start, len))
    }

    fn rest(&self) -> &'a str {
        self.rest
    }
}
