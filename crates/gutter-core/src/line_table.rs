//! Logical Line Table
//!
//! Read-only snapshot of logical line boundaries, in character offsets.
//!
//! The table can be derived from document text (using the same [`Rope`] line semantics the
//! editor's line index uses) or supplied directly by a host that already tracks line starts.

use ropey::{Rope, RopeSlice};

use crate::error::{Error, Result};

/// Character-offset boundaries of one logical line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineBoundary {
    /// Offset of the first character of the line
    pub start: usize,
    /// Offset just past the last character of the line, excluding the line break
    pub end: usize,
}

impl LineBoundary {
    /// Create a boundary for `[start, end)`.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Character count of the line content (0 for an inverted boundary).
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns `true` for a zero-width line.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// Snapshot of a document's logical lines
///
/// Invariants: every line has `start <= end`, and every line but the last is followed by at
/// least one line-break character (`end < next.start`). The break terminating line `i` sits at
/// offset `lines[i].end`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineTable {
    lines: Vec<LineBoundary>,
}

impl LineTable {
    /// Build a line table from explicit boundaries, validating the table invariants.
    pub fn from_boundaries<I>(boundaries: I) -> Result<Self>
    where
        I: IntoIterator<Item = LineBoundary>,
    {
        let lines: Vec<LineBoundary> = boundaries.into_iter().collect();

        for (line, boundary) in lines.iter().enumerate() {
            if boundary.start > boundary.end {
                tracing::warn!(line, start = boundary.start, end = boundary.end, "inverted line");
                return Err(Error::InvalidLineBoundary {
                    line,
                    start: boundary.start,
                    end: boundary.end,
                });
            }
        }

        for (line, pair) in lines.windows(2).enumerate() {
            if pair[0].end >= pair[1].start {
                tracing::warn!(
                    line,
                    end = pair[0].end,
                    next_start = pair[1].start,
                    "lines are not separated by a line break"
                );
                return Err(Error::MissingLineBreak {
                    line,
                    end: pair[0].end,
                    next_start: pair[1].start,
                });
            }
        }

        Ok(Self { lines })
    }

    /// Build a line table from document text.
    ///
    /// Follows [`Rope`] line semantics: `N` line breaks yield `N + 1` lines (a trailing break
    /// produces a final empty line), and `"\r\n"` counts as a single break.
    pub fn from_text(text: &str) -> Self {
        Self::from_rope(&Rope::from_str(text))
    }

    /// Build a line table from an existing rope.
    pub fn from_rope(rope: &Rope) -> Self {
        let lines: Vec<LineBoundary> = (0..rope.len_lines())
            .map(|line_idx| {
                let start = rope.line_to_char(line_idx);
                let line = rope.line(line_idx);
                let end = start + line.len_chars() - line_break_len(line);
                LineBoundary::new(start, end)
            })
            .collect();

        tracing::debug!(lines = lines.len(), chars = rope.len_chars(), "built line table");

        Self { lines }
    }

    /// Get total line count
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Get the boundary of the specified line
    pub fn line(&self, line: usize) -> Result<LineBoundary> {
        self.lines
            .get(line)
            .copied()
            .ok_or(Error::LineOutOfRange {
                line,
                line_count: self.lines.len(),
            })
    }

    /// Get all line boundaries
    pub fn lines(&self) -> &[LineBoundary] {
        &self.lines
    }

    /// Offset of the line-break character terminating `line`.
    ///
    /// Returns `None` for the last line (and for out-of-range lines).
    pub fn line_break_offset(&self, line: usize) -> Option<usize> {
        if line < self.lines.len().saturating_sub(1) {
            Some(self.lines[line].end)
        } else {
            None
        }
    }
}

/// Number of trailing line-break characters in a rope line.
///
/// Matches the break set [`Rope`] splits lines on.
fn line_break_len(line: RopeSlice<'_>) -> usize {
    let len = line.len_chars();
    if len == 0 {
        return 0;
    }

    match line.char(len - 1) {
        '\n' if len >= 2 && line.char(len - 2) == '\r' => 2,
        '\n' | '\r' | '\u{0B}' | '\u{0C}' | '\u{85}' | '\u{2028}' | '\u{2029}' => 1,
        _ => 0,
    }
}
