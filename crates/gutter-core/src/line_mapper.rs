//! Fold-aware Line Mapping
//!
//! Maps each logical line to the visible row it renders on, given the collapsed folds.
//!
//! A line break advances the visible row counter unless a collapsed fold covers the break's
//! offset. Folds may start or end mid-line; whatever breaks they cover merge the adjacent lines
//! onto one row. Lines hidden inside a fold simply share the row of the line they merge into.

use std::ops::Range;

use crate::error::{Error, Result};
use crate::fold_index::{FoldIndex, FoldRegion};
use crate::line_table::LineTable;

/// Logical line -> visible row mapping over an immutable snapshot.
///
/// Rows are computed once at construction in `O(N log F)` for `N` lines and `F` merged fold
/// ranges. Every query afterwards is O(1), except [`LineMapper::lines_on_row`] which is
/// O(log N).
#[derive(Debug, Clone)]
pub struct LineMapper {
    table: LineTable,
    folds: FoldIndex,
    /// `rows[i]` is the visible row of logical line `i` (non-decreasing)
    rows: Vec<usize>,
}

impl LineMapper {
    /// Build a mapper for a line table and a fold index.
    pub fn new(table: LineTable, folds: FoldIndex) -> Self {
        let mut rows = Vec::with_capacity(table.line_count());
        let mut row = 0usize;
        let mut hidden_breaks = 0usize;

        for line in 0..table.line_count() {
            if line > 0 {
                match table.line_break_offset(line - 1) {
                    Some(offset) if folds.is_hidden(offset) => hidden_breaks += 1,
                    _ => row += 1,
                }
            }
            rows.push(row);
        }

        tracing::debug!(
            lines = table.line_count(),
            folds = folds.len(),
            hidden_breaks,
            "mapped logical lines to visible rows"
        );

        Self { table, folds, rows }
    }

    /// Build a mapper straight from document text and a snapshot of fold regions.
    pub fn from_text<I>(text: &str, regions: I) -> Result<Self>
    where
        I: IntoIterator<Item = FoldRegion>,
    {
        let folds = FoldIndex::new(regions)?;
        Ok(Self::new(LineTable::from_text(text), folds))
    }

    /// Get the underlying line table
    pub fn table(&self) -> &LineTable {
        &self.table
    }

    /// Get the underlying fold index
    pub fn folds(&self) -> &FoldIndex {
        &self.folds
    }

    /// Get total logical line count
    pub fn line_count(&self) -> usize {
        self.rows.len()
    }

    /// Get total visible row count
    pub fn row_count(&self) -> usize {
        self.rows.last().map_or(0, |last| last + 1)
    }

    /// Visible row of a logical line.
    ///
    /// This is the number of visible (not folded) line breaks before the line's start, so it is
    /// defined for hidden lines too: they report the row they are merged into.
    pub fn visible_row(&self, line: usize) -> Result<usize> {
        self.rows.get(line).copied().ok_or(Error::LineOutOfRange {
            line,
            line_count: self.rows.len(),
        })
    }

    /// Signed number of visible rows from `caret` to `target`.
    ///
    /// Negative when `target` renders above the caret's row, positive below, zero on the same
    /// row.
    pub fn relative_line(&self, caret: usize, target: usize) -> Result<isize> {
        let caret_row = self.visible_row(caret)?;
        let target_row = self.visible_row(target)?;
        Ok(target_row as isize - caret_row as isize)
    }

    /// One-based absolute number for the caret line itself, relative offset for any other line.
    pub fn hybrid_line(&self, caret: usize, target: usize) -> Result<isize> {
        let relative = self.relative_line(caret, target)?;
        if target == caret {
            Ok(target as isize + 1)
        } else {
            Ok(relative)
        }
    }

    /// Logical lines rendered on a visible row.
    pub fn lines_on_row(&self, row: usize) -> Result<Range<usize>> {
        if row >= self.row_count() {
            return Err(Error::RowOutOfRange {
                row,
                row_count: self.row_count(),
            });
        }
        let start = self.rows.partition_point(|&r| r < row);
        let end = self.rows.partition_point(|&r| r <= row);
        Ok(start..end)
    }

    /// Returns `true` if `line` is the first logical line on its visible row.
    pub fn is_row_start(&self, line: usize) -> Result<bool> {
        let row = self.visible_row(line)?;
        Ok(line == 0 || self.rows[line - 1] != row)
    }
}
