//! Fold Index (Collapsed Intervals & Visibility)
//!
//! Answers "is this character offset hidden by a collapsed fold?" in O(log n).
//!
//! Fold regions are half-open `[start, end)` character-offset intervals. Collapsed regions are
//! merged once at construction into a sorted list of disjoint ranges; point queries are then a
//! single binary search.

use std::ops::Range;

use crate::error::{Error, Result};

/// Fold region over the document's character stream
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FoldRegion {
    /// Start character offset (inclusive)
    pub start: usize,
    /// End character offset (exclusive)
    pub end: usize,
    /// Whether folded
    pub is_collapsed: bool,
}

impl FoldRegion {
    /// Create an expanded fold region for `[start, end)`.
    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            is_collapsed: false,
        }
    }

    /// Create a collapsed fold region for `[start, end)`.
    pub fn collapsed(start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            is_collapsed: true,
        }
    }

    /// Expand
    pub fn expand(&mut self) {
        self.is_collapsed = false;
    }

    /// Collapse
    pub fn collapse(&mut self) {
        self.is_collapsed = true;
    }

    /// Check if region contains a specific offset
    pub fn contains(&self, offset: usize) -> bool {
        self.start <= offset && offset < self.end
    }
}

/// Merged index of collapsed fold regions.
///
/// Overlapping, nested and touching collapsed regions are unioned into disjoint ranges sorted by
/// start. Expanded regions are validated but otherwise ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FoldIndex {
    /// Disjoint hidden ranges, sorted by start; `ranges[i].end < ranges[i + 1].start`
    ranges: Vec<Range<usize>>,
}

impl FoldIndex {
    /// Create an index that hides nothing.
    pub fn empty() -> Self {
        Self { ranges: Vec::new() }
    }

    /// Build the index from a snapshot of fold regions.
    ///
    /// Fails with [`Error::InvalidFoldRegion`] if any region (collapsed or not) has
    /// `start >= end`.
    pub fn new<I>(regions: I) -> Result<Self>
    where
        I: IntoIterator<Item = FoldRegion>,
    {
        let mut collapsed = Vec::new();
        let mut total = 0usize;

        for region in regions {
            total += 1;
            if region.start >= region.end {
                tracing::warn!(
                    start = region.start,
                    end = region.end,
                    "rejecting malformed fold region"
                );
                return Err(Error::InvalidFoldRegion {
                    start: region.start,
                    end: region.end,
                });
            }
            if region.is_collapsed {
                collapsed.push(region.start..region.end);
            }
        }

        // Cheap on presorted input, which is how folding providers usually hand regions over.
        collapsed.sort_by_key(|r| r.start);

        let mut ranges: Vec<Range<usize>> = Vec::with_capacity(collapsed.len());
        for range in collapsed {
            match ranges.last_mut() {
                Some(last) if range.start <= last.end => {
                    last.end = last.end.max(range.end);
                }
                _ => ranges.push(range),
            }
        }

        tracing::trace!(regions = total, merged = ranges.len(), "built fold index");

        Ok(Self { ranges })
    }

    /// Returns `true` if `offset` lies inside at least one collapsed region.
    pub fn is_hidden(&self, offset: usize) -> bool {
        self.covering_range(offset).is_some()
    }

    /// Get the merged hidden range containing `offset`, if any.
    pub fn covering_range(&self, offset: usize) -> Option<Range<usize>> {
        // First range whose start is > offset; the candidate is the one just before it.
        let idx = self.ranges.partition_point(|r| r.start <= offset);
        let candidate = self.ranges.get(idx.checked_sub(1)?)?;
        (offset < candidate.end).then(|| candidate.clone())
    }

    /// Merged hidden ranges, sorted and disjoint.
    pub fn ranges(&self) -> &[Range<usize>] {
        &self.ranges
    }

    /// Get number of merged ranges
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// Check if nothing is hidden
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }
}
