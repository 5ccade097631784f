//! Error types for line-number snapshots.

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
/// Errors produced while building or querying a line-number snapshot.
pub enum Error {
    #[error("invalid fold region: start {start} must be less than end {end}")]
    /// A fold region with `start >= end` was supplied to [`crate::FoldIndex`].
    InvalidFoldRegion {
        /// Inclusive start character offset.
        start: usize,
        /// Exclusive end character offset.
        end: usize,
    },

    #[error("invalid boundary for line {line}: {start}..{end}")]
    /// A line whose end precedes its start.
    InvalidLineBoundary {
        /// Logical line index.
        line: usize,
        /// Start character offset.
        start: usize,
        /// End character offset (excluding the line break).
        end: usize,
    },

    #[error("line {line} ends at {end} but line {} starts at {next_start}", .line + 1)]
    /// Two consecutive lines with no line-break character between them.
    MissingLineBreak {
        /// Logical line index of the earlier line.
        line: usize,
        /// End character offset of the earlier line.
        end: usize,
        /// Start character offset of the following line.
        next_start: usize,
    },

    #[error("line {line} out of range (line count {line_count})")]
    /// A logical line index outside `[0, line_count)`.
    LineOutOfRange {
        /// The rejected line index.
        line: usize,
        /// Number of logical lines in the snapshot.
        line_count: usize,
    },

    #[error("visible row {row} out of range (row count {row_count})")]
    /// A visible row index outside `[0, row_count)`.
    RowOutOfRange {
        /// The rejected row index.
        row: usize,
        /// Number of visible rows in the snapshot.
        row_count: usize,
    },
}

impl Error {
    /// Returns `true` for malformed input rejected at construction time.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidFoldRegion { .. }
                | Self::InvalidLineBoundary { .. }
                | Self::MissingLineBreak { .. }
        )
    }

    /// Returns `true` for a line or row index outside the snapshot.
    pub fn is_out_of_range(&self) -> bool {
        matches!(self, Self::LineOutOfRange { .. } | Self::RowOutOfRange { .. })
    }
}

/// Result alias used throughout `gutter-core`.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert!(Error::InvalidFoldRegion { start: 3, end: 3 }.is_validation());
        assert!(
            Error::MissingLineBreak {
                line: 0,
                end: 4,
                next_start: 4
            }
            .is_validation()
        );

        let err = Error::LineOutOfRange {
            line: 9,
            line_count: 5,
        };
        assert!(err.is_out_of_range());
        assert!(!err.is_validation());
    }

    #[test]
    fn test_error_messages() {
        let err = Error::InvalidFoldRegion { start: 10, end: 4 };
        assert_eq!(
            err.to_string(),
            "invalid fold region: start 10 must be less than end 4"
        );

        let err = Error::MissingLineBreak {
            line: 2,
            end: 8,
            next_start: 8,
        };
        assert_eq!(err.to_string(), "line 2 ends at 8 but line 3 starts at 8");
    }
}
