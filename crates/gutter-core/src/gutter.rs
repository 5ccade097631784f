//! Gutter labels
//!
//! Turns [`LineMapper`] queries into the numbers a gutter paints, one per visible row.

use std::ops::Range;

use crate::config::{GutterConfig, LineNumberMode};
use crate::error::Result;
use crate::line_mapper::LineMapper;

/// Number shown for `target` under `mode`, with the caret on line `caret`.
pub fn line_number(
    mapper: &LineMapper,
    mode: LineNumberMode,
    caret: usize,
    target: usize,
) -> Result<isize> {
    match mode {
        LineNumberMode::Absolute => {
            // Both lines must exist in every mode.
            mapper.relative_line(caret, target)?;
            Ok(target as isize + 1)
        }
        LineNumberMode::Relative => mapper.relative_line(caret, target),
        LineNumberMode::Hybrid => mapper.hybrid_line(caret, target),
    }
}

/// Label for one visible gutter row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GutterLabel {
    /// Visible row index
    pub row: usize,
    /// Logical line the number was computed for
    pub line: usize,
    /// Line number (absolute, or signed relative distance)
    pub number: isize,
    /// Whether `number` is an absolute one-based line number
    pub is_absolute: bool,
}

impl GutterLabel {
    /// Render the label as gutter text.
    pub fn text(&self, config: &GutterConfig) -> String {
        if !self.is_absolute && config.unsigned_relative {
            self.number.unsigned_abs().to_string()
        } else {
            self.number.to_string()
        }
    }
}

/// Compute labels for the visible rows in `rows`, clamped to the mapper's row count.
///
/// Each row is labelled with its first logical line, except the caret's row which is labelled
/// with the caret line itself (the caret may sit on a line merged into a fold).
pub fn row_labels(
    mapper: &LineMapper,
    config: &GutterConfig,
    caret: usize,
    rows: Range<usize>,
) -> Result<Vec<GutterLabel>> {
    let caret_row = mapper.visible_row(caret)?;
    let end = rows.end.min(mapper.row_count());
    let start = rows.start.min(end);

    let mut labels = Vec::with_capacity(end - start);
    for row in start..end {
        let line = if row == caret_row {
            caret
        } else {
            mapper.lines_on_row(row)?.start
        };
        let number = line_number(mapper, config.mode, caret, line)?;
        let is_absolute = match config.mode {
            LineNumberMode::Absolute => true,
            LineNumberMode::Relative => false,
            LineNumberMode::Hybrid => line == caret,
        };
        labels.push(GutterLabel {
            row,
            line,
            number,
            is_absolute,
        });
    }

    tracing::trace!(caret, start, end, mode = ?config.mode, "computed gutter labels");

    Ok(labels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fold_index::FoldRegion;
    use pretty_assertions::assert_eq;

    const FIVE_LINES: &str = "line 1\nline 2\nline 3\nline 4\nline 5\n";

    fn folded_mapper() -> LineMapper {
        // Lines 2..=3 folded onto one row.
        LineMapper::from_text(FIVE_LINES, [FoldRegion::collapsed(14, 27)]).unwrap()
    }

    fn texts(mapper: &LineMapper, config: GutterConfig, caret: usize) -> Vec<String> {
        row_labels(mapper, &config, caret, 0..usize::MAX)
            .unwrap()
            .iter()
            .map(|label| label.text(&config))
            .collect()
    }

    #[test]
    fn test_line_number_modes() {
        let mapper = folded_mapper();

        assert_eq!(line_number(&mapper, LineNumberMode::Absolute, 4, 1).unwrap(), 2);
        assert_eq!(line_number(&mapper, LineNumberMode::Relative, 4, 1).unwrap(), -2);
        assert_eq!(line_number(&mapper, LineNumberMode::Hybrid, 4, 4).unwrap(), 5);
        assert_eq!(line_number(&mapper, LineNumberMode::Hybrid, 4, 3).unwrap(), -1);
    }

    #[test]
    fn test_absolute_mode_validates_lines() {
        let mapper = folded_mapper();
        assert!(
            line_number(&mapper, LineNumberMode::Absolute, 0, 6)
                .unwrap_err()
                .is_out_of_range()
        );
    }

    #[test]
    fn test_absolute_labels_skip_hidden_lines() {
        let mapper = folded_mapper();
        let config = GutterConfig::with_mode(LineNumberMode::Absolute);

        assert_eq!(texts(&mapper, config, 0), vec!["1", "2", "3", "5", "6"]);
    }

    #[test]
    fn test_relative_labels() {
        let mapper = folded_mapper();

        let unsigned = GutterConfig::with_mode(LineNumberMode::Relative);
        assert_eq!(texts(&mapper, unsigned, 4), vec!["3", "2", "1", "0", "1"]);

        let signed = GutterConfig {
            unsigned_relative: false,
            ..unsigned
        };
        assert_eq!(texts(&mapper, signed, 4), vec!["-3", "-2", "-1", "0", "1"]);
    }

    #[test]
    fn test_hybrid_labels_with_caret_inside_fold() {
        let mapper = folded_mapper();
        let config = GutterConfig::with_mode(LineNumberMode::Hybrid);

        // Caret on line 3, which is merged onto line 2's row.
        let labels = row_labels(&mapper, &config, 3, 0..5).unwrap();
        assert_eq!(labels[2].line, 3);
        assert!(labels[2].is_absolute);
        assert_eq!(texts(&mapper, config, 3), vec!["2", "1", "4", "1", "2"]);
    }

    #[test]
    fn test_row_range_is_clamped() {
        let mapper = folded_mapper();
        let config = GutterConfig::default();

        let labels = row_labels(&mapper, &config, 0, 3..100).unwrap();
        assert_eq!(labels.len(), 2);
        assert_eq!(labels[0].row, 3);
        assert_eq!(labels[0].line, 4);

        assert!(row_labels(&mapper, &config, 0, 10..20).unwrap().is_empty());
    }

    #[test]
    fn test_caret_out_of_range() {
        let mapper = folded_mapper();
        let err = row_labels(&mapper, &GutterConfig::default(), 6, 0..5).unwrap_err();
        assert!(err.is_out_of_range());
    }
}
