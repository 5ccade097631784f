#![warn(missing_docs)]
//! Gutter Core - Fold-aware Relative Line Numbering
//!
//! # Overview
//!
//! `gutter-core` computes the numbers an editor gutter shows next to each line when code is
//! folded: the visible row of every logical line, the signed row distance between a line and the
//! caret line (relative numbering), and the hybrid variant that shows the caret's absolute line
//! number and relative distances everywhere else.
//!
//! It does not store or edit text and does not decide what gets folded. The host supplies a
//! read-only snapshot of line boundaries and fold regions; the crate answers with integers.
//!
//! # Architecture Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  Gutter Labels & Config (modes, TOML)       │  ← Public API
//! ├─────────────────────────────────────────────┤
//! │  Line Mapper (logical line -> visible row)  │  ← Row Mapping
//! ├─────────────────────────────────────────────┤
//! │  Fold Index (merged collapsed intervals)    │  ← Visibility
//! ├─────────────────────────────────────────────┤
//! │  Line Table (Rope-based line boundaries)    │  ← Line Access
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use gutter_core::{FoldIndex, FoldRegion, LineMapper, LineTable};
//!
//! let table = LineTable::from_text("line 1\nline 2\nline 3\nline 4\nline 5\n");
//!
//! // Fold lines 2..=3 (0-based) into a single row.
//! let start = table.line(2).unwrap().start;
//! let end = table.line(3).unwrap().end;
//! let folds = FoldIndex::new([FoldRegion::collapsed(start, end)]).unwrap();
//!
//! let mapper = LineMapper::new(table, folds);
//! assert_eq!(mapper.relative_line(1, 3).unwrap(), 1);
//! assert_eq!(mapper.relative_line(4, 1).unwrap(), -2);
//! assert_eq!(mapper.hybrid_line(2, 2).unwrap(), 3);
//! ```
//!
//! ## Rendering a Gutter
//!
//! ```rust
//! use gutter_core::{FoldRegion, GutterConfig, LineMapper, row_labels};
//!
//! let config = GutterConfig::from_toml_str(r#"mode = "hybrid""#).unwrap();
//! let mapper = LineMapper::from_text("a\nb\nc\nd", [FoldRegion::collapsed(2, 6)]).unwrap();
//!
//! let labels: Vec<String> = row_labels(&mapper, &config, 3, 0..mapper.row_count())
//!     .unwrap()
//!     .iter()
//!     .map(|label| label.text(&config))
//!     .collect();
//! assert_eq!(labels, ["1", "4"]);
//! ```
//!
//! # Module Description
//!
//! - [`fold_index`] - Merged index of collapsed fold regions
//! - [`line_table`] - Logical line boundaries (from text or explicit offsets)
//! - [`line_mapper`] - Visible rows, relative and hybrid line numbers
//! - [`gutter`] - Per-row gutter labels
//! - [`config`] - Line-number mode settings
//! - [`error`] - Error types
//!
//! # Offsets
//!
//! All offsets are character (Unicode scalar) offsets into the document, matching the
//! coordinates used by `ropey`. A fold hides the line break terminating line `i` iff the offset
//! of that break (the line's end offset) lies in `[start, end)` of a collapsed region.

pub mod config;
pub mod error;
pub mod fold_index;
pub mod gutter;
pub mod line_mapper;
pub mod line_table;

pub use config::{ConfigError, GutterConfig, LineNumberMode};
pub use error::{Error, Result};
pub use fold_index::{FoldIndex, FoldRegion};
pub use gutter::{GutterLabel, line_number, row_labels};
pub use line_mapper::LineMapper;
pub use line_table::{LineBoundary, LineTable};
