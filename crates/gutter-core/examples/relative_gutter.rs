//! Prints a folded document next to its gutter in every numbering mode.
//!
//! ```bash
//! RUST_LOG=gutter_core=trace cargo run -p gutter-core --example relative_gutter
//! ```

use gutter_core::{FoldRegion, GutterConfig, LineMapper, LineNumberMode, row_labels};
use tracing_subscriber::EnvFilter;

const SOURCE: &str = "\
fn main() {
    let items = vec![1, 2, 3];
    for item in items {
        println!(\"{item}\");
    }
}

fn helper() -> u32 {
    42
}";

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let table = gutter_core::LineTable::from_text(SOURCE);

    // Fold the loop body: from the `{` ending line 2 to the `}` on line 4.
    let loop_start = table.line(2).unwrap().end - 1;
    let loop_end = table.line(4).unwrap().end - 1;
    let regions = vec![FoldRegion::collapsed(loop_start, loop_end)];

    let mapper = LineMapper::from_text(SOURCE, regions).unwrap();
    let caret = 8;
    let lines: Vec<&str> = SOURCE.lines().collect();

    for mode in [
        LineNumberMode::Absolute,
        LineNumberMode::Relative,
        LineNumberMode::Hybrid,
    ] {
        let config = GutterConfig::with_mode(mode);
        println!("== {:?} (caret on line {})", mode, caret + 1);

        for label in row_labels(&mapper, &config, caret, 0..mapper.row_count()).unwrap() {
            let row_lines = mapper.lines_on_row(label.row).unwrap();
            let first = lines[row_lines.start];
            let marker = if row_lines.len() > 1 { " ..." } else { "" };
            println!("{:>4} | {}{}", label.text(&config), first, marker);
        }
        println!();
    }
}
