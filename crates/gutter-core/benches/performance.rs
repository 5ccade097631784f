use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use gutter_core::{
    FoldIndex, FoldRegion, GutterConfig, LineMapper, LineNumberMode, LineTable, row_labels,
};
use rand::{Rng, SeedableRng, rngs::StdRng};

fn large_text(line_count: usize) -> String {
    let mut out = String::with_capacity(line_count * 64);
    for i in 0..line_count {
        out.push_str(&format!(
            "{i:06} the quick brown fox jumps over the lazy dog (gutter-core benchmark line)\n"
        ));
    }
    // Remove the final '\n' to avoid creating an extra trailing empty line.
    out.pop();
    out
}

/// Random collapsed folds, some nested or overlapping, spread across the document.
fn random_folds(table: &LineTable, count: usize) -> Vec<FoldRegion> {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let last_line = table.line_count() - 1;
    (0..count)
        .map(|_| {
            let start_line = rng.gen_range(0..last_line);
            let end_line = (start_line + rng.gen_range(1..40)).min(last_line);
            let start = table.lines()[start_line].end;
            let end = table.lines()[end_line].start;
            FoldRegion::collapsed(start, end)
        })
        .collect()
}

fn bench_fold_index_build(c: &mut Criterion) {
    let table = LineTable::from_text(&large_text(50_000));
    let folds = random_folds(&table, 5_000);

    c.bench_function("fold_index_build/5k_regions", |b| {
        b.iter_batched(
            || folds.clone(),
            |folds| black_box(FoldIndex::new(folds).unwrap()),
            BatchSize::SmallInput,
        )
    });
}

fn bench_line_mapping_pass(c: &mut Criterion) {
    let table = LineTable::from_text(&large_text(50_000));
    let folds = FoldIndex::new(random_folds(&table, 5_000)).unwrap();

    c.bench_function("line_mapping/50k_lines_5k_folds", |b| {
        b.iter_batched(
            || (table.clone(), folds.clone()),
            |(table, folds)| black_box(LineMapper::new(table, folds).row_count()),
            BatchSize::LargeInput,
        )
    });
}

fn bench_gutter_labels(c: &mut Criterion) {
    let text = large_text(50_000);
    let table = LineTable::from_text(&text);
    let folds = random_folds(&table, 5_000);
    let mapper = LineMapper::from_text(&text, folds).unwrap();
    let config = GutterConfig::with_mode(LineNumberMode::Hybrid);

    // Pick a row well into the file to avoid warming only the top-of-document paths.
    let start_row = mapper.row_count() / 2;
    let caret = mapper.lines_on_row(start_row + 30).unwrap().start;

    c.bench_function("gutter_labels/60_rows", |b| {
        b.iter(|| {
            let labels = row_labels(&mapper, &config, caret, start_row..start_row + 60).unwrap();
            black_box(labels);
        })
    });
}

criterion_group!(
    benches,
    bench_fold_index_build,
    bench_line_mapping_pass,
    bench_gutter_labels
);
criterion_main!(benches);
