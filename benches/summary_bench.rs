use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use prettyframe_core::{AxisSpec, Summarizer, SummaryOptions};
use prettyframe_frame::{CellValue, Frame, Subset};

fn build_frame(rows: usize, cols: usize) -> Frame {
    let names: Vec<String> = (0..cols).map(|c| format!("c{c}")).collect();
    let names: Vec<&str> = names.iter().map(String::as_str).collect();
    let data = (0..rows)
        .map(|r| {
            (0..cols)
                .map(|c| CellValue::Float((r * cols + c) as f64 * 0.5))
                .collect()
        })
        .collect();
    Frame::from_rows(&names, data).unwrap()
}

fn bench_materialize(c: &mut Criterion) {
    let mut group = c.benchmark_group("materialize");
    for size in [10, 100, 1000] {
        let summary = Summarizer::new(build_frame(size, 8))
            .total(SummaryOptions::new().axis(AxisSpec::Both))
            .unwrap()
            .average(SummaryOptions::new())
            .unwrap();
        group.bench_with_input(BenchmarkId::new("total_both_average", size), &summary, |b, s| {
            b.iter(|| black_box(s.to_frame().unwrap()));
        });
    }
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render");
    for size in [10, 100, 1000] {
        let summary = Summarizer::new(build_frame(size, 8))
            .total(SummaryOptions::new())
            .unwrap()
            .as_percent(Subset::columns(["c0", "c1"]), 1)
            .unwrap()
            .as_currency(Subset::columns(["c2"]), "USD", None);
        group.bench_with_input(BenchmarkId::new("html", size), &summary, |b, s| {
            b.iter(|| black_box(s.render().unwrap()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_materialize, bench_render);
criterion_main!(benches);
