use constraint_floorplan::layout::{Axis, Propagator, compute_window};
use constraint_floorplan::{ReductionConfig, analyze, parse_floorplan};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

// Layered grid: `layers` columns of `rows` blocks, each block constrained to
// the same row and the next row in the following column. The last column also
// stacks vertically so both graphs carry work.
fn layered_source(layers: usize, rows: usize) -> String {
    let count = layers * rows;
    let mut out = format!("number of modules: {count}\nmodule dimension\n");
    for l in 0..layers {
        for r in 0..rows {
            let w = 1 + (l * 7 + r * 3) % 5;
            let h = 1 + (l * 5 + r * 11) % 4;
            out.push_str(&format!("module M{l}_{r} ({w}, {h})\n"));
        }
    }
    let mut hcg = Vec::new();
    for l in 0..layers.saturating_sub(1) {
        for r in 0..rows {
            hcg.push(format!("M{l}_{r} to M{}_{r}", l + 1));
            if r + 1 < rows {
                hcg.push(format!("M{l}_{r} to M{}_{}", l + 1, r + 1));
            }
        }
    }
    let mut vcg = Vec::new();
    for r in 0..rows.saturating_sub(1) {
        vcg.push(format!("M{}_{r} to M{}_{}", layers - 1, layers - 1, r + 1));
    }
    out.push_str("edges in HCG\n");
    out.push_str(&hcg.join(", "));
    out.push_str("\nedges in VCG\n");
    out.push_str(&vcg.join(", "));
    out.push('\n');
    out
}

const SIZES: [(usize, usize); 3] = [(8, 4), (32, 8), (96, 16)];

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    for (layers, rows) in SIZES {
        let source = layered_source(layers, rows);
        let id = format!("{layers}x{rows}");
        group.bench_with_input(BenchmarkId::from_parameter(id), &source, |b, data| {
            b.iter(|| {
                let parsed = parse_floorplan(black_box(data)).expect("parse failed");
                black_box(parsed.blocks.len());
            });
        });
    }
    group.finish();
}

fn bench_windows(c: &mut Criterion) {
    let mut group = c.benchmark_group("windows");
    for (layers, rows) in SIZES {
        let plan = parse_floorplan(&layered_source(layers, rows))
            .expect("parse failed")
            .build()
            .expect("invalid floorplan");
        let id = format!("{layers}x{rows}");
        group.bench_with_input(BenchmarkId::from_parameter(id), &plan, |b, plan| {
            let mut propagator = Propagator::new();
            b.iter(|| {
                for axis in Axis::ALL {
                    let window =
                        compute_window(&mut propagator, black_box(plan), axis).expect("cyclic");
                    black_box(window.span);
                }
            });
        });
    }
    group.finish();
}

fn bench_analyze(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze");
    let config = ReductionConfig::default();
    for (layers, rows) in SIZES {
        let plan = parse_floorplan(&layered_source(layers, rows))
            .expect("parse failed")
            .build()
            .expect("invalid floorplan");
        let id = format!("{layers}x{rows}");
        group.bench_with_input(BenchmarkId::from_parameter(id), &plan, |b, plan| {
            b.iter(|| {
                let analysis = analyze(black_box(plan), &config).expect("analysis failed");
                black_box(analysis.min_area());
            });
        });
    }
    group.finish();
}

criterion_group!(
    name = benches;
    config = Criterion::default();
    targets = bench_parse, bench_windows, bench_analyze
);
criterion_main!(benches);
