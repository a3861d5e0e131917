//! Criterion benchmarks for termlog

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use termlog::console::color::colorize;
use termlog::console::table::{column_widths, render_table};
use termlog::prelude::*;

fn rows(count: usize) -> Vec<Vec<String>> {
    (0..count)
        .map(|i| {
            vec![
                format!("service-{}", i),
                if i % 3 == 0 { "Pending" } else { "Running" }.to_string(),
                format!("registry.local/app:{}", i % 17),
            ]
        })
        .collect()
}

const HEADER: [&str; 3] = ["NAME", "STATUS", "IMAGE"];

// ============================================================================
// Table Rendering Benchmarks
// ============================================================================

fn bench_column_widths(c: &mut Criterion) {
    let mut group = c.benchmark_group("column_widths");

    for count in [10usize, 100, 1000] {
        let header: Vec<String> = HEADER.iter().map(|h| h.to_string()).collect();
        let rows = rows(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &rows, |b, rows| {
            b.iter(|| column_widths(black_box(&header), black_box(rows)));
        });
    }

    group.finish();
}

fn bench_render_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_table");

    for count in [0usize, 10, 100, 1000] {
        let header: Vec<String> = HEADER.iter().map(|h| h.to_string()).collect();
        let rows = rows(count);
        group.throughput(Throughput::Elements(count.max(1) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &rows, |b, rows| {
            b.iter(|| render_table(black_box(&header), black_box(rows), true));
        });
    }

    group.finish();
}

fn bench_print_table(c: &mut Criterion) {
    let mut group = c.benchmark_group("print_table");
    let header: Vec<String> = HEADER.iter().map(|h| h.to_string()).collect();
    let rows = rows(100);

    let discard = Logger::discard();
    group.bench_function("discard", |b| {
        b.iter(|| print_table(&*discard, black_box(&header), black_box(&rows)));
    });

    let memory = Logger::memory(LogLevel::Info);
    group.bench_function("memory", |b| {
        b.iter(|| {
            print_table(&*memory, black_box(&header), black_box(&rows));
            if let Some(m) = memory.as_memory() {
                m.clear();
            }
        });
    });

    group.finish();
}

// ============================================================================
// Logging Benchmarks
// ============================================================================

fn bench_leveled_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("leveled_logging");
    group.throughput(Throughput::Elements(1));

    let memory = Logger::memory(LogLevel::Info);
    group.bench_function("memory_info", |b| {
        b.iter(|| {
            memory.info(black_box("Deploying service"));
            if let Some(m) = memory.as_memory() {
                m.clear();
            }
        });
    });

    group.bench_function("memory_filtered", |b| {
        b.iter(|| memory.debug(black_box("Filtered out")));
    });

    let discard = Logger::discard();
    group.bench_function("discard_info", |b| {
        b.iter(|| discard.info(black_box("Dropped")));
    });

    group.bench_function("colorize", |b| {
        b.iter(|| colorize(black_box("[done] √ "), black_box("green+b")));
    });

    group.finish();
}

// ============================================================================
// Criterion Configuration
// ============================================================================

criterion_group!(
    benches,
    bench_column_widths,
    bench_render_table,
    bench_print_table,
    bench_leveled_logging
);

criterion_main!(benches);
