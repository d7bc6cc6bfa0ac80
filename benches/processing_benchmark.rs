use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use measurements_processor::models::format_tenths;
use measurements_processor::processors::{aggregate_chunk, ParallelAggregator};
use measurements_processor::readers::parse_record;
use std::fmt::Write as _;

// Deterministic measurement data spread over a fixed station set
fn create_test_measurements(stations: usize, rows: usize) -> Vec<u8> {
    let mut data = String::with_capacity(rows * 18);
    for i in 0..rows {
        let station = i % stations;
        let tenths = ((i * 31 + station * 7) % 1999) as i32 - 999;
        let _ = writeln!(data, "Station-{station};{}", format_tenths(tenths));
    }
    data.into_bytes()
}

fn benchmark_parse_record(c: &mut Criterion) {
    c.bench_function("parse_record", |b| {
        b.iter(|| parse_record(black_box(b"Nouakchott;-17.3")).unwrap())
    });
}

fn benchmark_aggregate_chunk(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate_chunk");
    for &rows in &[1_000, 10_000, 100_000] {
        let data = create_test_measurements(100, rows);
        group.bench_with_input(BenchmarkId::new("rows", rows), &data, |b, data| {
            b.iter(|| aggregate_chunk(black_box(data)).unwrap())
        });
    }
    group.finish();
}

fn benchmark_parallel_aggregation(c: &mut Criterion) {
    let data = create_test_measurements(100, 100_000);
    let mut group = c.benchmark_group("aggregate_full");
    for &workers in &[1, 2, 4, 8] {
        group.bench_with_input(
            BenchmarkId::new("workers", workers),
            &workers,
            |b, &workers| {
                let aggregator = ParallelAggregator::new(workers);
                b.iter(|| aggregator.aggregate(black_box(&data)).unwrap())
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    benchmark_parse_record,
    benchmark_aggregate_chunk,
    benchmark_parallel_aggregation
);
criterion_main!(benches);
