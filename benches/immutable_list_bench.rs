//! Benchmark for ImmutableList transforms.
//!
//! Compares the list transforms against the equivalent `Vec` operations
//! over inputs with frequent runs of equal elements.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use ninety_nine_lists::list::ImmutableList;
use std::hint::black_box;

fn run_heavy_values(size: usize) -> Vec<u32> {
    (0..size).map(|index| (index / 3) as u32 % 7).collect()
}

// =============================================================================
// reverse Benchmark
// =============================================================================

fn benchmark_reverse(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("reverse");

    for size in [100, 1000, 10000] {
        let values = run_heavy_values(size);
        let list = ImmutableList::from_values(values.clone()).expect("size is positive");

        group.bench_with_input(BenchmarkId::new("ImmutableList", size), &list, |bencher, list| {
            bencher.iter(|| black_box(list.reverse()));
        });

        group.bench_with_input(BenchmarkId::new("Vec", size), &values, |bencher, values| {
            bencher.iter(|| {
                let mut reversed = values.clone();
                reversed.reverse();
                black_box(reversed)
            });
        });
    }

    group.finish();
}

// =============================================================================
// compress Benchmark
// =============================================================================

fn benchmark_compress(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("compress");

    for size in [100, 1000, 10000] {
        let values = run_heavy_values(size);
        let list = ImmutableList::from_values(values.clone()).expect("size is positive");

        group.bench_with_input(BenchmarkId::new("ImmutableList", size), &list, |bencher, list| {
            bencher.iter(|| black_box(list.compress()));
        });

        group.bench_with_input(BenchmarkId::new("Vec::dedup", size), &values, |bencher, values| {
            bencher.iter(|| {
                let mut deduplicated = values.clone();
                deduplicated.dedup();
                black_box(deduplicated)
            });
        });
    }

    group.finish();
}

// =============================================================================
// encode / decode Benchmark
// =============================================================================

fn benchmark_encode_decode(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("encode_decode");

    for size in [100, 1000, 10000] {
        let list = ImmutableList::from_values(run_heavy_values(size)).expect("size is positive");
        let encoded = list.encode();

        group.bench_with_input(BenchmarkId::new("encode", size), &list, |bencher, list| {
            bencher.iter(|| black_box(list.encode()));
        });

        group.bench_with_input(BenchmarkId::new("encode_direct", size), &list, |bencher, list| {
            bencher.iter(|| black_box(list.encode_direct()));
        });

        group.bench_with_input(BenchmarkId::new("decode", size), &encoded, |bencher, encoded| {
            bencher.iter(|| black_box(encoded.decode()));
        });
    }

    group.finish();
}

// =============================================================================
// duplicate Benchmark
// =============================================================================

fn benchmark_duplicate(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("duplicate_times");

    for times in [1, 2, 8] {
        let list = ImmutableList::from_values(run_heavy_values(1000)).expect("size is positive");
        group.bench_with_input(BenchmarkId::new("ImmutableList", times), &times, |bencher, &times| {
            bencher.iter(|| black_box(list.duplicate_times(times)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_reverse,
    benchmark_compress,
    benchmark_encode_decode,
    benchmark_duplicate
);
criterion_main!(benches);
