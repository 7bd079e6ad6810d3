//! Criterion benchmarks for the slice utilities.
//!
//! Inputs are synthetic and seeded so runs are comparable.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use u_basics::collections::concatenate_arrays;
use u_basics::pricing::{most_expensive, Product};
use u_basics::rating::{filter_by_rating, RatedItem};

fn rated_items(n: usize, rng: &mut StdRng) -> Vec<RatedItem> {
    (0..n)
        .map(|i| RatedItem::new(format!("item-{i}"), rng.random_range(0.0..5.0)))
        .collect()
}

fn products(n: usize, rng: &mut StdRng) -> Vec<Product> {
    (0..n)
        .map(|i| Product::new(format!("product-{i}"), rng.random_range(0.0..1000.0)))
        .collect()
}

// ===========================================================================
// Benchmarks
// ===========================================================================

fn bench_concatenate(c: &mut Criterion) {
    let mut group = c.benchmark_group("concatenate_arrays");

    for &(parts, len) in &[(10usize, 100usize), (100, 100), (1000, 10)] {
        let mut rng = StdRng::seed_from_u64(42);
        let arrays: Vec<Vec<u64>> = (0..parts)
            .map(|_| (0..len).map(|_| rng.random()).collect())
            .collect();
        let slices: Vec<&[u64]> = arrays.iter().map(|a| a.as_slice()).collect();
        group.bench_with_input(
            BenchmarkId::new(format!("p{}_l{}", parts, len), parts * len),
            &slices,
            |b, s| b.iter(|| black_box(concatenate_arrays(black_box(s)))),
        );
    }
    group.finish();
}

fn bench_filter_by_rating(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_by_rating");

    for &n in &[100, 10_000, 100_000] {
        let items = rated_items(n, &mut StdRng::seed_from_u64(42));
        group.bench_with_input(BenchmarkId::from_parameter(n), &items, |b, items| {
            b.iter(|| black_box(filter_by_rating(black_box(items))))
        });
    }
    group.finish();
}

fn bench_most_expensive(c: &mut Criterion) {
    let mut group = c.benchmark_group("most_expensive");

    for &n in &[100, 10_000, 100_000] {
        let items = products(n, &mut StdRng::seed_from_u64(42));
        group.bench_with_input(BenchmarkId::from_parameter(n), &items, |b, items| {
            b.iter(|| black_box(most_expensive(black_box(items))))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_concatenate,
    bench_filter_by_rating,
    bench_most_expensive
);
criterion_main!(benches);
