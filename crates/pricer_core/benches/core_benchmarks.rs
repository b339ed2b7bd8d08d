//! Criterion benchmarks for pricer_core numerics.
//!
//! Measures the log-gamma binomial weights across lattice depths and the
//! streaming statistics accumulator across sample sizes.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pricer_core::math::{binomial_pmf, SampleStatistics};

/// Benchmark a full row of binomial weights.
fn bench_binomial_weights(c: &mut Criterion) {
    let mut group = c.benchmark_group("binomial_weights");

    for n in [10, 100, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::new("row", n), &n, |b, &n| {
            b.iter(|| {
                let total: f64 = (0..=n).map(|k| binomial_pmf(k, n, black_box(0.51))).sum();
                black_box(total)
            });
        });
    }

    group.finish();
}

/// Benchmark push versus chunked merge.
fn bench_sample_statistics(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample_statistics");

    for n in [1_000, 100_000] {
        let samples: Vec<f64> = (0..n).map(|i| (i as f64 * 0.37).sin()).collect();

        group.bench_with_input(BenchmarkId::new("push", n), &samples, |b, samples| {
            b.iter(|| black_box(samples.iter().copied().collect::<SampleStatistics>()));
        });

        group.bench_with_input(BenchmarkId::new("merge_chunks", n), &samples, |b, samples| {
            b.iter(|| {
                let mut total = SampleStatistics::new();
                for chunk in samples.chunks(4_096) {
                    total.merge(&chunk.iter().copied().collect());
                }
                black_box(total)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_binomial_weights, bench_sample_statistics);
criterion_main!(benches);
