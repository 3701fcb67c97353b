//! Criterion benchmarks for macrodash_core resolvers
//!
//! Run with: cargo bench -p macrodash_core

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use macrodash_core::{Scenario, compute_ad_as, compute_equilibrium, compute_is, compute_lm};

fn bench_ad_as(c: &mut Criterion) {
    let mut group = c.benchmark_group("ad_as");

    for scenario in Scenario::ALL {
        group.bench_with_input(
            BenchmarkId::new("compute_ad_as", format!("{scenario:?}")),
            &scenario,
            |b, &scenario| b.iter(|| compute_ad_as(scenario, black_box(150.0), black_box(120.0))),
        );
    }

    group.finish();
}

fn bench_is_lm(c: &mut Criterion) {
    let mut group = c.benchmark_group("is_lm");

    group.bench_function("compute_is", |b| {
        b.iter(|| compute_is(black_box(100.0), black_box(100.0)))
    });

    group.bench_function("compute_lm", |b| {
        b.iter(|| compute_lm(black_box(200.0), black_box(2.0)))
    });

    group.bench_function("compute_equilibrium", |b| {
        b.iter(|| {
            compute_equilibrium(
                black_box(100.0),
                black_box(100.0),
                black_box(200.0),
                black_box(2.0),
            )
        })
    });

    group.finish();
}

criterion_group!(benches, bench_ad_as, bench_is_lm);
criterion_main!(benches);
