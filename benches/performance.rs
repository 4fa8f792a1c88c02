// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Performance benchmarks for pcset
//!
//! Run with: cargo bench
//!
//! These benchmarks measure:
//! - Canonicalization over the whole universe
//! - Interval-class vector derivation
//! - Pairwise classification
//! - Z-pair scans, sequential and parallel

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pcset::query::{QueryEngine, QueryOptions};
use pcset::relation::classify;
use pcset::set::{interval_class_vector, prime_form, PitchClassSet};
use pcset::{EmptyRegistry, SetClass, SetClassTable};

/// Benchmark prime form of every subset of the universe
fn bench_prime_form(c: &mut Criterion) {
    c.bench_function("prime_form_all_4096", |b| {
        b.iter(|| {
            for bits in 0..=PitchClassSet::AGGREGATE.bits() {
                black_box(prime_form(PitchClassSet::from_bits(black_box(bits))));
            }
        })
    });
}

/// Benchmark interval-class vectors by cardinality
fn bench_interval_class_vector(c: &mut Criterion) {
    let mut group = c.benchmark_group("interval_class_vector");

    for n in [3usize, 6, 9, 12].iter() {
        let set = PitchClassSet::new((0..*n as i64).map(|i| i * 7));
        group.bench_with_input(BenchmarkId::from_parameter(n), &set, |b, &set| {
            b.iter(|| black_box(interval_class_vector(black_box(set))))
        });
    }

    group.finish();
}

/// Benchmark single classifications
fn bench_classify(c: &mut Criterion) {
    let z17 = SetClass::from_set(PitchClassSet::new([0, 1, 2, 4, 7, 8]));
    let z43 = SetClass::from_set(PitchClassSet::new([0, 1, 2, 5, 6, 8]));
    let tetrad = SetClass::from_set(PitchClassSet::new([0, 2, 4, 8]));
    let triad = SetClass::from_set(PitchClassSet::new([0, 4, 8]));

    c.bench_function("classify_equal_cardinality", |b| {
        b.iter(|| black_box(classify(black_box(&z17), black_box(&z43))))
    });
    c.bench_function("classify_embedding", |b| {
        b.iter(|| black_box(classify(black_box(&triad), black_box(&tetrad))))
    });
}

/// Benchmark building the set-class table
fn bench_table_build(c: &mut Criterion) {
    c.bench_function("set_class_table_build", |b| {
        b.iter(|| black_box(SetClassTable::build(&EmptyRegistry).len()))
    });
}

/// Benchmark Z-pair scans over the hexachords
fn bench_z_pairs(c: &mut Criterion) {
    let mut group = c.benchmark_group("z_pairs_hexachords");

    for parallel in [false, true].iter() {
        let engine = QueryEngine::with_options(
            EmptyRegistry,
            QueryOptions {
                parallel: *parallel,
                deterministic_order: true,
            },
        );
        let label = if *parallel { "parallel" } else { "sequential" };
        group.bench_function(label, |b| {
            b.iter(|| black_box(engine.z_pairs(6).map(|pairs| pairs.len())))
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_prime_form,
    bench_interval_class_vector,
    bench_classify,
    bench_table_build,
    bench_z_pairs,
);

criterion_main!(benches);
