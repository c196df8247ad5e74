//! Kernel Stage Benchmark
//!
//! Cost of each round stage, the prime reduction of both generations, byte
//! mixing and a full block compression.

#![allow(missing_docs)]
#![allow(clippy::unwrap_used)]
use criterion::{criterion_group, criterion_main, Criterion};
use poxhash::kernels::constants::{BLOCK_SIZE, INIT_FACTORS};
use poxhash::kernels::portable::{self, stages};
use poxhash::PoxVariant;
use std::hint::black_box;

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_stages(c: &mut Criterion) {
    let mut group = c.benchmark_group("PoxHash Stages");

    group.bench_function("alpha", |b| b.iter(|| stages::alpha(black_box(&INIT_FACTORS))));
    group.bench_function("delta", |b| b.iter(|| stages::delta(black_box(&INIT_FACTORS))));
    group.bench_function("theta", |b| b.iter(|| stages::theta(black_box(&INIT_FACTORS))));
    group.bench_function("gamma", |b| b.iter(|| stages::gamma(black_box(&INIT_FACTORS))));

    for variant in PoxVariant::ALL {
        group.bench_function(format!("mix ({variant})"), |b| {
            b.iter(|| portable::mix(black_box(&INIT_FACTORS), black_box(b"abcd"), 3, variant));
        });
        group.bench_function(format!("reduce ({variant})"), |b| {
            b.iter(|| portable::reduce(black_box(&INIT_FACTORS), variant.reduction()));
        });
        group.bench_function(format!("round ({variant})"), |b| {
            b.iter(|| portable::round(black_box(&INIT_FACTORS), variant));
        });
        group.bench_function(format!("compress 64B ({variant})"), |b| {
            let block = [0x5au8; BLOCK_SIZE];
            b.iter(|| {
                let mut factors = INIT_FACTORS;
                portable::compress(&mut factors, black_box(&block), variant);
                factors
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_stages);
criterion_main!(benches);
