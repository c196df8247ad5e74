//! PoxHash Criterion Benchmark
//!
//! Latency and throughput across message sizes, both generations, streaming
//! and batch hashing.

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use poxhash::PoxVariant;
use rand::prelude::*;
use std::hint::black_box;

const KB: usize = 1024;

fn random_input(size: usize) -> Vec<u8> {
    let mut input = vec![0u8; size];
    rand::rng().fill(&mut input[..]);
    input
}

// =============================================================================
// BENCHMARK 1: LATENCY
// =============================================================================

/// Hot path latency for short messages (identifiers, keys).
fn bench_latency(c: &mut Criterion) {
    let mut group = c.benchmark_group("1-Latency");

    let sizes = [(0, "empty"), (5, "5B"), (64, "64B"), (256, "256B"), (KB, "1KB")];

    for (size, name) in sizes {
        let input = random_input(size);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::from_parameter(name), &input, |b, data| {
            b.iter(|| poxhash::hash(black_box(data)))
        });
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 2: GENERATIONS
// =============================================================================

/// Classic (8 rounds, bitwise) against Extended (31 rounds, modulo).
fn bench_generations(c: &mut Criterion) {
    let mut group = c.benchmark_group("2-Generations");

    for size in [64, 4 * KB] {
        let input = random_input(size);
        group.throughput(Throughput::Bytes(size as u64));

        for variant in PoxVariant::ALL {
            group.bench_with_input(BenchmarkId::new(variant.name(), size), &input, |b, data| {
                b.iter(|| poxhash::hash_with_variant(black_box(data), variant))
            });
        }
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 3: STREAMING
// =============================================================================

/// Incremental updates with chunk sizes that straddle the block boundary.
fn bench_streaming(c: &mut Criterion) {
    let mut group = c.benchmark_group("3-Streaming");

    let total = 16 * KB;
    let input = random_input(total);
    group.throughput(Throughput::Bytes(total as u64));

    for chunk_size in [1, 13, 64, 100, KB] {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{chunk_size}B-chunks")),
            &chunk_size,
            |b, &chunk| {
                b.iter(|| {
                    let mut hasher = poxhash::Hasher::new();
                    for piece in input.chunks(chunk) {
                        hasher.update(black_box(piece));
                    }
                    hasher.finalize()
                })
            },
        );
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 4: BATCH & THREAD SCALING
// =============================================================================

/// Many independent messages, fanned out with Rayon (1 to N threads).
#[cfg(feature = "multithread")]
fn bench_batch_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("4-Batch-Scaling");
    group.sample_size(20);

    let owned: Vec<Vec<u8>> = (0..256).map(|_| random_input(256)).collect();
    let messages: Vec<&[u8]> = owned.iter().map(Vec::as_slice).collect();
    group.throughput(Throughput::Bytes((owned.len() * 256) as u64));

    let max_threads = num_cpus::get();
    let thread_counts: Vec<usize> = [1, 2, 4, 8, 16, 32]
        .iter()
        .copied()
        .filter(|&t| t <= max_threads)
        .collect();

    for threads in thread_counts {
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{threads}threads")),
            &threads,
            |b, &t| {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(t)
                    .build()
                    .unwrap();
                pool.install(|| b.iter(|| poxhash::hash_batch(black_box(&messages))));
            },
        );
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 5: VERIFICATION
// =============================================================================

/// Constant-time verification against a plain digest comparison.
fn bench_verify(c: &mut Criterion) {
    let mut group = c.benchmark_group("5-Verify");

    let input = random_input(256);
    let digest = poxhash::hash(&input);

    group.bench_function("verify", |b| {
        b.iter(|| poxhash::verify(black_box(&input), black_box(&digest.bytes)))
    });
    group.bench_function("hash-and-compare", |b| {
        b.iter(|| poxhash::hash(black_box(&input)).bytes == digest.bytes)
    });
    group.finish();
}

// =============================================================================
// MAIN
// =============================================================================

criterion_group!(
    benches,
    bench_latency,
    bench_generations,
    bench_streaming,
    bench_verify,
);

#[cfg(feature = "multithread")]
criterion_group!(benches_multithread, bench_batch_scaling,);

#[cfg(feature = "multithread")]
criterion_main!(benches, benches_multithread);

#[cfg(not(feature = "multithread"))]
criterion_main!(benches);
