//! MORUS Comprehensive Criterion Benchmark
//!
//! Seal/open latency and throughput across message sizes.

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use morus::Morus1280;
use rand::prelude::*;
use std::hint::black_box;

const KB: usize = 1024;
const MB: usize = 1024 * 1024;

const KEY: [u8; 32] = [0x42; 32];
const NONCE: [u8; 16] = [0x24; 16];

fn random_input(size: usize) -> Vec<u8> {
    let mut input = vec![0u8; size];
    rand::rng().fill(&mut input[..]);
    input
}

// =============================================================================
// BENCHMARK 1: LATENCY
// =============================================================================

/// Hot path latency for small records (packets, tokens).
fn bench_latency(c: &mut Criterion) {
    let mut group = c.benchmark_group("1-Latency");
    let aead = Morus1280::new(&KEY);

    let sizes = [(0, "0B"), (16, "16B"), (64, "64B"), (256, "256B"), (KB, "1KB")];

    for (size, name) in sizes {
        let input = random_input(size);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::from_parameter(name), &input, |b, data| {
            b.iter(|| aead.seal(&NONCE, black_box(data), b"hdr"))
        });
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 2: BULK SEAL
// =============================================================================

/// In-place encryption throughput without allocation.
fn bench_seal_bulk(c: &mut Criterion) {
    let mut group = c.benchmark_group("2-Seal-Bulk");
    let aead = Morus1280::new(&KEY);

    let sizes = [(16 * KB, "16KB"), (256 * KB, "256KB"), (MB, "1MB"), (16 * MB, "16MB")];

    for (size, name) in sizes {
        let mut buf = random_input(size);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_function(BenchmarkId::from_parameter(name), |b| {
            b.iter(|| aead.seal_detached(&NONCE, b"", black_box(&mut buf)))
        });
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 3: OPEN
// =============================================================================

/// Verified decryption, including tag check.
fn bench_open(c: &mut Criterion) {
    let mut group = c.benchmark_group("3-Open");
    let aead = Morus1280::new(&KEY);

    let sizes = [(64, "64B"), (4 * KB, "4KB"), (MB, "1MB")];

    for (size, name) in sizes {
        let sealed = aead.seal(&NONCE, &random_input(size), b"hdr");
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(BenchmarkId::from_parameter(name), &sealed, |b, data| {
            b.iter(|| aead.open(&NONCE, black_box(data), b"hdr").unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_latency, bench_seal_bulk, bench_open);
criterion_main!(benches);
