//! Backend Comparison Benchmark
//!
//! Compares performance of the runtime dispatcher vs the explicit AVX2 and
//! portable engines. Validates the cost of the fallback path.

#![allow(missing_docs)]
#![allow(unsafe_code)]
#![allow(clippy::unwrap_used)]
use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use morus::{kernels, Morus1280};
use std::hint::black_box;

const KEY: [u8; 32] = [0x42; 32];
const NONCE: [u8; 16] = [0x24; 16];

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_backends(c: &mut Criterion) {
    let mut group = c.benchmark_group("MORUS Backends");
    let aead = Morus1280::new(&KEY);

    // Scenarios:
    // - Small (7B): Dispatch overhead vs init/finalize cost
    // - Medium (1KB): L1 cache hot-path
    // - Large (256KB): Bulk throughput
    let sizes = [7, 1024, 256 * 1024];

    for size in sizes {
        let mut buf = vec![0u8; size];
        group.throughput(Throughput::Bytes(size as u64));

        // 1. Dispatcher (Production Path)
        group.bench_function(format!("Dispatcher - {size} bytes"), |b| {
            b.iter(|| aead.seal_detached(&NONCE, b"", black_box(&mut buf)));
        });

        // 2. AVX2 - Explicit engine (bypasses dispatcher)
        #[cfg(target_arch = "x86_64")]
        if is_x86_feature_detected!("avx2") {
            group.bench_function(format!("AVX2 Native - {size} bytes"), |b| {
                b.iter(|| unsafe { kernels::avx2::seal(&KEY, &NONCE, b"", black_box(&mut buf)) });
            });
        }

        // 3. Portable - Pure Rust, no SIMD
        // Baseline to quantify the speedup from hardware acceleration
        group.bench_function(format!("Portable (No SIMD) - {size} bytes"), |b| {
            b.iter(|| kernels::portable::seal(&KEY, &NONCE, b"", black_box(&mut buf)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_backends);
criterion_main!(benches);
