//! Microbenchmarks for tagpool.
//!
//! Times the pool operations directly through an explicit `Arena`: the
//! allocate/free round trip, best-fit scans over a fragmented free list,
//! and a reallocate ladder. Numbers are ns/op on the current machine; run
//! with `--release`.

use std::hint::black_box;
use std::time::Instant;

use tagpool::arena::Arena;

const POOL_BYTES: usize = 1 << 20;

/// Measure the allocate/free round trip for a given size, N iterations.
fn bench_alloc_free(size: usize, iterations: usize) -> f64 {
    let mut arena = Arena::create(POOL_BYTES).expect("pool");
    // Warmup
    for _ in 0..1000 {
        unsafe {
            let ptr = arena.allocate(black_box(size));
            std::ptr::write_bytes(ptr, 0xAB, size.min(64));
            arena.free(black_box(ptr));
        }
    }
    let start = Instant::now();
    for _ in 0..iterations {
        unsafe {
            let ptr = arena.allocate(black_box(size));
            std::ptr::write_bytes(ptr, 0xAB, size.min(64));
            arena.free(black_box(ptr));
        }
    }
    let elapsed = start.elapsed();
    elapsed.as_nanos() as f64 / iterations as f64
}

/// Measure allocation with a long free list: every other block of a full
/// pool is freed first, so each allocate walks the fragmented list.
fn bench_fragmented_fit(iterations: usize) -> f64 {
    let mut arena = Arena::create(POOL_BYTES).expect("pool");
    let mut ptrs = Vec::new();
    unsafe {
        loop {
            let ptr = arena.allocate(128);
            if ptr.is_null() {
                break;
            }
            ptrs.push(ptr);
        }
        for ptr in ptrs.iter().skip(1).step_by(2) {
            arena.free(*ptr);
        }
    }

    let start = Instant::now();
    for _ in 0..iterations {
        unsafe {
            let ptr = arena.allocate(black_box(96));
            if !ptr.is_null() {
                arena.free(ptr);
            }
        }
    }
    let elapsed = start.elapsed();
    elapsed.as_nanos() as f64 / iterations as f64
}

/// Measure a reallocate ladder: one block grown and shrunk repeatedly.
fn bench_realloc_ladder(iterations: usize) -> f64 {
    let mut arena = Arena::create(POOL_BYTES).expect("pool");
    let sizes = [64usize, 256, 1024, 4096, 1024, 256];
    unsafe {
        let mut ptr = arena.allocate(64);
        let start = Instant::now();
        for i in 0..iterations {
            let next = arena.reallocate(black_box(ptr), sizes[i % sizes.len()]);
            if !next.is_null() {
                ptr = next;
            }
        }
        let elapsed = start.elapsed();
        arena.free(ptr);
        elapsed.as_nanos() as f64 / iterations as f64
    }
}

fn main() {
    let iterations = 100_000;

    println!("tagpool microbenchmarks ({} iterations each)", iterations);

    for &size in &[16usize, 64, 256, 1024, 16384] {
        let ns = bench_alloc_free(size, iterations);
        println!("alloc_free        size {:>6}  {:>8.1} ns/op", size, ns);
    }

    let ns = bench_fragmented_fit(iterations);
    println!("fragmented_fit    size {:>6}  {:>8.1} ns/op", 96, ns);

    let ns = bench_realloc_ladder(iterations);
    println!("realloc_ladder    mixed       {:>8.1} ns/op", ns);
}
