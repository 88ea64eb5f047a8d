//! # Bloom Filter Benchmarks
//!
//! - Insert: O(k) hash computations
//! - Contains: O(k) hash computations + up to k bit lookups
//! - Calibration: constant time

use std::time::Duration;

use bloom_filter::{calculate_parameters, BloomFilter};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn generate_words(count: usize, seed: u64) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let len = rng.gen_range(4..=12);
            (0..len).map(|_| rng.gen_range(b'a'..=b'z') as char).collect()
        })
        .collect()
}

fn insert_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("bloom/insert");
    group.measurement_time(Duration::from_secs(5));

    for target in [0.1, 0.01, 0.0001] {
        group.bench_with_input(BenchmarkId::new("single_add", target), &target, |b, &p| {
            let mut filter = BloomFilter::new(10_000, p).expect("valid parameters");
            b.iter(|| filter.add(black_box("wordbloom")));
        });
    }

    let words = generate_words(10_000, 1);
    group.throughput(Throughput::Elements(words.len() as u64));
    group.bench_function("add_all_10000_words", |b| {
        b.iter(|| {
            let mut filter = BloomFilter::new(10_000, 0.01).expect("valid parameters");
            filter.add_all(black_box(&words));
            black_box(filter.bits_set())
        });
    });

    group.finish();
}

fn contains_operations(c: &mut Criterion) {
    let mut group = c.benchmark_group("bloom/contains");

    let present = generate_words(10_000, 2);
    let absent = generate_words(10_000, 3);
    let mut filter = BloomFilter::new(10_000, 0.01).expect("valid parameters");
    filter.add_all(&present);

    group.bench_function("contains_present", |b| {
        let target = &present[5_000];
        b.iter(|| black_box(filter.contains(black_box(target))))
    });

    group.bench_function("contains_absent", |b| {
        let target = &absent[5_000];
        b.iter(|| black_box(filter.contains(black_box(target))))
    });

    group.throughput(Throughput::Elements(absent.len() as u64));
    group.bench_function("scan_10000_absent", |b| {
        b.iter(|| absent.iter().filter(|w| filter.contains(w)).count())
    });

    group.finish();
}

fn calibration(c: &mut Criterion) {
    c.bench_function("bloom/calculate_parameters", |b| {
        b.iter(|| calculate_parameters(black_box(10_000), black_box(0.01)))
    });
}

criterion_group!(benches, insert_operations, contains_operations, calibration);
criterion_main!(benches);
