//! Benchmarks for seenset
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use seenset::hash::{Fingerprint, HashFunction, Hashed, IndexStrategy};
use seenset::membership::{BloomFilter, DEFAULT_CAPACITY};
use seenset::traits::MembershipFilter;

const STRATEGIES: [(&str, IndexStrategy); 2] = [
    ("legacy", IndexStrategy::Legacy),
    ("xxh3", IndexStrategy::Xxh3),
];

fn filled<F: MembershipFilter>(mut filter: F, n: u64) -> F {
    for i in 0..n {
        filter.insert(&i.to_string());
    }
    filter
}

fn with_strategy(strategy: IndexStrategy) -> BloomFilter {
    BloomFilter::builder().strategy(strategy).build().unwrap()
}

// ============================================================================
// Hash Function Benchmarks
// ============================================================================

fn bench_hash(c: &mut Criterion) {
    let mut group = c.benchmark_group("hash_function");
    group.throughput(Throughput::Elements(1));

    group.bench_function("fingerprint_str", |b| {
        b.iter(|| black_box("https://example.com/some/longer/path").fingerprint());
    });

    group.bench_function("fingerprint_hashed", |b| {
        let value = Hashed(("tenant", 42_u64));
        b.iter(|| black_box(&value).fingerprint());
    });

    for (name, strategy) in STRATEGIES {
        group.bench_function(format!("index_{}", name), |b| {
            let f = HashFunction::with_strategy(DEFAULT_CAPACITY, 71, strategy);
            let mut h = 0i32;
            b.iter(|| {
                h = h.wrapping_add(0x9e37_79b9_u32 as i32);
                black_box(f.index_of(h))
            });
        });
    }

    group.finish();
}

// ============================================================================
// Bloom Filter Benchmarks
// ============================================================================

fn bench_bloom(c: &mut Criterion) {
    let mut group = c.benchmark_group("bloom_filter");
    group.throughput(Throughput::Elements(1));

    for (name, strategy) in STRATEGIES {
        group.bench_function(format!("insert_{}", name), |b| {
            let mut filter = with_strategy(strategy);
            let mut i = 0u64;
            b.iter(|| {
                filter.insert(&i.to_string());
                i = i.wrapping_add(1);
            });
        });

        group.bench_function(format!("query_hit_{}", name), |b| {
            let filter = filled(with_strategy(strategy), 100_000);
            let mut i = 0u64;
            b.iter(|| {
                let result = filter.query(&(i % 100_000).to_string());
                i = i.wrapping_add(1);
                black_box(result)
            });
        });

        group.bench_function(format!("query_miss_{}", name), |b| {
            let filter = filled(with_strategy(strategy), 100_000);
            let mut i = 1_000_000u64;
            b.iter(|| {
                let result = filter.query(&i.to_string());
                i = i.wrapping_add(1);
                black_box(result)
            });
        });
    }

    group.bench_function("bits_set", |b| {
        let filter = filled(BloomFilter::new(), 10_000);
        b.iter(|| black_box(filter.bits_set()));
    });

    group.finish();
}

// ============================================================================
// Main
// ============================================================================

criterion_group!(benches, bench_hash, bench_bloom);

criterion_main!(benches);
