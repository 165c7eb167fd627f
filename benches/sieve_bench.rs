//! Benchmarks for prime-stride
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn benchmark_is_prime(c: &mut Criterion) {
    use prime_stride::sieve::primality::is_prime;

    c.bench_function("is_prime_large_prime", |b| {
        b.iter(|| black_box(is_prime(black_box(999_999_937))))
    });

    c.bench_function("is_prime_small_factor", |b| {
        b.iter(|| black_box(is_prime(black_box(999_999_935))))
    });
}

fn benchmark_partition(c: &mut Criterion) {
    use prime_stride::sieve::partition::{run_partition, SieveRange};

    c.bench_function("run_partition_100k", |b| {
        let range = SieveRange::new(100_000);
        b.iter(|| black_box(run_partition(1, 4, range)))
    });
}

fn benchmark_full_sieve(c: &mut Criterion) {
    use prime_stride::config::SieveConfig;
    use prime_stride::sieve::SieveCoordinator;

    c.bench_function("sieve_1m_4_workers", |b| {
        let config = SieveConfig {
            limit: 1_000_000,
            worker_count: 4,
            output_path: "primes.txt".into(),
            show_progress: false,
            verbose: false,
        };
        b.iter(|| {
            let result = SieveCoordinator::new(&config).run().unwrap();
            black_box(result.table.len())
        })
    });
}

criterion_group!(
    benches,
    benchmark_is_prime,
    benchmark_partition,
    benchmark_full_sieve
);
criterion_main!(benches);
