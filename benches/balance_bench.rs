//! Criterion benchmarks for the bipartition engine.
//!
//! Uses seeded synthetic rosters so runs are comparable; the engine
//! itself is deterministic and takes no randomness.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use team_balance::balance::{BalanceConfig, Balancer};

fn synthetic_powers(n: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| rng.random_range(0.0..100.0)).collect()
}

fn bench_balance_uniform(c: &mut Criterion) {
    let mut group = c.benchmark_group("balance_uniform");

    for &n in &[8, 16, 32, 64, 128] {
        let powers = synthetic_powers(n, 42);
        let config = BalanceConfig::default();
        group.bench_with_input(
            BenchmarkId::from_parameter(n),
            &(powers, config),
            |b, (powers, config)| {
                b.iter(|| {
                    let result = Balancer::run(black_box(powers), black_box(config));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

fn bench_balance_seed_only(c: &mut Criterion) {
    // Greedy seed alone (refinement capped out) as a baseline against
    // the full pipeline.
    let mut group = c.benchmark_group("balance_seed_only");

    for &n in &[32, 128] {
        let powers = synthetic_powers(n, 42);
        let config = BalanceConfig::default().with_max_passes(0);
        group.bench_with_input(
            BenchmarkId::from_parameter(n),
            &(powers, config),
            |b, (powers, config)| {
                b.iter(|| {
                    let result = Balancer::run(black_box(powers), black_box(config));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_balance_uniform, bench_balance_seed_only);
criterion_main!(benches);
