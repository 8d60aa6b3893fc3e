//! Criterion benchmarks for the Monte Carlo engine.
//!
//! Benchmarks cover:
//! - Normal draw generation
//! - Antithetic European pricing at several path counts
//! - Two-point diagnostic path generation

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pricer_models::instruments::{ContractParameters, OptionType};
use pricer_pricing::mc::{MonteCarloPricer, SimulationRequest};
use pricer_pricing::rng::PricerRng;

fn standard_params() -> ContractParameters<f64> {
    ContractParameters::new(100.0, 100.0, 1.0, 0.05, 0.2).unwrap()
}

/// Benchmark filling a buffer with standard normals.
fn bench_fill_normal(c: &mut Criterion) {
    let mut group = c.benchmark_group("fill_normal");

    for n in [1_000, 10_000, 100_000] {
        let mut buffer = vec![0.0; n];
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            let mut rng = PricerRng::from_seed(42);
            b.iter(|| rng.fill_normal(black_box(&mut buffer)));
        });
    }

    group.finish();
}

/// Benchmark the antithetic estimator.
fn bench_simulate(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulate");
    let pricer = MonteCarloPricer::default();

    for n_paths in [1_000, 10_000, 100_000] {
        let request = SimulationRequest::new(standard_params(), OptionType::Call, n_paths).unwrap();
        group.bench_with_input(BenchmarkId::new("call", n_paths), &request, |b, request| {
            b.iter(|| pricer.simulate(black_box(request)));
        });
    }

    group.finish();
}

/// Benchmark diagnostic path generation.
fn bench_generate_paths(c: &mut Criterion) {
    let request = SimulationRequest::new(standard_params(), OptionType::Put, 10_000).unwrap();

    c.bench_function("generate_paths_10000", |b| {
        let mut rng = PricerRng::from_seed(7);
        b.iter(|| MonteCarloPricer::generate_paths_with(black_box(&request), &mut rng));
    });
}

criterion_group!(benches, bench_fill_normal, bench_simulate, bench_generate_paths);
criterion_main!(benches);
