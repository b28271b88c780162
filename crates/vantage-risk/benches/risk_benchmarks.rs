//! Benchmarks for the vantage-risk estimators.
//!
//! Run with: cargo bench -p vantage-risk

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::rngs::StdRng;
use rand::SeedableRng;

use vantage_risk::prelude::*;

// =============================================================================
// TEST DATA GENERATORS
// =============================================================================

/// Deterministic pseudo-random daily returns in roughly +/-3%.
fn create_test_returns(n: usize) -> Vec<f64> {
    (0..n)
        .map(|i| {
            let hash = (i as u64).wrapping_mul(6_364_136_223_846_793_005).rotate_left(17);
            (hash % 6_000) as f64 / 100_000.0 - 0.03
        })
        .collect()
}

// =============================================================================
// ESTIMATORS
// =============================================================================

fn bench_historical_var(c: &mut Criterion) {
    let mut group = c.benchmark_group("historical_var");

    for size in [250, 1_000, 10_000].iter() {
        let returns = create_test_returns(*size);

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &returns, |b, returns| {
            b.iter(|| historical_var(black_box(returns), black_box(0.95)))
        });
    }
    group.finish();
}

fn bench_historical_cvar(c: &mut Criterion) {
    let mut group = c.benchmark_group("historical_cvar");

    for size in [250, 1_000, 10_000].iter() {
        let returns = create_test_returns(*size);

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &returns, |b, returns| {
            b.iter(|| historical_cvar(black_box(returns), black_box(0.99)))
        });
    }
    group.finish();
}

fn bench_monte_carlo_var(c: &mut Criterion) {
    let returns = create_test_returns(250);
    let mut group = c.benchmark_group("monte_carlo_var");

    for simulations in [1_000, 10_000, 100_000].iter() {
        group.throughput(Throughput::Elements(*simulations as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(simulations),
            simulations,
            |b, &simulations| {
                let mut rng = StdRng::seed_from_u64(42);
                b.iter(|| monte_carlo_var(black_box(&returns), 0.95, simulations, &mut rng))
            },
        );
    }
    group.finish();
}

fn bench_full_report(c: &mut Criterion) {
    let returns = create_test_returns(250);
    let calc = RiskCalculator::new(RiskConfig::new(0.95).with_seed(42)).unwrap();

    c.bench_function("risk_report_250d", |b| {
        b.iter(|| calc.report(black_box(&returns)))
    });
}

// =============================================================================
// CRITERION GROUPS
// =============================================================================

criterion_group!(
    estimators,
    bench_historical_var,
    bench_historical_cvar,
    bench_monte_carlo_var,
);

criterion_group!(report, bench_full_report,);

criterion_main!(estimators, report);
