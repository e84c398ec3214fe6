//! Criterion benchmarks for the multistart framework.
//!
//! Uses a synthetic quadratic problem to measure pure framework overhead
//! (schedule bookkeeping, tracker synchronization, restart loop) independent
//! of any domain.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use multistart::anneal::{ExponentialCooling, ModifiedLam};
use multistart::multistart::{Multistarter, ParallelMultistarter};
use multistart::problem::{Cost, Initializer, MutationOperator, Problem};
use multistart::restart::VariableAnnealingLength;
use multistart::search::{Metaheuristic, SimulatedAnnealer};
use multistart::split::Split;
use rand::Rng;
use std::sync::Arc;

// ===========================================================================
// Quadratic: minimize x^2 over integers
// ===========================================================================

struct Quadratic;

impl Problem for Quadratic {
    type Solution = i64;

    fn cost(&self, x: &i64) -> Cost {
        Cost::Int(x * x)
    }
}

struct UniformInit;

impl Split for UniformInit {
    fn split(&self) -> Self {
        UniformInit
    }
}

impl Initializer<i64> for UniformInit {
    fn create_candidate_solution<R: Rng>(&mut self, rng: &mut R) -> i64 {
        rng.random_range(-1000..=1000)
    }
}

struct StepMutation;

impl Split for StepMutation {
    fn split(&self) -> Self {
        StepMutation
    }
}

impl MutationOperator<i64> for StepMutation {
    fn mutate<R: Rng>(&mut self, candidate: &mut i64, rng: &mut R) {
        *candidate += rng.random_range(-3i64..=3);
    }
}

fn bench_annealing_schedules(c: &mut Criterion) {
    let mut group = c.benchmark_group("annealer");

    group.bench_function("modified_lam_10k", |b| {
        b.iter(|| {
            let mut search = SimulatedAnnealer::new(
                Arc::new(Quadratic),
                UniformInit,
                StepMutation,
                ModifiedLam::new(),
            )
            .with_seed(42);
            black_box(search.optimize(10_000))
        })
    });

    group.bench_function("exponential_10k", |b| {
        b.iter(|| {
            let mut search = SimulatedAnnealer::new(
                Arc::new(Quadratic),
                UniformInit,
                StepMutation,
                ExponentialCooling::new(10.0, 0.999, 10).unwrap(),
            )
            .with_seed(42);
            black_box(search.optimize(10_000))
        })
    });

    group.finish();
}

fn bench_multistart(c: &mut Criterion) {
    let mut group = c.benchmark_group("multistart");

    group.bench_function("sequential_8_restarts", |b| {
        b.iter(|| {
            let annealer = SimulatedAnnealer::new(
                Arc::new(Quadratic),
                UniformInit,
                StepMutation,
                ModifiedLam::new(),
            )
            .with_seed(42);
            let mut driver = Multistarter::new(annealer, VariableAnnealingLength::new());
            black_box(driver.optimize(8))
        })
    });

    for threads in [2usize, 4] {
        group.bench_with_input(
            BenchmarkId::new("parallel_8_restarts", threads),
            &threads,
            |b, &threads| {
                b.iter(|| {
                    let annealer = SimulatedAnnealer::new(
                        Arc::new(Quadratic),
                        UniformInit,
                        StepMutation,
                        ModifiedLam::new(),
                    );
                    let driver =
                        Multistarter::new(annealer, VariableAnnealingLength::new());
                    let mut parallel = ParallelMultistarter::new(driver, threads).unwrap();
                    black_box(parallel.optimize(8))
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_annealing_schedules, bench_multistart);
criterion_main!(benches);
