//! Simulated annealing over an arbitrary candidate representation.

use crate::anneal::AnnealingSchedule;
use crate::problem::{Cost, Initializer, MutationOperator, Problem, SolutionCostPair};
use crate::search::{Metaheuristic, ReoptimizableMetaheuristic};
use crate::split::Split;
use crate::tracker::ProgressTracker;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::sync::Arc;

/// Simulated annealing search composed from a problem, an initializer, a
/// mutation operator, and an annealing schedule.
///
/// The problem is shared (immutably) across split copies; the operators,
/// schedule, and random stream are deep-copied per copy; the progress
/// tracker is the single shared handle.
///
/// # Usage
///
/// ```ignore
/// let annealer = SimulatedAnnealer::new(problem, initializer, mutation, ModifiedLam::new());
/// let result = annealer.optimize(100_000);
/// ```
pub struct SimulatedAnnealer<P, I, M, S>
where
    P: Problem,
    I: Initializer<P::Solution>,
    M: MutationOperator<P::Solution>,
    S: AnnealingSchedule,
{
    problem: Arc<P>,
    initializer: I,
    mutation: M,
    schedule: S,
    tracker: Arc<ProgressTracker<P::Solution>>,
    rng: StdRng,
    incumbent: Option<(P::Solution, Cost)>,
    total_run_length: u64,
}

impl<P, I, M, S> SimulatedAnnealer<P, I, M, S>
where
    P: Problem,
    I: Initializer<P::Solution>,
    M: MutationOperator<P::Solution>,
    S: AnnealingSchedule,
{
    /// Creates an annealer with a fresh progress tracker and an independent
    /// random stream.
    pub fn new(problem: Arc<P>, initializer: I, mutation: M, schedule: S) -> Self {
        Self {
            problem,
            initializer,
            mutation,
            schedule,
            tracker: Arc::new(ProgressTracker::new()),
            rng: StdRng::from_rng(&mut rand::rng()),
            incumbent: None,
            total_run_length: 0,
        }
    }

    /// Seeds this copy's random stream for reproducible single-threaded
    /// runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// The problem being optimized.
    pub fn problem(&self) -> &Arc<P> {
        &self.problem
    }

    /// One bounded annealing run. `fresh` discards the incumbent and starts
    /// from the initializer; otherwise the incumbent is resumed if present.
    fn anneal(&mut self, run_length: usize, fresh: bool) -> Option<SolutionCostPair<P::Solution>> {
        if self.tracker.is_terminal() {
            return None;
        }

        if fresh {
            self.incumbent = None;
        }
        let (mut current, mut current_cost) = match self.incumbent.take() {
            Some(pair) => pair,
            None => {
                let candidate = self.initializer.create_candidate_solution(&mut self.rng);
                let cost = self.problem.cost(&candidate);
                self.total_run_length += 1;
                (candidate, cost)
            }
        };

        let mut best = current.clone();
        let mut best_cost = current_cost;
        self.tracker
            .update(best_cost, &best, self.problem.is_min_cost(best_cost));

        self.schedule.init(run_length);

        for _ in 0..run_length {
            if self.problem.is_min_cost(best_cost) {
                break;
            }

            let mut neighbor = current.clone();
            self.mutation.mutate(&mut neighbor, &mut self.rng);
            let neighbor_cost = self.problem.cost(&neighbor);
            self.total_run_length += 1;

            if self
                .schedule
                .accept(neighbor_cost.to_f64(), current_cost.to_f64(), &mut self.rng)
            {
                current = neighbor;
                current_cost = neighbor_cost;
                if current_cost < best_cost {
                    best = current.clone();
                    best_cost = current_cost;
                    self.tracker
                        .update(best_cost, &best, self.problem.is_min_cost(best_cost));
                }
            }
        }

        self.incumbent = Some((current, current_cost));
        Some(SolutionCostPair::new(best, best_cost))
    }
}

impl<P, I, M, S> Metaheuristic for SimulatedAnnealer<P, I, M, S>
where
    P: Problem,
    I: Initializer<P::Solution>,
    M: MutationOperator<P::Solution>,
    S: AnnealingSchedule,
{
    type Solution = P::Solution;

    fn optimize(&mut self, run_length: usize) -> Option<SolutionCostPair<P::Solution>> {
        self.anneal(run_length, true)
    }

    fn tracker(&self) -> &Arc<ProgressTracker<P::Solution>> {
        &self.tracker
    }

    fn set_tracker(&mut self, tracker: Arc<ProgressTracker<P::Solution>>) {
        self.tracker = tracker;
    }

    fn total_run_length(&self) -> u64 {
        self.total_run_length
    }
}

impl<P, I, M, S> ReoptimizableMetaheuristic for SimulatedAnnealer<P, I, M, S>
where
    P: Problem,
    I: Initializer<P::Solution>,
    M: MutationOperator<P::Solution>,
    S: AnnealingSchedule,
{
    fn reoptimize(&mut self, run_length: usize) -> Option<SolutionCostPair<P::Solution>> {
        self.anneal(run_length, false)
    }
}

impl<P, I, M, S> Split for SimulatedAnnealer<P, I, M, S>
where
    P: Problem,
    I: Initializer<P::Solution>,
    M: MutationOperator<P::Solution>,
    S: AnnealingSchedule,
{
    fn split(&self) -> Self {
        Self {
            problem: Arc::clone(&self.problem),
            initializer: self.initializer.split(),
            mutation: self.mutation.split(),
            schedule: self.schedule.split(),
            tracker: Arc::clone(&self.tracker),
            rng: StdRng::from_rng(&mut rand::rng()),
            incumbent: None,
            total_run_length: 0,
        }
    }
}
