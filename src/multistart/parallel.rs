//! Parallel multistart fan-out.

use crate::error::ConfigError;
use crate::problem::SolutionCostPair;
use crate::search::{Metaheuristic, ReoptimizableMetaheuristic};
use crate::split::Split;
use crate::tracker::ProgressTracker;
use rayon::prelude::*;
use std::cmp::Ordering;
use std::sync::Arc;

/// Runs split copies of a search on parallel worker threads, all sharing
/// one progress tracker, and merges the per-copy best results.
///
/// Each call to `optimize` fans the copies out on rayon; every copy
/// executes its own complete, blocking run. Cancellation stays cooperative:
/// a copy checks the shared tracker before starting its run, so
/// [`ProgressTracker::stop`] prevents new runs but never preempts one in
/// flight.
///
/// Because [`crate::multistart::Multistarter`] is itself a
/// [`Metaheuristic`], wrapping one gives each worker thread its own restart
/// schedule and search copy while the tracker stays shared — the standard
/// parallel restart setup.
pub struct ParallelMultistarter<M: Metaheuristic> {
    instances: Vec<M>,
}

impl<M> ParallelMultistarter<M>
where
    M: Metaheuristic,
{
    /// Creates a parallel driver over `threads` copies of `search` (the
    /// original plus `threads - 1` splits, all sharing its tracker).
    ///
    /// # Errors
    ///
    /// [`ConfigError::Zero`] if `threads` is 0.
    pub fn new(search: M, threads: usize) -> Result<Self, ConfigError> {
        if threads == 0 {
            return Err(ConfigError::Zero { name: "threads" });
        }
        let mut instances = Vec::with_capacity(threads);
        for _ in 1..threads {
            instances.push(search.split());
        }
        instances.push(search);
        Ok(Self { instances })
    }

    /// Number of parallel search copies.
    pub fn threads(&self) -> usize {
        self.instances.len()
    }
}

fn merge<T>(results: Vec<SolutionCostPair<T>>) -> Option<SolutionCostPair<T>> {
    results
        .into_iter()
        .min_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal))
}

impl<M> Metaheuristic for ParallelMultistarter<M>
where
    M: Metaheuristic + Send,
    M::Solution: Send,
{
    type Solution = M::Solution;

    fn optimize(&mut self, run_length: usize) -> Option<SolutionCostPair<M::Solution>> {
        let results: Vec<_> = self
            .instances
            .par_iter_mut()
            .filter_map(|search| search.optimize(run_length))
            .collect();
        merge(results)
    }

    fn tracker(&self) -> &Arc<ProgressTracker<M::Solution>> {
        self.instances[0].tracker()
    }

    fn set_tracker(&mut self, tracker: Arc<ProgressTracker<M::Solution>>) {
        for search in &mut self.instances {
            search.set_tracker(Arc::clone(&tracker));
        }
    }

    fn total_run_length(&self) -> u64 {
        self.instances.iter().map(|s| s.total_run_length()).sum()
    }
}

impl<M> ReoptimizableMetaheuristic for ParallelMultistarter<M>
where
    M: ReoptimizableMetaheuristic + Send,
    M::Solution: Send,
{
    fn reoptimize(&mut self, run_length: usize) -> Option<SolutionCostPair<M::Solution>> {
        let results: Vec<_> = self
            .instances
            .par_iter_mut()
            .filter_map(|search| search.reoptimize(run_length))
            .collect();
        merge(results)
    }
}

impl<M> Split for ParallelMultistarter<M>
where
    M: Metaheuristic,
{
    fn split(&self) -> Self {
        Self {
            instances: self.instances.iter().map(Split::split).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::anneal::ModifiedLam;
    use crate::multistart::Multistarter;
    use crate::problem::{Cost, Initializer, MutationOperator, Problem};
    use crate::restart::VariableAnnealingLength;
    use crate::search::SimulatedAnnealer;

    use rand::Rng;

    struct Quadratic;

    impl Problem for Quadratic {
        type Solution = i64;

        fn cost(&self, x: &i64) -> Cost {
            Cost::Int(x * x)
        }

        fn min_cost(&self) -> Option<Cost> {
            Some(Cost::Int(0))
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
            rng.random_range(-10_000..=10_000)
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

    fn multistarter(
    ) -> Multistarter<
        SimulatedAnnealer<Quadratic, UniformInit, StepMutation, ModifiedLam>,
        VariableAnnealingLength,
    > {
        let annealer = SimulatedAnnealer::new(
            Arc::new(Quadratic),
            UniformInit,
            StepMutation,
            ModifiedLam::new(),
        );
        Multistarter::new(annealer, VariableAnnealingLength::new())
    }

    #[test]
    fn test_rejects_zero_threads() {
        assert_eq!(
            ParallelMultistarter::new(multistarter(), 0).err(),
            Some(ConfigError::Zero { name: "threads" })
        );
    }

    #[test]
    fn test_copies_share_one_tracker() {
        let parallel = ParallelMultistarter::new(multistarter(), 4).unwrap();
        assert_eq!(parallel.threads(), 4);
        let tracker = Arc::clone(parallel.tracker());
        for search in &parallel.instances {
            assert!(Arc::ptr_eq(search.tracker(), &tracker));
        }
    }

    #[test]
    fn test_parallel_batch_finds_optimum() {
        let mut parallel = ParallelMultistarter::new(multistarter(), 4).unwrap();
        // 8 restarts per worker, growing run lengths.
        let best = parallel.optimize(8).unwrap();
        assert_eq!(best.cost(), Cost::Int(0), "x^2 minimum is 0");
        assert!(parallel.tracker().did_find_best());
        // The merged result is also the tracked best.
        assert_eq!(parallel.tracker().best_cost(), Some(Cost::Int(0)));
        assert!(parallel.total_run_length() > 0);
    }

    #[test]
    fn test_stopped_tracker_yields_no_result() {
        let mut parallel = ParallelMultistarter::new(multistarter(), 4).unwrap();
        parallel.tracker().stop();
        assert!(parallel.optimize(8).is_none());
        assert_eq!(parallel.total_run_length(), 0);
    }

    #[test]
    fn test_split_preserves_sharing() {
        let parallel = ParallelMultistarter::new(multistarter(), 2).unwrap();
        let copy = parallel.split();
        assert_eq!(copy.threads(), 2);
        assert!(Arc::ptr_eq(parallel.tracker(), copy.tracker()));
    }

    #[test]
    fn test_set_tracker_rewires_all_copies() {
        let mut a = ParallelMultistarter::new(multistarter(), 3).unwrap();
        let b = ParallelMultistarter::new(multistarter(), 3).unwrap();
        a.set_tracker(Arc::clone(b.tracker()));
        for search in &a.instances {
            assert!(Arc::ptr_eq(search.tracker(), b.tracker()));
        }
    }

    #[test]
    fn test_parallel_reoptimize_resumes_workers() {
        let mut parallel = ParallelMultistarter::new(multistarter(), 2).unwrap();
        let first = parallel.reoptimize(2);
        assert!(first.is_some());
        let tracked = parallel.tracker().best_cost().unwrap();
        assert!(tracked <= first.unwrap().cost());
    }
}
