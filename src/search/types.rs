//! Capability interfaces implemented by concrete searches.

use crate::problem::SolutionCostPair;
use crate::split::Split;
use crate::tracker::ProgressTracker;
use std::sync::Arc;

/// A stochastic search that executes bounded runs and reports progress
/// through a shared [`ProgressTracker`].
///
/// Implementors include hill climbers, annealers, stochastic samplers, and
/// the restart drivers in [`crate::multistart`], which implement this trait
/// themselves so that drivers compose and parallelize like any other search.
///
/// # Split semantics
///
/// [`Split::split`] must deep-copy all non-thread-safe internal state
/// (operators, schedules, random streams, counters reset to zero) while
/// sharing the same tracker, so the copy can run on another thread.
pub trait Metaheuristic: Split {
    /// The candidate-solution representation type.
    type Solution: Clone;

    /// Executes one bounded, fresh-start run of up to `run_length` units of
    /// work and returns the end-of-run best, or `None` if the tracker
    /// already reports a terminal state at call time.
    ///
    /// The terminal check happens before the run starts, never mid-run.
    /// Side effect: the shared tracker is updated whenever the run improves
    /// on the tracked best.
    fn optimize(&mut self, run_length: usize) -> Option<SolutionCostPair<Self::Solution>>;

    /// The shared progress tracker.
    fn tracker(&self) -> &Arc<ProgressTracker<Self::Solution>>;

    /// Replaces the shared tracker, e.g. to join this search to an existing
    /// parallel batch.
    fn set_tracker(&mut self, tracker: Arc<ProgressTracker<Self::Solution>>);

    /// Cumulative count of elementary work units (candidate evaluations)
    /// across all runs of this specific copy. Not shared across splits.
    fn total_run_length(&self) -> u64;
}

/// A search that can resume from its incumbent solution instead of starting
/// fresh.
pub trait ReoptimizableMetaheuristic: Metaheuristic {
    /// Like [`Metaheuristic::optimize`], but resumes from the current
    /// incumbent solution (falling back to a fresh start if no run has
    /// happened yet).
    fn reoptimize(&mut self, run_length: usize) -> Option<SolutionCostPair<Self::Solution>>;
}
