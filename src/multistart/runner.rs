//! Sequential multistart driver.

use crate::problem::SolutionCostPair;
use crate::restart::RestartSchedule;
use crate::search::{Metaheuristic, ReoptimizableMetaheuristic};
use crate::split::Split;
use crate::tracker::ProgressTracker;
use std::sync::Arc;

/// Drives repeated runs of an underlying search, pulling run lengths from a
/// restart schedule and returning the best result of the batch.
///
/// As a [`Metaheuristic`], `optimize(n)` means "perform up to `n` restarts":
/// before each restart the shared tracker's terminal flags are checked, then
/// the next run length is pulled from the schedule and one bounded run is
/// executed. Absent per-restart results (terminal tracker) are excluded from
/// the best-of-batch; if no restart produced a result the whole call returns
/// `None`.
///
/// The schedule's cursor deliberately persists across calls — run lengths
/// keep advancing until [`reset`](Multistarter::reset) is called.
///
/// When the underlying search is reoptimizable, the multistarter is too:
/// [`ReoptimizableMetaheuristic::reoptimize`] runs the same loop over
/// `reoptimize`, resuming each restart from the incumbent rather than a
/// fresh random start.
pub struct Multistarter<M, R> {
    search: M,
    schedule: R,
}

impl<M, R> Multistarter<M, R>
where
    M: Metaheuristic,
    R: RestartSchedule,
{
    /// Creates a multistarter over `search` drawing run lengths from
    /// `schedule`.
    pub fn new(search: M, schedule: R) -> Self {
        Self { search, schedule }
    }

    /// Rewinds the restart schedule to the start of its sequence. The
    /// underlying search is untouched.
    pub fn reset(&mut self) {
        self.schedule.reset();
    }

    /// The underlying search.
    pub fn search(&self) -> &M {
        &self.search
    }
}

/// Keeps the better of an accumulated best and a new batch result,
/// comparing by cost only and keeping the earlier result on ties.
fn best_of<T>(
    best: Option<SolutionCostPair<T>>,
    pair: SolutionCostPair<T>,
) -> Option<SolutionCostPair<T>> {
    match best {
        Some(b) if b <= pair => Some(b),
        _ => Some(pair),
    }
}

impl<M, R> Metaheuristic for Multistarter<M, R>
where
    M: Metaheuristic,
    R: RestartSchedule,
{
    type Solution = M::Solution;

    fn optimize(&mut self, num_restarts: usize) -> Option<SolutionCostPair<M::Solution>> {
        let mut best = None;
        for _ in 0..num_restarts {
            if self.search.tracker().is_terminal() {
                break;
            }
            let run_length = self.schedule.next_run_length();
            if let Some(pair) = self.search.optimize(run_length) {
                best = best_of(best, pair);
            }
        }
        best
    }

    fn tracker(&self) -> &Arc<ProgressTracker<M::Solution>> {
        self.search.tracker()
    }

    fn set_tracker(&mut self, tracker: Arc<ProgressTracker<M::Solution>>) {
        self.search.set_tracker(tracker);
    }

    fn total_run_length(&self) -> u64 {
        self.search.total_run_length()
    }
}

impl<M, R> ReoptimizableMetaheuristic for Multistarter<M, R>
where
    M: ReoptimizableMetaheuristic,
    R: RestartSchedule,
{
    fn reoptimize(&mut self, num_restarts: usize) -> Option<SolutionCostPair<M::Solution>> {
        let mut best = None;
        for _ in 0..num_restarts {
            if self.search.tracker().is_terminal() {
                break;
            }
            let run_length = self.schedule.next_run_length();
            if let Some(pair) = self.search.reoptimize(run_length) {
                best = best_of(best, pair);
            }
        }
        best
    }
}

impl<M, R> Split for Multistarter<M, R>
where
    M: Metaheuristic,
    R: RestartSchedule,
{
    fn split(&self) -> Self {
        Self {
            search: self.search.split(),
            schedule: self.schedule.split(),
        }
    }
}
