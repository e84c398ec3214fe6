//! Thread-safe best-of-search registry.

use crate::problem::{Cost, SolutionCostPair};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant};

struct BestRecord<T> {
    cost: Cost,
    solution: T,
    found_at: Duration,
}

/// Thread-safe record of the best solution found across all split copies of
/// a logical search, plus cooperative termination flags.
///
/// Exactly one tracker is shared (via `Arc`) by every copy of a search.
/// The (cost, solution) pair lives under a single lock, so a reader never
/// observes a cost that does not correspond to the stored solution. The
/// stop and found-best flags are independent atomics; once set they are
/// never cleared.
///
/// # Cancellation granularity
///
/// The flags are a cooperative signal: workers check them before starting a
/// run, never mid-run. Calling [`stop`](ProgressTracker::stop) therefore
/// prevents new runs from starting but does not preempt runs in flight. Any
/// wall-clock budget must be enforced by a caller invoking `stop` from
/// outside.
pub struct ProgressTracker<T> {
    start: Instant,
    best: Mutex<Option<BestRecord<T>>>,
    found_best: AtomicBool,
    stopped: AtomicBool,
}

impl<T: Clone> ProgressTracker<T> {
    /// Creates an empty tracker. The elapsed-time anchor is set here.
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
            best: Mutex::new(None),
            found_best: AtomicBool::new(false),
            stopped: AtomicBool::new(false),
        }
    }

    /// Records `solution` as the new best if `cost` strictly improves on the
    /// stored best (or none is stored yet). Stores an owned copy of the
    /// solution, never a borrow. Returns whether the update improved.
    ///
    /// If `known_optimal` is true and the update improves, the found-best
    /// flag is set and all workers will decline to start further runs.
    ///
    /// Safe to call concurrently from any number of worker threads; the best
    /// cost is monotonically non-increasing regardless of interleaving.
    pub fn update(&self, cost: Cost, solution: &T, known_optimal: bool) -> bool {
        let mut guard = self.lock_best();
        let improved = guard.as_ref().is_none_or(|r| cost < r.cost);
        if improved {
            *guard = Some(BestRecord {
                cost,
                solution: solution.clone(),
                found_at: self.start.elapsed(),
            });
            if known_optimal {
                self.found_best.store(true, Ordering::Relaxed);
            }
        }
        improved
    }

    /// Returns an atomic snapshot of the best (solution, cost) pair, or
    /// `None` if no update has occurred yet. Never a torn read.
    pub fn get_solution_cost_pair(&self) -> Option<SolutionCostPair<T>> {
        self.lock_best()
            .as_ref()
            .map(|r| SolutionCostPair::new(r.solution.clone(), r.cost))
    }

    /// The best cost recorded so far, if any.
    pub fn best_cost(&self) -> Option<Cost> {
        self.lock_best().as_ref().map(|r| r.cost)
    }

    /// True if the most recently stored cost carries the integer
    /// representation. False while the tracker is empty.
    pub fn contains_int_cost(&self) -> bool {
        self.lock_best()
            .as_ref()
            .is_some_and(|r| r.cost.is_integer())
    }

    /// Elapsed time from tracker construction to the most recent improving
    /// update, if any.
    pub fn time_best_found(&self) -> Option<Duration> {
        self.lock_best().as_ref().map(|r| r.found_at)
    }

    /// Signals all workers to stop starting new runs. Idempotent.
    pub fn stop(&self) {
        self.stopped.store(true, Ordering::Relaxed);
    }

    /// True once [`stop`](ProgressTracker::stop) has been called.
    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::Relaxed)
    }

    /// True once an update carrying a known-optimal cost has been recorded.
    pub fn did_find_best(&self) -> bool {
        self.found_best.load(Ordering::Relaxed)
    }

    /// True if either termination flag is set.
    pub fn is_terminal(&self) -> bool {
        self.is_stopped() || self.did_find_best()
    }

    /// Time since tracker construction. Monotonic, never negative.
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    fn lock_best(&self) -> std::sync::MutexGuard<'_, Option<BestRecord<T>>> {
        // A panicked holder cannot leave the record torn: the pair is written
        // in one assignment. Recover instead of propagating the poison.
        self.best.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T: Clone> Default for ProgressTracker<T> {
    fn default() -> Self {
        Self::new()
    }
}
