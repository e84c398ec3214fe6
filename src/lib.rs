//! Multistart and parallel coordination framework for stochastic local search.
//!
//! Provides the scheduling and concurrency substrate shared by restartable
//! local-search metaheuristics:
//!
//! - **Progress tracking**: a thread-safe registry of the best solution found
//!   across every copy of a logical search, with cooperative stop and
//!   found-optimum signals.
//! - **Restart schedules**: run-length sequence generators for successive
//!   restarts — constant, exponentially growing ("variable annealing length"),
//!   and Luby.
//! - **Annealing schedules**: temperature state machines for simulated
//!   annealing — linear and exponential cooling plus the self-adaptive
//!   Modified Lam schedule that retunes the cooling rate from observed
//!   acceptance statistics.
//! - **Searches**: the [`search::Metaheuristic`] capability interface, a
//!   concrete [`search::SimulatedAnnealer`], and restart drivers
//!   ([`multistart::Multistarter`], [`multistart::ParallelMultistarter`])
//!   that compose like any other search.
//!
//! # Architecture
//!
//! Candidate-solution representations, mutation operators, and cost functions
//! are consumer concerns, supplied through the traits in [`problem`]. Every
//! stateful component implements [`split::Split`]: a deep, independent copy
//! for use by another thread, sharing only the progress tracker. The tracker
//! is the single synchronized object; everything reachable from a split copy
//! is exclusively owned by that copy.

pub mod anneal;
pub mod error;
pub mod multistart;
pub mod problem;
pub mod restart;
pub mod search;
pub mod split;
pub mod tracker;
