//! Multistart drivers: sequential restarts and parallel fan-out.
//!
//! A [`Multistarter`] drives repeated runs of an underlying search, pulling
//! each run's length from a [`crate::restart::RestartSchedule`] and keeping
//! the best result of the batch. A [`ParallelMultistarter`] runs split
//! copies of a search on rayon worker threads, all sharing one progress
//! tracker. Both drivers implement [`crate::search::Metaheuristic`]
//! themselves, so they nest and compose like any other search.

mod parallel;
mod runner;

pub use parallel::ParallelMultistarter;
pub use runner::Multistarter;
