//! Shared progress tracking across all copies of a logical search.

mod progress;

pub use progress::ProgressTracker;
