//! The `Split` capability for thread-isolated copies.

/// Produces an independent copy of a stateful component for use by another
/// worker thread.
///
/// `Split` differs from [`Clone`] in two ways:
///
/// - All per-thread mutable state (cursors, counters, temperature state) is
///   reset or deep-copied, never shared. The only intentionally shared handle
///   is a search's progress tracker.
/// - Components that use randomness must derive a statistically independent
///   random stream for the copy, so that parallel workers do not trace
///   correlated trajectories.
///
/// # Examples
///
/// ```
/// use multistart::restart::{RestartSchedule, VariableAnnealingLength};
/// use multistart::split::Split;
///
/// let mut a = VariableAnnealingLength::new();
/// a.next_run_length();
/// let mut b = a.split();
/// // The copy starts its own schedule from the beginning.
/// assert_eq!(b.next_run_length(), 1000);
/// assert_eq!(a.next_run_length(), 2000);
/// ```
pub trait Split {
    /// Returns an independent copy suitable for concurrent use.
    fn split(&self) -> Self;
}
