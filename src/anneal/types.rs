//! The annealing-schedule trait.

use crate::split::Split;
use rand::Rng;

/// Temperature state machine controlling simulated annealing's acceptance
/// criterion.
///
/// Lifecycle: construct, then [`init`](AnnealingSchedule::init) before the
/// first [`accept`](AnnealingSchedule::accept) of a run. Callers may re-init
/// per restart; implementations cache any constants derived from `max_evals`
/// so repeated calls with the same value are cheap.
///
/// The temperature is always strictly positive: schedules clamp it at a
/// small floor rather than letting it reach zero, which both avoids division
/// by zero in the Boltzmann probability and models "effectively frozen"
/// behavior.
pub trait AnnealingSchedule: Split {
    /// Resets dynamic state for a run of up to `max_evals` evaluations.
    fn init(&mut self, max_evals: usize);

    /// Decides whether to accept a move from `current_cost` to
    /// `neighbor_cost`.
    ///
    /// Improving or equal-cost moves are always accepted; worsening moves
    /// are accepted with probability
    /// `exp((current_cost - neighbor_cost) / temperature)`. The temperature
    /// state advances exactly once per call regardless of the decision.
    fn accept<R: Rng>(&mut self, neighbor_cost: f64, current_cost: f64, rng: &mut R) -> bool;
}

/// Metropolis decision at the given temperature. Shared by all schedules.
pub(super) fn metropolis<R: Rng>(
    neighbor_cost: f64,
    current_cost: f64,
    temperature: f64,
    rng: &mut R,
) -> bool {
    neighbor_cost <= current_cost
        || rng.random_range(0.0..1.0) < ((current_cost - neighbor_cost) / temperature).exp()
}
