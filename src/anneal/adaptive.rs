//! Self-adaptive Modified Lam annealing schedule.

use super::types::{metropolis, AnnealingSchedule};
use crate::split::Split;
use rand::Rng;

/// Smoothing factor for the observed acceptance rate.
const RATE_SMOOTHING: f64 = 0.998;

/// Per-decision temperature adjustment factor.
const TEMPERATURE_ADJUSTMENT: f64 = 0.999;

/// Target acceptance rate held during the middle phase of a run.
const MID_PHASE_TARGET: f64 = 0.44;

/// The self-adaptive Modified Lam annealing schedule.
///
/// Instead of following a fixed cooling curve, this schedule tracks an
/// exponentially smoothed observed acceptance rate and steers the
/// temperature toward a target rate that follows the Modified Lam curve
/// over the planned run length (Lam & Delosme 1988, as restated by
/// Boyan 1998):
///
/// - first 15% of evaluations: the target decays geometrically from 1.0
///   toward 0.44;
/// - next 50%: held at 0.44;
/// - final 35%: decays geometrically from 0.44 toward 0.
///
/// When the observed rate exceeds the target the temperature is multiplied
/// by 0.999 (cool); otherwise it is divided by 0.999 (reheat). The geometric
/// decay factors are derived once per [`init`](AnnealingSchedule::init) with
/// a single exponentiation each and then applied incrementally, keeping each
/// `accept` call O(1); they are cached keyed on the last-seen `max_evals`.
///
/// This schedule is parameter-free: it needs no tuning beyond the run
/// length passed to `init`.
#[derive(Debug, Clone)]
pub struct ModifiedLam {
    temperature: f64,
    accept_rate: f64,
    target_rate: f64,
    evals: usize,

    // Derived from max_evals at init, cached across re-inits.
    cached_max_evals: usize,
    phase1_end: usize,
    phase2_end: usize,
    phase1_decay: f64,
    phase3_decay: f64,
}

impl ModifiedLam {
    /// Creates the schedule. Dynamic state is established by `init`.
    pub fn new() -> Self {
        Self {
            temperature: 0.5,
            accept_rate: 0.5,
            target_rate: 1.0,
            evals: 0,
            cached_max_evals: 0,
            phase1_end: 0,
            phase2_end: 0,
            phase1_decay: 1.0,
            phase3_decay: 1.0,
        }
    }

    /// The current temperature.
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// The exponentially smoothed observed acceptance rate.
    pub fn acceptance_rate(&self) -> f64 {
        self.accept_rate
    }

    /// The current target acceptance rate.
    pub fn target_rate(&self) -> f64 {
        self.target_rate
    }

    fn update_schedule(&mut self, accepted: bool) {
        self.accept_rate *= RATE_SMOOTHING;
        if accepted {
            self.accept_rate += 1.0 - RATE_SMOOTHING;
        }

        self.evals += 1;
        if self.evals <= self.phase1_end {
            // Excess over 0.44 decays geometrically; at the phase boundary
            // the target has dropped to within 0.001 of 0.44.
            self.target_rate =
                MID_PHASE_TARGET + self.phase1_decay * (self.target_rate - MID_PHASE_TARGET);
        } else if self.evals <= self.phase2_end {
            self.target_rate = MID_PHASE_TARGET;
        } else {
            self.target_rate *= self.phase3_decay;
        }

        if self.accept_rate > self.target_rate {
            self.temperature *= TEMPERATURE_ADJUSTMENT;
        } else {
            self.temperature /= TEMPERATURE_ADJUSTMENT;
        }
    }
}

impl Default for ModifiedLam {
    fn default() -> Self {
        Self::new()
    }
}

impl AnnealingSchedule for ModifiedLam {
    fn init(&mut self, max_evals: usize) {
        if max_evals != self.cached_max_evals {
            let m = max_evals.max(1) as f64;
            self.phase1_end = (0.15 * m).round() as usize;
            self.phase2_end = (0.65 * m).round() as usize;
            // One exponentiation each; applied by repeated multiplication
            // during the run.
            self.phase1_decay = 560f64.powf(-1.0 / (0.15 * m));
            self.phase3_decay = 440f64.powf(-1.0 / (0.35 * m));
            self.cached_max_evals = max_evals;
        }
        self.temperature = 0.5;
        self.accept_rate = 0.5;
        self.target_rate = 1.0;
        self.evals = 0;
    }

    fn accept<R: Rng>(&mut self, neighbor_cost: f64, current_cost: f64, rng: &mut R) -> bool {
        let accepted = metropolis(neighbor_cost, current_cost, self.temperature, rng);
        self.update_schedule(accepted);
        accepted
    }
}

impl Split for ModifiedLam {
    fn split(&self) -> Self {
        // Same (empty) static configuration, dynamic state at pre-init
        // defaults.
        Self::new()
    }
}
