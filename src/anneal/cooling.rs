//! Analytic cooling schedules.

use super::types::{metropolis, AnnealingSchedule};
use crate::error::ConfigError;
use crate::split::Split;
use rand::Rng;

/// Temperatures never cool below this floor; the schedule is "frozen" there.
///
/// The floor is independent of the problem's cost scale. For problems with
/// extreme cost magnitudes the frozen acceptance probability may not be
/// negligible (or may be unreachable); rescale costs rather than relying on
/// the floor.
pub(super) const TEMPERATURE_FLOOR: f64 = 0.001;

/// Linear cooling: the temperature decreases by a fixed `delta_t` every
/// `steps_per_update` evaluations, down to a floor of 0.001.
#[derive(Debug, Clone)]
pub struct LinearCooling {
    t0: f64,
    delta_t: f64,
    steps_per_update: usize,
    temperature: f64,
    step_counter: usize,
}

impl LinearCooling {
    /// Creates a linear schedule starting at temperature `t0`, subtracting
    /// `delta_t` every `steps_per_update` evaluations.
    ///
    /// # Errors
    ///
    /// [`ConfigError::NonPositive`] if `t0` or `delta_t` is not strictly
    /// positive; [`ConfigError::Zero`] if `steps_per_update` is 0.
    pub fn new(t0: f64, delta_t: f64, steps_per_update: usize) -> Result<Self, ConfigError> {
        if !(t0 > 0.0) {
            return Err(ConfigError::NonPositive {
                name: "t0",
                value: t0,
            });
        }
        if !(delta_t > 0.0) {
            return Err(ConfigError::NonPositive {
                name: "delta_t",
                value: delta_t,
            });
        }
        if steps_per_update == 0 {
            return Err(ConfigError::Zero {
                name: "steps_per_update",
            });
        }
        Ok(Self {
            t0,
            delta_t,
            steps_per_update,
            temperature: t0,
            step_counter: 0,
        })
    }

    /// The current temperature.
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    fn advance(&mut self) {
        self.step_counter += 1;
        if self.step_counter >= self.steps_per_update {
            self.step_counter = 0;
            self.temperature = (self.temperature - self.delta_t).max(TEMPERATURE_FLOOR);
        }
    }
}

impl AnnealingSchedule for LinearCooling {
    fn init(&mut self, _max_evals: usize) {
        self.temperature = self.t0;
        self.step_counter = 0;
    }

    fn accept<R: Rng>(&mut self, neighbor_cost: f64, current_cost: f64, rng: &mut R) -> bool {
        let accepted = metropolis(neighbor_cost, current_cost, self.temperature, rng);
        self.advance();
        accepted
    }
}

impl Split for LinearCooling {
    fn split(&self) -> Self {
        Self {
            t0: self.t0,
            delta_t: self.delta_t,
            steps_per_update: self.steps_per_update,
            temperature: self.t0,
            step_counter: 0,
        }
    }
}

/// Exponential (geometric) cooling: the temperature is multiplied by
/// `alpha` in (0, 1) every `steps_per_update` evaluations, down to a floor
/// of 0.001.
#[derive(Debug, Clone)]
pub struct ExponentialCooling {
    t0: f64,
    alpha: f64,
    steps_per_update: usize,
    temperature: f64,
    step_counter: usize,
}

impl ExponentialCooling {
    /// Creates a geometric schedule starting at temperature `t0` with
    /// cooling factor `alpha`, applied every `steps_per_update` evaluations.
    ///
    /// # Errors
    ///
    /// [`ConfigError::NonPositive`] if `t0` is not strictly positive;
    /// [`ConfigError::OutOfRange`] if `alpha` is outside (0, 1);
    /// [`ConfigError::Zero`] if `steps_per_update` is 0.
    pub fn new(t0: f64, alpha: f64, steps_per_update: usize) -> Result<Self, ConfigError> {
        if !(t0 > 0.0) {
            return Err(ConfigError::NonPositive {
                name: "t0",
                value: t0,
            });
        }
        if !(alpha > 0.0 && alpha < 1.0) {
            return Err(ConfigError::OutOfRange {
                name: "alpha",
                low: 0.0,
                high: 1.0,
                value: alpha,
            });
        }
        if steps_per_update == 0 {
            return Err(ConfigError::Zero {
                name: "steps_per_update",
            });
        }
        Ok(Self {
            t0,
            alpha,
            steps_per_update,
            temperature: t0,
            step_counter: 0,
        })
    }

    /// The current temperature.
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    fn advance(&mut self) {
        self.step_counter += 1;
        if self.step_counter >= self.steps_per_update {
            self.step_counter = 0;
            self.temperature = (self.temperature * self.alpha).max(TEMPERATURE_FLOOR);
        }
    }
}

impl AnnealingSchedule for ExponentialCooling {
    fn init(&mut self, _max_evals: usize) {
        self.temperature = self.t0;
        self.step_counter = 0;
    }

    fn accept<R: Rng>(&mut self, neighbor_cost: f64, current_cost: f64, rng: &mut R) -> bool {
        let accepted = metropolis(neighbor_cost, current_cost, self.temperature, rng);
        self.advance();
        accepted
    }
}

impl Split for ExponentialCooling {
    fn split(&self) -> Self {
        Self {
            t0: self.t0,
            alpha: self.alpha,
            steps_per_update: self.steps_per_update,
            temperature: self.t0,
            step_counter: 0,
        }
    }
}
