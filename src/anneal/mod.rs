//! Annealing schedules: temperature state machines for simulated annealing.
//!
//! A schedule maps (neighbor cost, current cost) to an accept/reject
//! decision under the Boltzmann criterion and advances its temperature state
//! once per decision. Variants range from simple analytic cooling curves
//! ([`LinearCooling`], [`ExponentialCooling`]) to the feedback-driven
//! [`ModifiedLam`] schedule that retunes itself from observed acceptance
//! statistics.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Lam & Delosme (1988); Boyan (1998) for the Modified Lam target curve

mod adaptive;
mod cooling;
mod types;

pub use adaptive::ModifiedLam;
pub use cooling::{ExponentialCooling, LinearCooling};
pub use types::AnnealingSchedule;
