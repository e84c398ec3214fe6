//! Search capability interfaces and the built-in simulated annealer.

mod annealer;
mod types;

pub use annealer::SimulatedAnnealer;
pub use types::{Metaheuristic, ReoptimizableMetaheuristic};
