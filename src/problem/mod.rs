//! Capability interfaces for problems, operators, and costs.
//!
//! This crate does not define any concrete candidate-solution representation.
//! Consumers supply the problem being optimized through [`Problem`], random
//! starting points through [`Initializer`], and perturbations through
//! [`MutationOperator`] (optionally [`IterableMutationOperator`] for
//! neighborhood enumeration). Costs flow through the framework as [`Cost`],
//! which carries either an integer-valued or a real-valued scalar.

mod types;

pub use types::{
    Cost, Initializer, IterableMutationOperator, MutationIterator, MutationOperator, Problem,
    SolutionCostPair,
};
