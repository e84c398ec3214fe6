//! Core types and traits consumed by searches.

use crate::split::Split;
use rand::Rng;
use std::cmp::Ordering;

/// Scalar cost of a candidate solution, either integer- or real-valued.
///
/// Exactly one representation is active at a time. Cross-kind comparisons
/// treat integer costs as exact reals, so an integer-cost problem and a
/// real-cost heuristic bound can feed the same progress tracker.
///
/// Lower is better throughout this crate (minimization). For maximization,
/// negate the cost.
#[derive(Debug, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cost {
    /// Exact integer cost.
    Int(i64),
    /// Real-valued cost.
    Real(f64),
}

impl Cost {
    /// Returns the cost as an `f64`, converting integer costs exactly where
    /// the value fits the mantissa.
    pub fn to_f64(self) -> f64 {
        match self {
            Cost::Int(v) => v as f64,
            Cost::Real(v) => v,
        }
    }

    /// True if this cost carries the integer representation.
    pub fn is_integer(self) -> bool {
        matches!(self, Cost::Int(_))
    }
}

impl From<i64> for Cost {
    fn from(v: i64) -> Self {
        Cost::Int(v)
    }
}

impl From<f64> for Cost {
    fn from(v: f64) -> Self {
        Cost::Real(v)
    }
}

impl PartialEq for Cost {
    fn eq(&self, other: &Self) -> bool {
        match (*self, *other) {
            (Cost::Int(a), Cost::Int(b)) => a == b,
            (a, b) => a.to_f64() == b.to_f64(),
        }
    }
}

impl PartialOrd for Cost {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (*self, *other) {
            (Cost::Int(a), Cost::Int(b)) => Some(a.cmp(&b)),
            (a, b) => a.to_f64().partial_cmp(&b.to_f64()),
        }
    }
}

/// An owned (solution, cost) snapshot.
///
/// Ordering and equality consider the cost only: two pairs with equal cost
/// are equal regardless of solution identity. This is the total order used
/// when a multistart batch keeps its best-of-batch result.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolutionCostPair<T> {
    solution: T,
    cost: Cost,
}

impl<T> SolutionCostPair<T> {
    /// Creates a pair from an owned solution and its cost.
    pub fn new(solution: T, cost: Cost) -> Self {
        Self { solution, cost }
    }

    /// The cost of the solution.
    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// Borrow the solution.
    pub fn solution(&self) -> &T {
        &self.solution
    }

    /// Consumes the pair, returning the solution.
    pub fn into_solution(self) -> T {
        self.solution
    }

    /// Consumes the pair, returning both parts.
    pub fn into_parts(self) -> (T, Cost) {
        (self.solution, self.cost)
    }
}

impl<T> PartialEq for SolutionCostPair<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost
    }
}

impl<T> PartialOrd for SolutionCostPair<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.cost.partial_cmp(&other.cost)
    }
}

/// Defines the optimization problem: a cost function over candidate
/// solutions, and optionally a known theoretical minimum.
///
/// # Minimization
///
/// The framework minimizes the cost. For maximization, negate.
pub trait Problem: Send + Sync {
    /// The candidate-solution representation type.
    type Solution: Clone;

    /// Computes the cost of a candidate. Lower is better.
    fn cost(&self, candidate: &Self::Solution) -> Cost;

    /// The theoretical minimum cost, if known. Searches that reach it set
    /// the progress tracker's found-best flag and stop early.
    fn min_cost(&self) -> Option<Cost> {
        None
    }

    /// True if `cost` is at least as good as the known minimum.
    fn is_min_cost(&self, cost: Cost) -> bool {
        self.min_cost().is_some_and(|m| cost <= m)
    }
}

/// Creates starting candidates for fresh runs of a search.
pub trait Initializer<T>: Split {
    /// Creates a random (or otherwise fresh) candidate solution.
    fn create_candidate_solution<R: Rng>(&mut self, rng: &mut R) -> T;
}

/// Perturbs a candidate solution in place.
pub trait MutationOperator<T>: Split {
    /// Mutates `candidate` in place.
    fn mutate<R: Rng>(&mut self, candidate: &mut T, rng: &mut R);
}

/// Enumerates the neighborhood of a candidate one mutant at a time, with
/// savepoint/rollback semantics.
///
/// The iterator mutates the candidate it was created over. `set_savepoint`
/// marks the current mutant; `rollback` restores the candidate to the last
/// savepoint (or the starting state if none was set) and ends iteration.
///
/// # Panics
///
/// Calling [`MutationIterator::next_mutant`] after `rollback`, or when
/// [`MutationIterator::has_next`] is false, is a state-misuse error and
/// panics at the call site.
pub trait MutationIterator {
    /// True if at least one more mutant can be generated.
    fn has_next(&self) -> bool;

    /// Advances the candidate to the next mutant.
    fn next_mutant(&mut self);

    /// Marks the current mutant as the state `rollback` restores.
    fn set_savepoint(&mut self);

    /// Restores the candidate to the last savepoint and ends iteration.
    /// Idempotent.
    fn rollback(&mut self);
}

/// A mutation operator whose neighborhood can be enumerated.
pub trait IterableMutationOperator<T>: MutationOperator<T> {
    /// The iterator type over the neighborhood of a candidate.
    type Iter<'a>: MutationIterator
    where
        Self: 'a,
        T: 'a;

    /// Returns an iterator over mutants of `candidate`.
    fn iterator<'a>(&'a mut self, candidate: &'a mut T) -> Self::Iter<'a>;
}
