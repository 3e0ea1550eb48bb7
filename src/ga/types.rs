//! Core trait definitions for the GA engine.
//!
//! The engine is generic over five seams: the individual
//! ([`Representation`]) and the four strategies that act on it
//! ([`Objective`], [`Crossover`], [`Mutation`], [`Selection`]). All of them
//! are bound at compile time; the engine never boxes a strategy.

use super::population::Population;
use rand::Rng;

/// A candidate solution encoding.
///
/// The only required capability is drawing a fresh random state. `Default`
/// provides the blank value the engine randomizes during initialization.
pub trait Representation: Clone + Default {
    /// Erases the current state and replaces it with a uniformly random one.
    ///
    /// The result is independent of the previous state.
    fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R);
}

/// Scores an individual. Lower is better (minimization).
///
/// Implementations must be deterministic and must never return NaN;
/// `f64::INFINITY` is a valid "worst possible" score.
pub trait Objective<I> {
    /// Computes the score of `individual`.
    fn evaluate(&self, individual: &I) -> f64;
}

impl<I, O: Objective<I> + ?Sized> Objective<I> for &O {
    fn evaluate(&self, individual: &I) -> f64 {
        (**self).evaluate(individual)
    }
}

/// Recombines two parents into one child.
pub trait Crossover<I> {
    /// Produces a child from `parent1` and `parent2`. Neither parent changes.
    fn crossover(&mut self, parent1: &I, parent2: &I) -> I;
}

/// Perturbs one individual.
pub trait Mutation<I: Clone> {
    /// Mutates `individual` and returns the same reference.
    fn mutate_in_place<'i>(&mut self, individual: &'i mut I) -> &'i mut I;

    /// Returns a mutated copy, leaving `individual` untouched.
    ///
    /// Uses the same stochastic process as [`mutate_in_place`](Self::mutate_in_place).
    fn mutate(&mut self, individual: &I) -> I {
        let mut copy = individual.clone();
        self.mutate_in_place(&mut copy);
        copy
    }
}

/// Picks the survivors of a ranked population.
///
/// For a non-empty input the result is non-empty, holds only entries of the
/// input with their original fitness, and is at most as large as the input.
pub trait Selection<I: Clone> {
    /// Selects survivors without modifying `population`.
    fn select(&mut self, population: &Population<I>) -> Population<I>;

    /// Selects survivors, consuming `population`.
    ///
    /// Override when the selection can reuse the input storage.
    fn select_owned(&mut self, population: Population<I>) -> Population<I> {
        self.select(&population)
    }
}
