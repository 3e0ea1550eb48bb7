//! Survivor selection strategies.
//!
//! A selection reduces a ranked [`Population`] to the individuals kept for
//! the next generation. The engine then refills the population with
//! offspring of the survivors.
//!
//! Both strategies assume **minimization** (lower fitness = better) and
//! rely on the population being sorted best-first.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Baker (1985), "Adaptive Selection Methods for Genetic Algorithms"

use super::population::Population;
use super::types::Selection;
use crate::random::{create_rng, entropy_rng};
use rand::rngs::StdRng;
use rand::Rng;

/// Truncation selection: keeps the best fraction of the population.
///
/// Keeps `ceil(proportion_survival · n)` entries, and always at least one.
///
/// # Examples
///
/// ```
/// use u_redundancy::ga::{ElitismSelection, Population, Selection};
///
/// let population: Population<u8> = (0..10).map(|i| (f64::from(i), i)).collect();
/// let mut selection = ElitismSelection::new(0.25);
/// let survivors = selection.select(&population);
/// assert_eq!(survivors.len(), 3);
/// assert_eq!(survivors.best(), Some(&(0.0, 0)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ElitismSelection {
    proportion_survival: f64,
}

impl ElitismSelection {
    /// Creates the selection.
    ///
    /// # Panics
    /// Panics unless `0 < proportion_survival <= 1`.
    pub fn new(proportion_survival: f64) -> Self {
        check_proportion(proportion_survival);
        Self {
            proportion_survival,
        }
    }

    /// Fraction of the population kept.
    pub fn proportion_survival(&self) -> f64 {
        self.proportion_survival
    }

    /// Sets the fraction of the population kept.
    ///
    /// # Panics
    /// Panics unless `0 < proportion_survival <= 1`.
    pub fn set_proportion_survival(&mut self, proportion_survival: f64) {
        check_proportion(proportion_survival);
        self.proportion_survival = proportion_survival;
    }

    /// Number of survivors out of `n` entries.
    pub fn survivor_count(&self, n: usize) -> usize {
        let count = (self.proportion_survival * n as f64).ceil() as usize;
        count.clamp(1, n.max(1))
    }
}

fn check_proportion(proportion_survival: f64) {
    assert!(
        proportion_survival > 0.0 && proportion_survival <= 1.0,
        "proportion_survival must be in (0, 1], got {proportion_survival}"
    );
}

impl<I: Clone> Selection<I> for ElitismSelection {
    fn select(&mut self, population: &Population<I>) -> Population<I> {
        let count = self.survivor_count(population.len());
        population.iter().take(count).cloned().collect()
    }

    fn select_owned(&mut self, mut population: Population<I>) -> Population<I> {
        let count = self.survivor_count(population.len());
        population.truncate(count);
        population
    }
}

/// Rank-based stochastic survival.
///
/// Each entry survives independently with probability `(n - r) / n`, where
/// `r` is the rank of the first entry sharing its fitness (0 = best). Equal
/// fitness means equal odds, better fitness means strictly better odds, and
/// the best entries survive with probability 1, so the result is never
/// empty. Infinite scores are ranked like any other.
#[derive(Debug, Clone)]
pub struct ProbabilisticSelection {
    rng: StdRng,
}

impl ProbabilisticSelection {
    /// Creates the selection with a random seed.
    pub fn new() -> Self {
        Self { rng: entropy_rng() }
    }

    /// Creates the selection with a fixed seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: create_rng(seed),
        }
    }

    /// Survival decision for every rank of `population`.
    fn survivors<I>(&mut self, population: &Population<I>) -> Vec<bool> {
        let n = population.len();
        let mut keep = Vec::with_capacity(n);
        let mut group_rank = 0;
        let mut previous = f64::NAN;
        for (rank, fitness) in population.fitnesses().enumerate() {
            if fitness != previous {
                group_rank = rank;
                previous = fitness;
            }
            let probability = (n - group_rank) as f64 / n as f64;
            keep.push(self.rng.random_bool(probability));
        }
        keep
    }
}

impl Default for ProbabilisticSelection {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Clone> Selection<I> for ProbabilisticSelection {
    fn select(&mut self, population: &Population<I>) -> Population<I> {
        let keep = self.survivors(population);
        population
            .iter()
            .zip(keep)
            .filter_map(|(entry, kept)| kept.then(|| entry.clone()))
            .collect()
    }

    fn select_owned(&mut self, population: Population<I>) -> Population<I> {
        let keep = self.survivors(&population);
        population
            .into_iter()
            .zip(keep)
            .filter_map(|(entry, kept)| kept.then_some(entry))
            .collect()
    }
}
