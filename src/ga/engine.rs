//! GA evolution engine.
//!
//! [`Engine`] owns a ranked population and evolves it one generation per
//! step: selection → (crossover → mutation → evaluation) until the
//! population is refilled.

use super::config::EngineConfig;
use super::population::Population;
use super::types::{Crossover, Mutation, Objective, Representation, Selection};
use crate::random::{create_rng, entropy_rng};
use log::{debug, trace, warn};
use rand::rngs::StdRng;
use rand::Rng;

/// Evolves a population of `I` with borrowed strategies.
///
/// The engine borrows its objective and exclusively borrows its crossover,
/// mutation, and selection (they carry generator state). Any of them can be
/// rebound between steps through the `set_*` methods.
///
/// # Lifecycle
///
/// A new engine is uninitialized. [`initialize`](Self::initialize) fills the
/// population with random individuals; [`step`](Self::step) evolves it.
/// Stepping or reading statistics before initialization panics.
///
/// # Usage
///
/// ```
/// use u_redundancy::ga::{
///     BitString, ElitismSelection, Engine, EngineConfig, Objective, RandomMutation,
///     SinglePointCrossover,
/// };
///
/// // minimize the number of set bits
/// struct CountOnes;
/// impl Objective<BitString<16>> for CountOnes {
///     fn evaluate(&self, individual: &BitString<16>) -> f64 {
///         individual.count_ones() as f64
///     }
/// }
///
/// let objective = CountOnes;
/// let mut crossover = SinglePointCrossover::with_seed(1);
/// let mut mutation = RandomMutation::with_seed(1.0 / 16.0, 2);
/// let mut selection = ElitismSelection::new(0.5);
/// let config = EngineConfig::default().with_population_size(20).with_seed(3);
///
/// let mut engine = Engine::with_config(
///     &objective, &mut crossover, &mut mutation, &mut selection, &config,
/// );
/// engine.initialize();
/// let score = engine.step(50);
/// assert_eq!(score, engine.score());
/// assert!(score <= 2.0);
/// ```
pub struct Engine<'a, I, O, C, M, S> {
    objective: &'a O,
    crossover: &'a mut C,
    mutation: &'a mut M,
    selection: &'a mut S,
    population_size: usize,
    population: Population<I>,
    generation: usize,
    rng: StdRng,
}

impl<'a, I, O, C, M, S> Engine<'a, I, O, C, M, S>
where
    I: Representation,
    O: Objective<I>,
    C: Crossover<I>,
    M: Mutation<I>,
    S: Selection<I>,
{
    /// Creates an engine with [`EngineConfig::default`].
    pub fn new(
        objective: &'a O,
        crossover: &'a mut C,
        mutation: &'a mut M,
        selection: &'a mut S,
    ) -> Self {
        Self::with_config(
            objective,
            crossover,
            mutation,
            selection,
            &EngineConfig::default(),
        )
    }

    /// Creates an engine from a configuration.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call [`EngineConfig::validate`]
    /// first to get a descriptive error).
    pub fn with_config(
        objective: &'a O,
        crossover: &'a mut C,
        mutation: &'a mut M,
        selection: &'a mut S,
        config: &EngineConfig,
    ) -> Self {
        config.validate().expect("invalid EngineConfig");

        let rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => entropy_rng(),
        };

        Self {
            objective,
            crossover,
            mutation,
            selection,
            population_size: config.population_size,
            population: Population::with_capacity(config.population_size),
            generation: 0,
            rng,
        }
    }

    // ---- Strategies ----

    /// The bound objective.
    pub fn objective(&self) -> &'a O {
        self.objective
    }

    /// The bound crossover.
    pub fn crossover(&self) -> &C {
        self.crossover
    }

    /// The bound mutation.
    pub fn mutation(&self) -> &M {
        self.mutation
    }

    /// The bound selection.
    pub fn selection(&self) -> &S {
        self.selection
    }

    /// Rebinds the objective.
    ///
    /// Cached fitness values are kept; call [`initialize`](Self::initialize)
    /// to re-rank the population under the new objective.
    pub fn set_objective(&mut self, objective: &'a O) {
        self.objective = objective;
    }

    /// Rebinds the crossover.
    pub fn set_crossover(&mut self, crossover: &'a mut C) {
        self.crossover = crossover;
    }

    /// Rebinds the mutation.
    pub fn set_mutation(&mut self, mutation: &'a mut M) {
        self.mutation = mutation;
    }

    /// Rebinds the selection.
    pub fn set_selection(&mut self, selection: &'a mut S) {
        self.selection = selection;
    }

    /// Target population size.
    pub fn population_size(&self) -> usize {
        self.population_size
    }

    /// Sets the target population size used by the next refill.
    ///
    /// # Panics
    /// Panics if `population_size` is zero.
    pub fn set_population_size(&mut self, population_size: usize) {
        assert!(population_size != 0, "population size must be positive");
        self.population_size = population_size;
    }

    // ---- Evolution ----

    /// Replaces the population with `population_size` random individuals.
    pub fn initialize(&mut self) {
        self.population.clear();
        self.generation = 0;
        let mut individual = I::default();
        for _ in 0..self.population_size {
            individual.randomize(&mut self.rng);
            let fitness = self.objective.evaluate(&individual);
            self.population.insert(fitness, individual.clone());
        }
        debug!(
            "initialized population of {} (best {})",
            self.population.len(),
            self.score()
        );
    }

    /// Sets the target population size, then [`initialize`](Self::initialize)s.
    ///
    /// # Panics
    /// Panics if `population_size` is zero.
    pub fn initialize_with_size(&mut self, population_size: usize) {
        self.set_population_size(population_size);
        self.initialize();
    }

    /// Whether the engine holds a population.
    pub fn is_initialized(&self) -> bool {
        !self.population.is_empty()
    }

    /// Runs `count` generations and returns the best fitness afterwards.
    ///
    /// Each generation replaces the population with the survivors of the
    /// selection, then refills it to `population_size` with children of two
    /// survivors drawn uniformly with replacement, each child crossed over,
    /// mutated, and evaluated once.
    ///
    /// # Panics
    /// Panics if the engine is not initialized, or if the selection returns
    /// an empty population.
    pub fn step(&mut self, count: u32) -> f64 {
        assert!(self.is_initialized(), "engine stepped before initialize");

        for _ in 0..count {
            let population = std::mem::take(&mut self.population);
            let mut next = self.selection.select_owned(population);
            let survivors = next.len();
            assert!(survivors != 0, "selection returned an empty population");

            let missing = self.population_size.saturating_sub(survivors);
            let mut children = Vec::with_capacity(missing);
            let parents = next.as_slice();
            for _ in 0..missing {
                let p1 = &parents[self.rng.random_range(0..survivors)].1;
                let p2 = &parents[self.rng.random_range(0..survivors)].1;

                let mut child = self.crossover.crossover(p1, p2);
                self.mutation.mutate_in_place(&mut child);

                let fitness = self.objective.evaluate(&child);
                children.push((fitness, child));
            }
            for (fitness, child) in children {
                next.insert(fitness, child);
            }

            self.population = next;
            self.generation += 1;
            trace!(
                "generation {}: {} survivors, best {}",
                self.generation,
                survivors,
                self.score()
            );
        }

        debug!(
            "stepped {} generation(s), generation {}, best {}",
            count,
            self.generation,
            self.score()
        );
        self.score()
    }

    // ---- Accessors ----

    /// Generations run since the last initialization.
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// The ranked population.
    pub fn population(&self) -> &Population<I> {
        &self.population
    }

    /// Fitness of the best individual.
    ///
    /// # Panics
    /// Panics if the engine is not initialized.
    pub fn score(&self) -> f64 {
        self.best_entry().0
    }

    /// A copy of the best individual.
    ///
    /// # Panics
    /// Panics if the engine is not initialized.
    pub fn best(&self) -> I {
        self.best_entry().1.clone()
    }

    fn best_entry(&self) -> &(f64, I) {
        self.population
            .best()
            .expect("engine not initialized: population is empty")
    }

    /// Mean fitness of the whole population.
    pub fn mean(&self) -> f64 {
        self.mean_of(self.population.len())
    }

    /// Mean fitness of the `count` best individuals.
    ///
    /// # Panics
    /// Panics unless `1 <= count <= population.len()`.
    pub fn mean_of(&self, count: usize) -> f64 {
        self.check_count(count);
        self.population.fitnesses().take(count).sum::<f64>() / count as f64
    }

    /// Standard deviation of the fitness of the whole population.
    pub fn standard_deviation(&self) -> f64 {
        self.standard_deviation_of(self.population.len())
    }

    /// Population standard deviation of the fitness of the `count` best
    /// individuals.
    ///
    /// # Panics
    /// Panics unless `1 <= count <= population.len()`.
    pub fn standard_deviation_of(&self, count: usize) -> f64 {
        let mean = self.mean_of(count);
        if !mean.is_finite() {
            warn!("standard deviation over non-finite fitness (mean {})", mean);
        }
        let variance = self
            .population
            .fitnesses()
            .take(count)
            .map(|f| (f - mean) * (f - mean))
            .sum::<f64>()
            / count as f64;
        variance.sqrt()
    }

    fn check_count(&self, count: usize) {
        assert!(
            count >= 1 && count <= self.population.len(),
            "statistic over {} individuals requested from a population of {}",
            count,
            self.population.len()
        );
    }
}
