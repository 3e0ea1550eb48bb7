//! Genetic Algorithm engine.
//!
//! A generic GA engine built on trait-based strategies bound at compile
//! time. A problem plugs in an [`Objective`]; the encoding plugs in a
//! [`Representation`] together with matching [`Crossover`], [`Mutation`],
//! and [`Selection`] operators.
//!
//! # Core Traits
//!
//! - [`Representation`]: An individual that can be drawn at random
//! - [`Objective`]: Scores an individual (lower is better)
//! - [`Crossover`], [`Mutation`], [`Selection`]: Evolution operators
//!
//! # Key Types
//!
//! - [`BitString`]: Fixed-length bit-string individual
//! - [`Population`]: Fitness-ranked multiset of evaluated individuals
//! - [`Engine`]: Initializes and steps a population
//! - [`EngineConfig`], [`TraceConfig`]: Engine and timed-run parameters
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod bit_string;
mod config;
mod engine;
mod operators;
mod population;
mod selection;
mod trace;
mod types;

pub use bit_string::BitString;
pub use config::{EngineConfig, TraceConfig};
pub use engine::Engine;
pub use operators::{MultiPointCrossover, RandomMutation, SinglePointCrossover};
pub use population::Population;
pub use selection::{ElitismSelection, ProbabilisticSelection};
pub use trace::Sample;
pub use types::{Crossover, Mutation, Objective, Representation, Selection};
