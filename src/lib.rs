//! Genetic algorithms over redundant bit-string encodings.
//!
//! Measures how adding redundancy to a genome changes the convergence of a
//! genetic algorithm:
//!
//! - **GA**: A generic engine over fixed-length [`BitString`](ga::BitString)
//!   individuals with pluggable crossover, mutation, and selection
//!   operators, plus wall-clock bounded runs that record convergence curves.
//! - **Encodings**: Objective decorators that map a long bit string onto a
//!   short one by duplication, dead-bit padding, or majority mixing.
//! - **Facility location**: Random and metric instance generators, the
//!   matching objective, and brute-force and greedy baselines.
//!
//! # Architecture
//!
//! Strategies are generic parameters of [`Engine`](ga::Engine) and are
//! borrowed rather than owned, so a driver can rebind them between steps.
//! Every stochastic component owns its own seeded generator; nothing touches
//! global RNG state. The crate logs through the `log` facade and installs no
//! logger.

pub mod encoding;
pub mod error;
pub mod facility;
pub mod ga;
pub mod random;
