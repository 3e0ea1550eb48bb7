//! Seeded random number generation.
//!
//! Every stochastic component (engine, crossover, mutation, selection) owns
//! its own generator created here, so a run is reproducible from its seeds.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a deterministic generator from a seed.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Creates a generator from a fresh random seed.
pub fn entropy_rng() -> StdRng {
    create_rng(rand::random())
}
