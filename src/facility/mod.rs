//! Facility location as a benchmark problem.
//!
//! Provides the [`Instance`] generator, the bit-string
//! [`FacilityObjective`], and the [`Solver`] baselines that GA runs are
//! measured against.
//!
//! # References
//!
//! - Cornuéjols, Nemhauser & Wolsey (1990), "The Uncapacitated Facility
//!   Location Problem", *Discrete Location Theory*

mod instance;
mod objective;
mod solver;

pub use instance::Instance;
pub use objective::FacilityObjective;
pub use solver::Solver;
