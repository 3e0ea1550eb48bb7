//! Error types.
//!
//! Misuse of the engine and operators (stepping an empty engine, zero
//! population, out-of-range statistics) is a programming error and panics.
//! Only values coming from outside the program are validated: engine
//! configuration into a [`ConfigError`], instance data into an
//! [`InstanceError`].

use thiserror::Error;

/// Invalid [`EngineConfig`](crate::ga::EngineConfig) parameter.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    /// The target population size was zero.
    #[error("population_size must be at least 1")]
    ZeroPopulation,

    /// The time budget of a timed run was zero.
    #[error("time_limit_ms must be at least 1")]
    ZeroTimeLimit,

    /// A timed run would never call `step`.
    #[error("steps_per_sample must be at least 1")]
    ZeroStepsPerSample,
}

/// Malformed facility-location [`Instance`](crate::facility::Instance) data.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum InstanceError {
    /// The distance table does not have one row per facility.
    #[error("expected {expected} distance rows, found {found}")]
    RowCount { expected: usize, found: usize },

    /// The cost list does not have one entry per facility.
    #[error("expected {expected} opening costs, found {found}")]
    CostCount { expected: usize, found: usize },

    /// The distance rows are empty.
    #[error("instance needs at least one customer")]
    NoCustomer,

    /// A distance row disagrees with the first row's length.
    #[error("distance rows must all have {expected} customers, row {facility} has {found}")]
    RaggedRow {
        facility: usize,
        expected: usize,
        found: usize,
    },
}
