//! Engine and timed-run configuration.
//!
//! [`EngineConfig`] holds the parameters of the evolutionary loop itself;
//! [`TraceConfig`] holds the wall-clock budget of a sampled run
//! ([`Engine::run_for`](super::Engine::run_for)).

use crate::error::ConfigError;
use std::time::Duration;

/// Configuration for the [`Engine`](super::Engine).
///
/// # Defaults
///
/// ```
/// use u_redundancy::ga::EngineConfig;
///
/// let config = EngineConfig::default();
/// assert_eq!(config.population_size, 32);
/// assert!(config.seed.is_none());
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_redundancy::ga::EngineConfig;
///
/// let config = EngineConfig::default()
///     .with_population_size(64)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineConfig {
    /// Number of individuals the engine refills the population to after
    /// each selection.
    pub population_size: usize,

    /// Seed of the engine generator (initialization and parent picking).
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            population_size: 32,
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.population_size == 0 {
            return Err(ConfigError::ZeroPopulation);
        }
        Ok(())
    }
}

/// Budget of a sampled, wall-clock bounded run.
///
/// ```
/// use u_redundancy::ga::TraceConfig;
///
/// let config = TraceConfig::default().with_time_limit_ms(250).with_steps_per_sample(5);
/// assert_eq!(config.time_limit().as_millis(), 250);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TraceConfig {
    /// Wall-clock budget in milliseconds.
    ///
    /// Checked between whole `step` calls, so a run may overshoot by one
    /// batch of steps.
    pub time_limit_ms: u64,

    /// Generations performed between two samples.
    pub steps_per_sample: u32,
}

impl Default for TraceConfig {
    fn default() -> Self {
        Self {
            time_limit_ms: 1_000,
            steps_per_sample: 10,
        }
    }
}

impl TraceConfig {
    /// Sets the wall-clock budget in milliseconds.
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = ms;
        self
    }

    /// Sets the number of generations between two samples.
    pub fn with_steps_per_sample(mut self, steps: u32) -> Self {
        self.steps_per_sample = steps;
        self
    }

    /// The budget as a [`Duration`].
    pub fn time_limit(&self) -> Duration {
        Duration::from_millis(self.time_limit_ms)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.time_limit_ms == 0 {
            return Err(ConfigError::ZeroTimeLimit);
        }
        if self.steps_per_sample == 0 {
            return Err(ConfigError::ZeroStepsPerSample);
        }
        Ok(())
    }
}
