//! Wall-clock bounded runs.
//!
//! Convergence experiments compare encodings by the best score reached
//! after a given amount of time rather than after a given number of
//! generations. [`Engine::run_for`] records that curve.

use super::config::TraceConfig;
use super::engine::Engine;
use super::types::{Crossover, Mutation, Objective, Representation, Selection};
use log::debug;
use std::time::Instant;

/// One point of a convergence curve.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Sample {
    /// Seconds since the start of the run.
    pub elapsed_secs: f64,

    /// Generations run since initialization.
    pub generation: usize,

    /// Best fitness at that time.
    pub score: f64,
}

impl<'a, I, O, C, M, S> Engine<'a, I, O, C, M, S>
where
    I: Representation,
    O: Objective<I>,
    C: Crossover<I>,
    M: Mutation<I>,
    S: Selection<I>,
{
    /// Steps the engine until the time budget is spent, sampling the best
    /// score after every `steps_per_sample` generations.
    ///
    /// The first sample is the current state at elapsed time 0. The clock is
    /// only read between whole [`step`](Self::step) calls.
    ///
    /// # Panics
    /// Panics if `config` is invalid or the engine is not initialized.
    pub fn run_for(&mut self, config: &TraceConfig) -> Vec<Sample> {
        config.validate().expect("invalid TraceConfig");
        assert!(self.is_initialized(), "engine stepped before initialize");

        let budget = config.time_limit();
        let start = Instant::now();
        let mut samples = vec![Sample {
            elapsed_secs: 0.0,
            generation: self.generation(),
            score: self.score(),
        }];

        while start.elapsed() < budget {
            let score = self.step(config.steps_per_sample);
            samples.push(Sample {
                elapsed_secs: start.elapsed().as_secs_f64(),
                generation: self.generation(),
                score,
            });
        }

        debug!(
            "timed run: {} samples over {:?}, final best {}",
            samples.len(),
            start.elapsed(),
            self.score()
        );
        samples
    }
}
