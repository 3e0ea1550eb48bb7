//! Baselines for judging GA runs on facility-location instances.

use super::instance::Instance;
use super::objective::FacilityObjective;
use crate::ga::{BitString, Objective};
use log::debug;

/// Exact and heuristic reference solvers.
pub struct Solver;

impl Solver {
    /// Largest bit-string length [`brute_force`](Self::brute_force) accepts.
    pub const MAX_BRUTE_FORCE: usize = 24;

    /// Evaluates every bit pattern and returns the lowest score with its
    /// pattern. The first pattern in counting order wins ties.
    ///
    /// # Panics
    /// Panics if `NF > 24`.
    pub fn brute_force<O, const NF: usize>(objective: &O) -> (f64, BitString<NF>)
    where
        O: Objective<BitString<NF>>,
    {
        assert!(
            NF <= Self::MAX_BRUTE_FORCE,
            "brute force over {} bits exceeds the limit of {}",
            NF,
            Self::MAX_BRUTE_FORCE
        );

        let mut best = BitString::zeros();
        let mut best_score = objective.evaluate(&best);
        for value in 1..(1u64 << NF) {
            let candidate = BitString::from_u64(value);
            let score = objective.evaluate(&candidate);
            if score < best_score {
                best_score = score;
                best = candidate;
            }
        }

        debug!("brute force over {} bits: best {} ({})", NF, best_score, best);
        (best_score, best)
    }

    /// Greedy-add heuristic.
    ///
    /// Opens the best single facility, then keeps opening whichever closed
    /// facility lowers the score the most until none does. The result is an
    /// upper bound on the optimum.
    pub fn greedy<const NF: usize>(instance: &Instance<NF>) -> (f64, BitString<NF>) {
        let objective = FacilityObjective::new(instance);
        let mut open = BitString::<NF>::zeros();
        let mut score = objective.evaluate(&open);

        loop {
            let mut improvement: Option<(usize, f64)> = None;
            for f in (0..NF).filter(|&f| !open[f]) {
                let mut candidate = open;
                candidate.set(f, true);
                let candidate_score = objective.evaluate(&candidate);
                let best_so_far = improvement.map_or(score, |(_, s)| s);
                if candidate_score < best_so_far {
                    improvement = Some((f, candidate_score));
                }
            }

            match improvement {
                Some((f, s)) => {
                    open.set(f, true);
                    score = s;
                }
                None => break,
            }
        }

        debug!(
            "greedy: {} of {} facilities open, score {}",
            open.count_ones(),
            NF,
            score
        );
        (score, open)
    }
}
