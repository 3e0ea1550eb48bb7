//! Bit-string crossover and mutation operators.
//!
//! Every operator owns its generator so that runs are reproducible from
//! the seeds given at construction, independently of how many random draws
//! other components make.
//!
//! # Crossover Operators
//!
//! - [`SinglePointCrossover`]: one cut, prefix from the first parent
//! - [`MultiPointCrossover`]: `k` distinct cuts, alternating parents
//!
//! # Mutation Operators
//!
//! - [`RandomMutation`]: independent bit flips with a fixed probability
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - De Jong (1975), "An Analysis of the Behavior of a Class of Genetic
//!   Adaptive Systems" (multi-point crossover)

use super::bit_string::BitString;
use super::types::{Crossover, Mutation};
use crate::random::{create_rng, entropy_rng};
use rand::rngs::StdRng;
use rand::Rng;

// ============================================================================
// Crossover operators
// ============================================================================

/// Single-point crossover.
///
/// Draws a cut uniformly in `[0, N)`; the child takes bits `[0, cut)` from
/// the first parent and `[cut, N)` from the second.
#[derive(Debug, Clone)]
pub struct SinglePointCrossover {
    rng: StdRng,
}

impl SinglePointCrossover {
    /// Creates the operator with a random seed.
    pub fn new() -> Self {
        Self { rng: entropy_rng() }
    }

    /// Creates the operator with a fixed seed.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: create_rng(seed),
        }
    }
}

impl Default for SinglePointCrossover {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Crossover<BitString<N>> for SinglePointCrossover {
    fn crossover(&mut self, parent1: &BitString<N>, parent2: &BitString<N>) -> BitString<N> {
        if N == 0 {
            return *parent1;
        }
        let cut = self.rng.random_range(0..N);
        splice(parent1, parent2, &[cut])
    }
}

/// Multi-point crossover.
///
/// Draws `number_point` distinct cuts uniformly in `[0, N)`. The child copies
/// the first parent up to the first cut, then the second parent up to the
/// next cut, and so on. With zero cuts the child is a copy of the first
/// parent.
#[derive(Debug, Clone)]
pub struct MultiPointCrossover {
    number_point: usize,
    rng: StdRng,
}

impl MultiPointCrossover {
    /// Creates the operator with a random seed.
    pub fn new(number_point: usize) -> Self {
        Self {
            number_point,
            rng: entropy_rng(),
        }
    }

    /// Creates the operator with a fixed seed.
    pub fn with_seed(number_point: usize, seed: u64) -> Self {
        Self {
            number_point,
            rng: create_rng(seed),
        }
    }

    /// Number of cuts drawn per crossover.
    pub fn number_point(&self) -> usize {
        self.number_point
    }
}

impl<const N: usize> Crossover<BitString<N>> for MultiPointCrossover {
    /// # Panics
    /// Panics if the operator asks for more cuts than there are bits.
    fn crossover(&mut self, parent1: &BitString<N>, parent2: &BitString<N>) -> BitString<N> {
        assert!(
            self.number_point <= N,
            "cannot draw {} distinct cuts in {} bits",
            self.number_point,
            N
        );
        let mut cuts = rand::seq::index::sample(&mut self.rng, N, self.number_point).into_vec();
        cuts.sort_unstable();
        splice(parent1, parent2, &cuts)
    }
}

/// Builds a child by switching parent at each of the sorted `cuts`.
fn splice<const N: usize>(
    parent1: &BitString<N>,
    parent2: &BitString<N>,
    cuts: &[usize],
) -> BitString<N> {
    let mut child = *parent1;
    let mut from_second = false;
    let mut start = 0;
    for cut in cuts.iter().copied().chain(std::iter::once(N)) {
        if from_second {
            child.as_mut_slice()[start..cut].copy_from_slice(&parent2.as_slice()[start..cut]);
        }
        from_second = !from_second;
        start = cut;
    }
    child
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Flips each bit independently with a fixed probability.
///
/// The probability is clamped to `[0, 1]`: `0` leaves individuals unchanged,
/// `1` replaces them with their complement. A typical choice is `1 / N`.
#[derive(Debug, Clone)]
pub struct RandomMutation {
    probability: f64,
    rng: StdRng,
}

impl RandomMutation {
    /// Creates the operator with a random seed.
    ///
    /// # Panics
    /// Panics if `probability` is NaN.
    pub fn new(probability: f64) -> Self {
        Self::from_rng(probability, entropy_rng())
    }

    /// Creates the operator with a fixed seed.
    ///
    /// # Panics
    /// Panics if `probability` is NaN.
    pub fn with_seed(probability: f64, seed: u64) -> Self {
        Self::from_rng(probability, create_rng(seed))
    }

    fn from_rng(probability: f64, rng: StdRng) -> Self {
        let mut out = Self {
            probability: 0.0,
            rng,
        };
        out.set_probability(probability);
        out
    }

    /// Per-bit flip probability.
    pub fn probability(&self) -> f64 {
        self.probability
    }

    /// Sets the per-bit flip probability, clamped to `[0, 1]`.
    ///
    /// # Panics
    /// Panics if `probability` is NaN.
    pub fn set_probability(&mut self, probability: f64) {
        assert!(!probability.is_nan(), "mutation probability must not be NaN");
        self.probability = probability.clamp(0.0, 1.0);
    }
}

impl<const N: usize> Mutation<BitString<N>> for RandomMutation {
    fn mutate_in_place<'i>(&mut self, individual: &'i mut BitString<N>) -> &'i mut BitString<N> {
        for bit in individual.as_mut_slice() {
            if self.rng.random_bool(self.probability) {
                *bit = !*bit;
            }
        }
        individual
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn random_pair<const N: usize>(seed: u64) -> (BitString<N>, BitString<N>) {
        use crate::ga::Representation;
        let mut rng = create_rng(seed);
        let mut a = BitString::<N>::zeros();
        let mut b = BitString::<N>::zeros();
        a.randomize(&mut rng);
        b.randomize(&mut rng);
        (a, b)
    }

    // ---- Single-point ----

    #[test]
    fn test_single_point_identical_parents() {
        let mut op = SinglePointCrossover::with_seed(42);
        let (p, _) = random_pair::<32>(1);
        for _ in 0..100 {
            assert_eq!(op.crossover(&p, &p), p);
        }
    }

    #[test]
    fn test_single_point_prefix_suffix() {
        let mut op = SinglePointCrossover::with_seed(42);
        let a = BitString::<16>::zeros();
        let b = BitString::<16>::ones();
        for _ in 0..100 {
            let child = op.crossover(&a, &b);
            // zeros then ones: a single boundary
            let cut = child.iter().position(|bit| bit).unwrap_or(16);
            assert!(child.iter().skip(cut).all(|bit| bit), "child {child}");
            assert!(cut < 16, "cut must lie in [0, N)");
        }
    }

    #[test]
    fn test_single_point_parents_untouched() {
        let mut op = SinglePointCrossover::with_seed(5);
        let (a, b) = random_pair::<24>(9);
        let (a0, b0) = (a, b);
        let _ = op.crossover(&a, &b);
        assert_eq!((a, b), (a0, b0));
    }

    // ---- Multi-point ----

    #[test]
    fn test_multi_point_zero_cuts_copies_first_parent() {
        let mut op = MultiPointCrossover::with_seed(0, 42);
        let (a, b) = random_pair::<20>(2);
        for _ in 0..20 {
            assert_eq!(op.crossover(&a, &b), a);
        }
    }

    #[test]
    fn test_multi_point_segment_count() {
        let mut op = MultiPointCrossover::with_seed(3, 42);
        let a = BitString::<40>::zeros();
        let b = BitString::<40>::ones();
        for _ in 0..100 {
            let child = op.crossover(&a, &b);
            let switches = child
                .as_slice()
                .windows(2)
                .filter(|w| w[0] != w[1])
                .count();
            // a cut at 0 switches before the first bit and is invisible
            assert!(switches == 3 || (switches == 2 && child[0]), "child {child}");
        }
    }

    #[test]
    fn test_multi_point_all_cuts() {
        // every position is a cut: bits alternate b, a, b, ...
        let mut op = MultiPointCrossover::with_seed(4, 1);
        let a = BitString::<4>::zeros();
        let b = BitString::<4>::ones();
        assert_eq!(op.crossover(&a, &b), BitString::from_bits([true, false, true, false]));
    }

    #[test]
    #[should_panic(expected = "distinct cuts")]
    fn test_multi_point_too_many_cuts() {
        let mut op = MultiPointCrossover::with_seed(5, 1);
        let a = BitString::<4>::zeros();
        let _ = op.crossover(&a, &a);
    }

    #[test]
    fn test_splice_explicit() {
        let a = BitString::<6>::zeros();
        let b = BitString::<6>::ones();
        let child = splice(&a, &b, &[1, 4]);
        assert_eq!(
            child,
            BitString::from_bits([false, true, true, true, false, false])
        );
    }

    // ---- Mutation ----

    #[test]
    fn test_mutation_zero_probability_is_identity() {
        let mut op = RandomMutation::with_seed(0.0, 42);
        let (p, _) = random_pair::<64>(4);
        assert_eq!(op.mutate(&p), p);
    }

    #[test]
    fn test_mutation_one_probability_is_complement() {
        let mut op = RandomMutation::with_seed(1.0, 42);
        let (p, _) = random_pair::<64>(4);
        assert_eq!(op.mutate(&p), !p);
    }

    #[test]
    fn test_mutation_in_place_returns_same_individual() {
        let mut op = RandomMutation::with_seed(1.0, 42);
        let mut p = BitString::<8>::zeros();
        let out = op.mutate_in_place(&mut p);
        out.flip(0);
        assert_eq!(p, BitString::from_u64(0b1111_1110));
    }

    #[test]
    fn test_mutation_copy_preserves_input() {
        let mut op = RandomMutation::with_seed(0.5, 42);
        let p = BitString::<64>::zeros();
        let _ = op.mutate(&p);
        assert_eq!(p, BitString::zeros());
    }

    #[test]
    fn test_mutation_copy_and_in_place_same_process() {
        let mut copy_op = RandomMutation::with_seed(0.3, 11);
        let mut place_op = RandomMutation::with_seed(0.3, 11);
        let (p, _) = random_pair::<64>(6);
        let mut q = p;
        place_op.mutate_in_place(&mut q);
        assert_eq!(copy_op.mutate(&p), q);
    }

    #[test]
    fn test_mutation_probability_clamped() {
        assert_eq!(RandomMutation::with_seed(1.5, 0).probability(), 1.0);
        assert_eq!(RandomMutation::with_seed(-0.2, 0).probability(), 0.0);
    }

    #[test]
    #[should_panic(expected = "NaN")]
    fn test_mutation_nan_probability() {
        let _ = RandomMutation::with_seed(f64::NAN, 0);
    }
}
