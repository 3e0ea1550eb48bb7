//! Property tests for the GA operators and the redundant encodings.

use proptest::prelude::*;
use u_redundancy::encoding::{DeadBitInsertion, DuplicateBits, MixInformation};
use u_redundancy::ga::{
    BitString, Crossover, ElitismSelection, MultiPointCrossover, Mutation, Objective, Population,
    ProbabilisticSelection, RandomMutation, Selection, SinglePointCrossover,
};

/// Weighted sum of the set bits; distinct weights make the score sensitive
/// to every position.
struct Weighted;

impl<const N: usize> Objective<BitString<N>> for Weighted {
    fn evaluate(&self, individual: &BitString<N>) -> f64 {
        individual
            .iter()
            .enumerate()
            .filter(|(_, bit)| *bit)
            .map(|(i, _)| (i + 1) as f64)
            .sum()
    }
}

fn population(entries: &[(u8, u16)]) -> Population<BitString<12>> {
    entries
        .iter()
        .map(|&(fitness, bits)| (fitness as f64, BitString::from_u64(bits as u64)))
        .collect()
}

fn occurrences(population: &Population<BitString<12>>, entry: &(f64, BitString<12>)) -> usize {
    population.iter().filter(|e| *e == entry).count()
}

fn is_sub_multiset(sub: &Population<BitString<12>>, of: &Population<BitString<12>>) -> bool {
    sub.iter()
        .all(|entry| occurrences(sub, entry) <= occurrences(of, entry))
}

fn entries() -> impl Strategy<Value = Vec<(u8, u16)>> {
    prop::collection::vec((0u8..16, any::<u16>()), 1..48)
}

proptest! {
    // ---- Selection ----

    #[test]
    fn elitism_keeps_a_sorted_prefix(entries in entries(), p in 0.01f64..=1.0) {
        let input = population(&entries);
        let mut selection = ElitismSelection::new(p);
        let output = selection.select(&input);

        prop_assert!(!output.is_empty());
        prop_assert_eq!(output.len(), selection.survivor_count(input.len()));
        prop_assert!(is_sub_multiset(&output, &input));
        prop_assert_eq!(output.as_slice(), &input.as_slice()[..output.len()]);
    }

    #[test]
    fn probabilistic_keeps_a_nonempty_subset(entries in entries(), seed in any::<u64>()) {
        let input = population(&entries);
        let mut selection = ProbabilisticSelection::with_seed(seed);
        let output = selection.select(&input);

        prop_assert!(!output.is_empty());
        prop_assert!(output.len() <= input.len());
        prop_assert!(is_sub_multiset(&output, &input));
        prop_assert_eq!(output.best().map(|e| e.0), input.best().map(|e| e.0));
    }

    // ---- Crossover ----

    #[test]
    fn single_point_of_identical_parents(bits in any::<u16>(), seed in any::<u64>()) {
        let parent = BitString::<16>::from_u64(bits as u64);
        let mut crossover = SinglePointCrossover::with_seed(seed);
        prop_assert_eq!(crossover.crossover(&parent, &parent), parent);
    }

    #[test]
    fn multi_point_child_takes_each_bit_from_a_parent(
        a in any::<u16>(),
        b in any::<u16>(),
        k in 0usize..=16,
        seed in any::<u64>(),
    ) {
        let a = BitString::<16>::from_u64(a as u64);
        let b = BitString::<16>::from_u64(b as u64);
        let mut crossover = MultiPointCrossover::with_seed(k, seed);
        let child = crossover.crossover(&a, &b);
        for i in 0..16 {
            prop_assert!(child[i] == a[i] || child[i] == b[i]);
        }
        if k == 0 {
            prop_assert_eq!(child, a);
        }
    }

    // ---- Mutation ----

    #[test]
    fn mutation_extremes(bits in any::<u32>(), seed in any::<u64>()) {
        let individual = BitString::<32>::from_u64(bits as u64);

        let mut never = RandomMutation::with_seed(0.0, seed);
        prop_assert_eq!(never.mutate(&individual), individual);

        let mut always = RandomMutation::with_seed(1.0, seed);
        prop_assert_eq!(always.mutate(&individual), !individual);
    }

    // ---- Encodings ----

    #[test]
    fn duplicated_groups_score_like_inner(bits in 0u64..64, offset in 0usize..4) {
        let inner = BitString::<6>::from_u64(bits);
        let objective = DuplicateBits::<_, 6, 24>::new(&Weighted, offset);
        let outer = DuplicateBits::<Weighted, 6, 24>::encode(&inner);
        prop_assert_eq!(objective.evaluate(&outer), Weighted.evaluate(&inner));
    }

    #[test]
    fn only_the_offset_bit_of_a_group_matters(bits in any::<u32>(), flip in 0usize..24) {
        let objective = DuplicateBits::<_, 6, 24>::new(&Weighted, 1);
        let outer = BitString::<24>::from_u64(bits as u64);
        let mut flipped = outer;
        flipped.flip(flip);
        let changed = objective.evaluate(&flipped) != objective.evaluate(&outer);
        prop_assert_eq!(changed, flip % 4 == 1);
    }

    #[test]
    fn dead_bits_never_change_the_score(
        bits in any::<u16>(),
        position in 0usize..=6,
        flip in 0usize..16,
    ) {
        let objective = DeadBitInsertion::<_, 6, 16>::at(&Weighted, position);
        let outer = BitString::<16>::from_u64(bits as u64);
        let mut flipped = outer;
        flipped.flip(flip);
        let changed = objective.evaluate(&flipped) != objective.evaluate(&outer);
        prop_assert_eq!(changed, !objective.is_dead(flip));
    }

    #[test]
    fn mixing_a_uniform_string_is_uniform(range in 1usize..=18, ones in any::<bool>()) {
        let objective = MixInformation::<_, 6, 18>::new(&Weighted, range);
        let outer = if ones { BitString::<18>::ones() } else { BitString::zeros() };
        let expected = if ones { BitString::<6>::ones() } else { BitString::zeros() };
        prop_assert_eq!(objective.decode(&outer), expected);
    }
}
