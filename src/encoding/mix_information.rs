//! Information mixing: every inner bit decided by a majority over a window
//! of outer bits.

use crate::ga::{BitString, Objective};

/// Spreads every inner bit over a window of `range` outer bits.
///
/// Inner bit `i` reads the window that starts at outer bit `i * M / N` and
/// wraps past the end of the string. It is set when strictly more than half
/// the window is set; on an exact tie it takes the window's first bit.
/// Windows overlap once `range > M / N`, so one outer bit can influence
/// several inner bits.
#[derive(Debug, Clone)]
pub struct MixInformation<'a, O, const N: usize, const M: usize> {
    inner: &'a O,
    range: usize,
}

impl<'a, O, const N: usize, const M: usize> MixInformation<'a, O, N, M> {
    const COMPATIBLE: () = assert!(M >= N, "outer length must not be shorter than inner length");

    /// Wraps `inner`, reading `range` bits per inner bit.
    ///
    /// # Panics
    /// Panics if `range` is 0 or larger than `M`.
    pub fn new(inner: &'a O, range: usize) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::COMPATIBLE;
        assert!(
            (1..=M).contains(&range),
            "range {} must be in 1..={}",
            range,
            M
        );
        Self { inner, range }
    }

    /// The wrapped objective.
    pub fn inner(&self) -> &'a O {
        self.inner
    }

    /// Outer bits read per inner bit.
    pub fn range(&self) -> usize {
        self.range
    }

    /// First outer bit of the window behind inner bit `index`.
    pub fn window_start(index: usize) -> usize {
        index * M / N
    }

    /// Extracts the inner individual.
    pub fn decode(&self, outer: &BitString<M>) -> BitString<N> {
        let mut inner = BitString::zeros();
        for i in 0..N {
            let start = Self::window_start(i);
            let ones = (0..self.range)
                .filter(|k| outer[(start + k) % M])
                .count();
            let bit = match (2 * ones).cmp(&self.range) {
                std::cmp::Ordering::Greater => true,
                std::cmp::Ordering::Less => false,
                std::cmp::Ordering::Equal => outer[start],
            };
            inner.set(i, bit);
        }
        inner
    }
}

impl<O, const N: usize, const M: usize> Objective<BitString<M>> for MixInformation<'_, O, N, M>
where
    O: Objective<BitString<N>>,
{
    fn evaluate(&self, individual: &BitString<M>) -> f64 {
        self.inner.evaluate(&self.decode(individual))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::testing::Binary;

    #[test]
    fn test_window_start() {
        assert_eq!(MixInformation::<Binary, 4, 12>::window_start(0), 0);
        assert_eq!(MixInformation::<Binary, 4, 12>::window_start(1), 3);
        assert_eq!(MixInformation::<Binary, 4, 12>::window_start(3), 9);
        // uneven ratio rounds down
        assert_eq!(MixInformation::<Binary, 3, 8>::window_start(1), 2);
        assert_eq!(MixInformation::<Binary, 3, 8>::window_start(2), 5);
    }

    #[test]
    fn test_range_one_copies_window_start() {
        let inner = Binary;
        let objective = MixInformation::<_, 4, 8>::new(&inner, 1);
        // starts 0, 2, 4, 6
        let outer = BitString::<8>::from_bits([true, false, false, true, true, true, false, false]);
        assert_eq!(
            objective.decode(&outer),
            BitString::from_bits([true, false, true, false])
        );
    }

    #[test]
    fn test_majority() {
        let inner = Binary;
        let objective = MixInformation::<_, 2, 6>::new(&inner, 3);
        // windows [0, 1, 2] and [3, 4, 5]
        let outer = BitString::<6>::from_bits([false, true, true, true, false, false]);
        assert_eq!(objective.decode(&outer), BitString::from_bits([true, false]));
    }

    #[test]
    fn test_tie_takes_first_bit() {
        let inner = Binary;
        let objective = MixInformation::<_, 2, 4>::new(&inner, 2);
        let outer = BitString::<4>::from_bits([true, false, false, true]);
        assert_eq!(objective.decode(&outer), BitString::from_bits([true, false]));
        let outer = BitString::<4>::from_bits([false, true, true, false]);
        assert_eq!(objective.decode(&outer), BitString::from_bits([false, true]));
    }

    #[test]
    fn test_window_wraps() {
        let inner = Binary;
        let objective = MixInformation::<_, 2, 4>::new(&inner, 3);
        // window of bit 1 is [2, 3, 0]
        let outer = BitString::<4>::from_bits([true, false, false, true]);
        assert_eq!(objective.decode(&outer), BitString::from_bits([false, true]));
    }

    #[test]
    fn test_uniform_outer_decodes_uniform() {
        let inner = Binary;
        for range in 1..=10 {
            let objective = MixInformation::<_, 5, 10>::new(&inner, range);
            assert_eq!(objective.decode(&BitString::ones()), BitString::ones());
            assert_eq!(objective.decode(&BitString::zeros()), BitString::zeros());
        }
    }

    #[test]
    fn test_evaluate_delegates() {
        let inner = Binary;
        let objective = MixInformation::<_, 3, 3>::new(&inner, 1);
        let outer = BitString::<3>::from_bits([false, true, true]);
        assert_eq!(objective.evaluate(&outer), 6.0);
    }

    #[test]
    #[should_panic(expected = "must be in")]
    fn test_zero_range() {
        let inner = Binary;
        let _ = MixInformation::<_, 2, 4>::new(&inner, 0);
    }

    #[test]
    #[should_panic(expected = "must be in")]
    fn test_range_too_long() {
        let inner = Binary;
        let _ = MixInformation::<_, 2, 4>::new(&inner, 5);
    }
}
