//! Bit duplication: every meaningful bit repeated across a fixed-size group.

use crate::ga::{BitString, Objective};

/// Encodes every inner bit as a group of `M / N` consecutive outer bits.
///
/// Inner bit `i` is read from outer bit `i * (M / N) + offset`; the other
/// bits of the group are redundant copies that a GA is free to drift.
///
/// # Examples
///
/// ```
/// use u_redundancy::encoding::DuplicateBits;
/// use u_redundancy::ga::{BitString, Objective};
///
/// struct CountOnes;
/// impl Objective<BitString<2>> for CountOnes {
///     fn evaluate(&self, individual: &BitString<2>) -> f64 {
///         individual.count_ones() as f64
///     }
/// }
///
/// let inner = CountOnes;
/// let tripled = DuplicateBits::<_, 2, 6>::new(&inner, 1);
/// // groups [0, 1, 2] and [3, 4, 5]: bits 1 and 4 count
/// let outer = BitString::<6>::from_bits([false, true, false, true, false, true]);
/// assert_eq!(tripled.evaluate(&outer), 1.0);
/// ```
#[derive(Debug, Clone)]
pub struct DuplicateBits<'a, O, const N: usize, const M: usize> {
    inner: &'a O,
    offset: usize,
}

impl<'a, O, const N: usize, const M: usize> DuplicateBits<'a, O, N, M> {
    const COMPATIBLE: () = assert!(
        N > 0 && M % N == 0,
        "outer length must be a non-zero multiple of inner length"
    );

    /// Outer bits per inner bit.
    pub const REDUNDANCY: usize = if N == 0 { 0 } else { M / N };

    /// Wraps `inner`, reading the bit at `offset` in each group.
    ///
    /// # Panics
    /// Panics if `offset >= M / N`.
    pub fn new(inner: &'a O, offset: usize) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::COMPATIBLE;
        assert!(
            offset < Self::REDUNDANCY,
            "offset {} outside a group of {} bits",
            offset,
            Self::REDUNDANCY
        );
        Self { inner, offset }
    }

    /// The wrapped objective.
    pub fn inner(&self) -> &'a O {
        self.inner
    }

    /// Position of the meaningful bit within each group.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Extracts the inner individual.
    pub fn decode(&self, outer: &BitString<M>) -> BitString<N> {
        let mut inner = BitString::zeros();
        for i in 0..N {
            inner.set(i, outer[i * Self::REDUNDANCY + self.offset]);
        }
        inner
    }

    /// Builds the outer individual whose groups all repeat the inner bit.
    pub fn encode(inner: &BitString<N>) -> BitString<M> {
        let mut outer = BitString::zeros();
        for j in 0..M {
            outer.set(j, inner[j / Self::REDUNDANCY]);
        }
        outer
    }
}

impl<O, const N: usize, const M: usize> Objective<BitString<M>> for DuplicateBits<'_, O, N, M>
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
    fn test_redundancy() {
        assert_eq!(DuplicateBits::<Binary, 4, 12>::REDUNDANCY, 3);
        assert_eq!(DuplicateBits::<Binary, 4, 4>::REDUNDANCY, 1);
    }

    #[test]
    fn test_agreeing_groups_match_inner() {
        let inner = Binary;
        for offset in 0..3 {
            let objective = DuplicateBits::<_, 4, 12>::new(&inner, offset);
            for value in 0..16 {
                let small = BitString::<4>::from_u64(value);
                let big = DuplicateBits::<Binary, 4, 12>::encode(&small);
                assert_eq!(objective.decode(&big), small);
                assert_eq!(objective.evaluate(&big), inner.evaluate(&small));
            }
        }
    }

    #[test]
    fn test_offset_selects_bit() {
        let inner = Binary;
        let objective = DuplicateBits::<_, 2, 4>::new(&inner, 1);
        // groups [0, 1] and [2, 3]; only bits 1 and 3 count
        let outer = BitString::<4>::from_bits([true, false, false, true]);
        assert_eq!(objective.decode(&outer), BitString::from_bits([false, true]));
        assert_eq!(objective.evaluate(&outer), 2.0);
    }

    #[test]
    fn test_redundant_bits_ignored() {
        let inner = Binary;
        let objective = DuplicateBits::<_, 3, 9>::new(&inner, 0);
        let a = BitString::<9>::from_u64(0b001_001_001);
        let b = BitString::<9>::from_u64(0b111_011_101);
        assert_eq!(objective.evaluate(&a), objective.evaluate(&b));
    }

    #[test]
    #[should_panic(expected = "outside a group")]
    fn test_offset_out_of_range() {
        let inner = Binary;
        let _ = DuplicateBits::<_, 4, 8>::new(&inner, 2);
    }
}
