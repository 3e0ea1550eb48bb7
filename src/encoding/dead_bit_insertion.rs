//! Dead-bit insertion: a contiguous block of outer bits with no effect on
//! the score.

use crate::ga::{BitString, Objective};

/// Pads the inner individual with `M - N` bits that never affect the score.
///
/// The dead block starts at `position`: outer bits before it map to inner
/// bits `0..position` and outer bits after it map to the rest, in order.
#[derive(Debug, Clone)]
pub struct DeadBitInsertion<'a, O, const N: usize, const M: usize> {
    inner: &'a O,
    position: usize,
}

impl<'a, O, const N: usize, const M: usize> DeadBitInsertion<'a, O, N, M> {
    const COMPATIBLE: () = assert!(M >= N, "outer length must not be shorter than inner length");

    /// Number of ignored bits.
    pub const DEAD: usize = M.saturating_sub(N);

    /// Wraps `inner` with the dead block at the front.
    pub fn new(inner: &'a O) -> Self {
        Self::at(inner, 0)
    }

    /// Wraps `inner` with the dead block starting at outer bit `position`.
    ///
    /// # Panics
    /// Panics if `position > N`.
    pub fn at(inner: &'a O, position: usize) -> Self {
        #[allow(clippy::let_unit_value)]
        let () = Self::COMPATIBLE;
        assert!(
            position <= N,
            "dead block position {} past inner length {}",
            position,
            N
        );
        Self { inner, position }
    }

    /// The wrapped objective.
    pub fn inner(&self) -> &'a O {
        self.inner
    }

    /// First outer bit of the dead block.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Whether outer bit `index` is one of the ignored bits.
    pub fn is_dead(&self, index: usize) -> bool {
        (self.position..self.position + Self::DEAD).contains(&index)
    }

    /// Extracts the inner individual.
    pub fn decode(&self, outer: &BitString<M>) -> BitString<N> {
        let mut inner = BitString::zeros();
        for i in 0..N {
            let source = if i < self.position { i } else { i + Self::DEAD };
            inner.set(i, outer[source]);
        }
        inner
    }
}

impl<O, const N: usize, const M: usize> Objective<BitString<M>> for DeadBitInsertion<'_, O, N, M>
where
    O: Objective<BitString<N>>,
{
    fn evaluate(&self, individual: &BitString<M>) -> f64 {
        self.inner.evaluate(&self.decode(individual))
    }
}
