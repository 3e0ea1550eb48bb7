//! Fixed-length bit-string individual.

use super::types::Representation;
use rand::Rng;
use std::fmt;
use std::ops::{BitAnd, BitOr, BitXor, Index, Not};

/// A string of exactly `N` bits.
///
/// The length is part of the type, so every individual of a population has
/// the same length and crossover between different lengths does not compile.
/// Bit `i` corresponds to bit `i` of the integer given to
/// [`from_u64`](Self::from_u64).
///
/// # Examples
///
/// ```
/// use u_redundancy::ga::BitString;
///
/// let mut bits = BitString::<4>::from_u64(0b0110);
/// assert!(!bits[0] && bits[1] && bits[2] && !bits[3]);
///
/// bits.flip(0);
/// assert_eq!(bits.to_string(), "0111");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BitString<const N: usize> {
    bits: [bool; N],
}

impl<const N: usize> BitString<N> {
    /// Number of bits.
    pub const LEN: usize = N;

    /// All bits cleared.
    pub fn zeros() -> Self {
        Self { bits: [false; N] }
    }

    /// All bits set.
    pub fn ones() -> Self {
        Self { bits: [true; N] }
    }

    /// Builds a bit string from the low-order `N` bits of `value`.
    ///
    /// Bits at index 64 and above are cleared.
    pub fn from_u64(value: u64) -> Self {
        let mut out = Self::zeros();
        for (i, bit) in out.bits.iter_mut().enumerate().take(64) {
            *bit = (value >> i) & 1 == 1;
        }
        out
    }

    /// Builds a bit string from an array of bits.
    pub fn from_bits(bits: [bool; N]) -> Self {
        Self { bits }
    }

    /// Number of bits.
    pub fn len(&self) -> usize {
        N
    }

    /// Whether the bit string has zero length.
    pub fn is_empty(&self) -> bool {
        N == 0
    }

    /// Reads bit `index`.
    ///
    /// # Panics
    /// Panics if `index >= N`.
    pub fn get(&self, index: usize) -> bool {
        self.bits[index]
    }

    /// Writes bit `index`.
    ///
    /// # Panics
    /// Panics if `index >= N`.
    pub fn set(&mut self, index: usize, value: bool) {
        self.bits[index] = value;
    }

    /// Inverts bit `index`.
    ///
    /// # Panics
    /// Panics if `index >= N`.
    pub fn flip(&mut self, index: usize) {
        self.bits[index] = !self.bits[index];
    }

    /// Number of set bits.
    pub fn count_ones(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// Iterates over the bits from index 0 upwards.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().copied()
    }

    /// The bits as a slice.
    pub fn as_slice(&self) -> &[bool] {
        &self.bits
    }

    /// The bits as a mutable slice.
    pub fn as_mut_slice(&mut self) -> &mut [bool] {
        &mut self.bits
    }

    fn zip_with(self, rhs: Self, f: impl Fn(bool, bool) -> bool) -> Self {
        let mut out = self;
        for (a, b) in out.bits.iter_mut().zip(rhs.bits) {
            *a = f(*a, b);
        }
        out
    }
}

impl<const N: usize> Default for BitString<N> {
    fn default() -> Self {
        Self::zeros()
    }
}

impl<const N: usize> Representation for BitString<N> {
    fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for bit in self.bits.iter_mut() {
            *bit = rng.random_bool(0.5);
        }
    }
}

impl<const N: usize> Index<usize> for BitString<N> {
    type Output = bool;

    fn index(&self, index: usize) -> &bool {
        &self.bits[index]
    }
}

impl<const N: usize> Not for BitString<N> {
    type Output = Self;

    fn not(mut self) -> Self {
        for bit in self.bits.iter_mut() {
            *bit = !*bit;
        }
        self
    }
}

impl<const N: usize> BitAnd for BitString<N> {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        self.zip_with(rhs, |a, b| a & b)
    }
}

impl<const N: usize> BitOr for BitString<N> {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.zip_with(rhs, |a, b| a | b)
    }
}

impl<const N: usize> BitXor for BitString<N> {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self {
        self.zip_with(rhs, |a, b| a ^ b)
    }
}

impl<const N: usize> From<[bool; N]> for BitString<N> {
    fn from(bits: [bool; N]) -> Self {
        Self::from_bits(bits)
    }
}

/// Most significant bit first, matching the usual binary notation.
impl<const N: usize> fmt::Display for BitString<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &bit in self.bits.iter().rev() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        Ok(())
    }
}
