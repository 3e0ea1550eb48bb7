//! Redundant bit-string encodings.
//!
//! Each type here is an [`Objective`](crate::ga::Objective) over a long
//! `BitString<M>` that decodes the individual into a shorter
//! `BitString<N>` and delegates to a borrowed inner objective. Running the
//! same GA on the inner objective directly and through a decorator measures
//! how the redundancy of the genome changes convergence.
//!
//! | Decorator | Length constraint | Mapping |
//! |---|---|---|
//! | [`DuplicateBits`] | `M % N == 0` | one bit at `offset` in each group of `M / N` |
//! | [`DeadBitInsertion`] | `M >= N` | `M - N` ignored bits at `position` |
//! | [`MixInformation`] | `M >= N` | majority of a `range`-bit window |
//!
//! Length constraints are checked when the decorator is instantiated, so an
//! incompatible pair of lengths fails to compile. The inner objective is
//! borrowed for `'a` and must outlive the decorator.

mod dead_bit_insertion;
mod duplicate_bits;
mod mix_information;

pub use dead_bit_insertion::DeadBitInsertion;
pub use duplicate_bits::DuplicateBits;
pub use mix_information::MixInformation;
