//! Packed bit vectors backed by 32-bit storage words.
//! `no_std` with `alloc`, no `unsafe`.
//!
//! Two variants share one bit layout and one algorithm set:
//!
//! - [`BitVector`]: heap-allocated and resizable at runtime.
//! - [`FixedBitVector`]: `WORD_COUNT` words stored inline, sized at compile
//!   time.
//!
//! Bit `b` lives in word `b / 32` at offset `b % 32`; offset 0 is the least
//! significant bit of the word.
//!
//! # Examples
//! ```
//! use bitstring::{BitVector, FixedBitVector};
//!
//! let mut dynamic = BitVector::new(2)?;
//! dynamic.set(33);
//! assert_eq!(dynamic.first_set_bit(), Some(33));
//! dynamic.resize(4)?;
//! assert!(dynamic.get(33));
//!
//! let mut fixed = FixedBitVector::<1>::new();
//! fixed.set_all(true);
//! fixed.clear(7);
//! assert_eq!(fixed.first_unset_bit(), Some(7));
//! assert_eq!(fixed.popcount(), 31);
//! # Ok::<(), bitstring::Error>(())
//! ```
//!
//! # Features
//!
//! - Bit-level `set`, `clear`, `get`, `toggle` and bulk `set_all`,
//!   `set_range`, `clear_range`
//! - Word-accelerated scans: `popcount`, `first_set_bit`, `first_unset_bit`,
//!   `trailing_zero_count`, `leading_zero_count`, `next_set_bit`,
//!   `next_unset_bit`
//! - Iteration over all bits, set bits or unset bits
//! - Rendering as a `'0'`/`'1'` string via [`Display`](core::fmt::Display)
//!   and as per-word binary dump lines
//! - Fallible allocation: [`BitVector::new`] and [`BitVector::resize`]
//!   report [`Error::AllocationFailed`] instead of aborting
//!
//! # Cargo features
//!
//! - `bounds-check`: assert every bit index and dump line against the
//!   vector's capacity with a descriptive panic message.

#![deny(missing_docs)]
#![forbid(unsafe_code)]
#![no_std]

extern crate alloc;

mod dynamic;
mod error;
mod fixed;
mod iter;
mod words;
#[cfg(test)]
mod tests;

pub use dynamic::BitVector;
pub use error::{Error, Result};
pub use fixed::FixedBitVector;
pub use iter::{Bits, IterOnes, IterZeros};
pub use words::{BYTES_PER_WORD, WORD_BITS, Word, words_for_bits};
