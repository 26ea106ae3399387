//! Lexicographic combination enumeration.
//!
//! This crate enumerates all `k`-element combinations of an `n`-element set in
//! lexicographic order, without allocating per combination.
//!
//! # Overview
//!
//! 1. **Index generator** - [`indices`]: [`CombinationIndices`] steps a sorted index buffer
//!    to its lexicographic successor.
//! 2. **Streams** - [`stream`]: the [`CombinationStream`] trait. Each yielded combination
//!    borrows a buffer owned by the stream, so it is only valid until the next call.
//!    Use [`CombinationStream::owned`] to get a standard [`Iterator`] of owned copies.
//! 3. **Projections** - [`projection`]: [`StringCombinations`] and [`Combinations`] map
//!    index combinations onto the bytes of a string or the elements of a slice.
//!
//! Out-of-range parameters (`k == 0` or `k > n`) are not errors: they produce a
//! sequence with zero combinations.
//!
//! # Examples
//!
//! ```
//! use permute::{CombinationStream as _, combination_indices, string_combinations};
//!
//! let mut indices = combination_indices(3, 2);
//! assert_eq!(indices.next_combination(), Some(&[0, 1][..]));
//! assert_eq!(indices.next_combination(), Some(&[0, 2][..]));
//! assert_eq!(indices.next_combination(), Some(&[1, 2][..]));
//! assert_eq!(indices.next_combination(), None);
//!
//! let words: Vec<_> = string_combinations("abc", 2)
//!     .owned()
//!     .map(|bytes| String::from_utf8(bytes).unwrap())
//!     .collect();
//! assert_eq!(words, ["ab", "ac", "bc"]);
//! ```

pub use self::{
    binomial::binomial,
    indices::{CombinationIndices, combination_indices},
    projection::{Combinations, StringCombinations, combinations, string_combinations},
    stream::{CombinationStream, Owned},
};

mod binomial;
pub mod indices;
pub mod projection;
pub mod stream;

#[cfg(test)]
mod testing;
