//! Lazy sequences of combinations that lend a reused buffer.
//!
//! Every stream in this crate writes the current combination into a buffer it
//! owns and hands out a borrow of that buffer. The borrow ends at the next call
//! to [`CombinationStream::next_combination`], so the buffer can be mutated in
//! place without allocating per combination. Callers that need to keep a
//! combination must copy it, or use [`CombinationStream::owned`].
//!
//! # Examples
//!
//! Push-style traversal with early termination:
//!
//! ```
//! use std::ops::ControlFlow;
//!
//! use permute::{CombinationStream as _, combination_indices};
//!
//! let found = combination_indices(5, 3).try_for_each_combination(|indices| {
//!     if indices.iter().sum::<usize>() == 7 {
//!         ControlFlow::Break(indices.to_vec())
//!     } else {
//!         ControlFlow::Continue(())
//!     }
//! });
//! assert_eq!(found, ControlFlow::Break(vec![0, 3, 4]));
//! ```

use std::{iter::FusedIterator, ops::ControlFlow};

/// A finite, non-restartable sequence of combinations that lends each one from a
/// reused buffer.
///
/// Once [`next_combination`] returns `None`, it keeps returning `None`.
///
/// [`next_combination`]: CombinationStream::next_combination
pub trait CombinationStream {
    /// The borrowed view of one combination, such as `[usize]` or `[u8]`.
    type Item: ?Sized;

    /// Advances the stream and returns the next combination.
    ///
    /// The returned view is valid until the next call.
    fn next_combination(&mut self) -> Option<&Self::Item>;

    /// Returns the bounds on the remaining number of combinations.
    ///
    /// The semantics match [`Iterator::size_hint`].
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, None)
    }

    /// Calls `f` on each remaining combination until it returns
    /// [`ControlFlow::Break`].
    ///
    /// No further combination is computed after `f` breaks.
    fn try_for_each_combination<B, F>(&mut self, mut f: F) -> ControlFlow<B>
    where
        F: FnMut(&Self::Item) -> ControlFlow<B>,
    {
        while let Some(item) = self.next_combination() {
            f(item)?;
        }
        ControlFlow::Continue(())
    }

    /// Calls `f` on each remaining combination.
    fn for_each_combination<F>(&mut self, mut f: F)
    where
        F: FnMut(&Self::Item),
    {
        let _ = self.try_for_each_combination(|item| {
            f(item);
            ControlFlow::<()>::Continue(())
        });
    }

    /// Converts the stream into an [`Iterator`] that yields an owned copy of
    /// each combination.
    ///
    /// # Examples
    ///
    /// ```
    /// use permute::{CombinationStream as _, combinations};
    ///
    /// let pairs: Vec<Vec<char>> = combinations(&['x', 'y', 'z'], 2).owned().collect();
    /// assert_eq!(pairs, [['x', 'y'], ['x', 'z'], ['y', 'z']]);
    /// ```
    fn owned(self) -> Owned<Self>
    where
        Self: Sized,
        Self::Item: ToOwned,
    {
        Owned { stream: self }
    }
}

impl<S> CombinationStream for &mut S
where
    S: CombinationStream + ?Sized,
{
    type Item = S::Item;

    fn next_combination(&mut self) -> Option<&Self::Item> {
        (**self).next_combination()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (**self).size_hint()
    }
}

/// Iterator over owned copies of the combinations of a [`CombinationStream`].
///
/// Created by [`CombinationStream::owned`].
#[derive(Debug, Clone)]
pub struct Owned<S> {
    stream: S,
}

impl<S> Owned<S> {
    /// Returns the underlying stream.
    #[must_use]
    pub fn into_inner(self) -> S {
        self.stream
    }
}

impl<S> Iterator for Owned<S>
where
    S: CombinationStream,
    S::Item: ToOwned,
{
    type Item = <S::Item as ToOwned>::Owned;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.stream.next_combination().map(ToOwned::to_owned)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.stream.size_hint()
    }
}

impl<S> FusedIterator for Owned<S>
where
    S: CombinationStream,
    S::Item: ToOwned,
{
}
