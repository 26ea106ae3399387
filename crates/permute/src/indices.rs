//! Lexicographic generation of index combinations.
//!
//! [`CombinationIndices`] enumerates the `k`-element subsets of `0..n` as strictly
//! increasing index sequences, in lexicographic order. A single buffer of `k`
//! indices is stepped to its successor in place, so the whole enumeration uses
//! `O(k)` memory and at most `O(k)` work per combination.
//!
//! # Parameter policy
//!
//! Parameters that admit no non-empty combination are not errors. If `k == 0` or
//! `k > n`, the generator yields nothing. This includes `n == 0, k == 0`: the
//! empty combination is never produced.
//!
//! # Examples
//!
//! ```
//! use permute::{CombinationStream as _, combination_indices};
//!
//! let all: Vec<Vec<usize>> = combination_indices(4, 3).owned().collect();
//! assert_eq!(all, [[0, 1, 2], [0, 1, 3], [0, 2, 3], [1, 2, 3]]);
//!
//! assert_eq!(combination_indices(2, 3).owned().count(), 0);
//! ```

use crate::{CombinationStream, binomial};

/// Returns a generator over the `k`-element combinations of `0..n` in
/// lexicographic order.
///
/// Equivalent to [`CombinationIndices::new`].
#[must_use]
#[inline]
pub fn combination_indices(n: usize, k: usize) -> CombinationIndices {
    CombinationIndices::new(n, k)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// The buffer holds the first combination, not yet yielded.
    Start,
    /// The buffer holds the last yielded combination.
    Yielded,
    Exhausted,
}

/// Generator over the `k`-element combinations of `0..n`, in lexicographic order.
///
/// Each combination is a strictly increasing slice of `k` indices less than `n`,
/// lent from an internal buffer by [`CombinationStream::next_combination`]. The
/// buffer is advanced only when the next combination is requested, so stopping
/// early leaves it untouched.
///
/// If `k == 0` or `k > n`, the generator yields nothing.
///
/// # Examples
///
/// ```
/// use permute::{CombinationIndices, CombinationStream as _};
///
/// let mut generator = CombinationIndices::new(5, 3);
/// let mut sums = vec![];
/// while let Some(indices) = generator.next_combination() {
///     sums.push(indices.iter().sum::<usize>());
/// }
/// assert_eq!(sums, [3, 4, 5, 5, 6, 7, 6, 7, 8, 9]);
/// ```
#[derive(Debug, Clone)]
pub struct CombinationIndices {
    n: usize,
    k: usize,
    indices: Vec<usize>,
    state: State,
}

impl CombinationIndices {
    /// Creates a generator over the `k`-element combinations of `0..n`.
    ///
    /// If `k == 0` or `k > n`, the returned generator yields nothing.
    #[must_use]
    pub fn new(n: usize, k: usize) -> Self {
        if k == 0 || k > n {
            log::trace!("no combinations of {k} out of {n}");
            return Self {
                n,
                k,
                indices: Vec::new(),
                state: State::Exhausted,
            };
        }
        Self {
            n,
            k,
            indices: (0..k).collect(),
            state: State::Start,
        }
    }

    /// Creates a generator from signed sizes.
    ///
    /// Negative sizes, and sizes that do not fit in `usize`, yield nothing. The
    /// resulting generator then reports `n() == 0` and `k() == 0`.
    ///
    /// # Examples
    ///
    /// ```
    /// use permute::{CombinationIndices, CombinationStream as _};
    ///
    /// assert_eq!(CombinationIndices::from_signed(4, 2).owned().count(), 6);
    /// assert_eq!(CombinationIndices::from_signed(-1, 2).owned().count(), 0);
    /// assert_eq!(CombinationIndices::from_signed(4, -2).owned().count(), 0);
    /// ```
    #[must_use]
    pub fn from_signed(n: i64, k: i64) -> Self {
        match (usize::try_from(n), usize::try_from(k)) {
            (Ok(n), Ok(k)) => Self::new(n, k),
            _ => {
                log::trace!("no combinations of {k} out of {n}");
                Self {
                    n: 0,
                    k: 0,
                    indices: Vec::new(),
                    state: State::Exhausted,
                }
            }
        }
    }

    /// Returns the size of the set combinations are drawn from.
    #[must_use]
    #[inline]
    pub fn n(&self) -> usize {
        self.n
    }

    /// Returns the number of indices in each combination.
    #[must_use]
    #[inline]
    pub fn k(&self) -> usize {
        self.k
    }

    /// Returns the last yielded combination.
    ///
    /// Returns `None` before the first combination is requested and after the
    /// generator is exhausted.
    #[must_use]
    #[inline]
    pub fn current(&self) -> Option<&[usize]> {
        (self.state == State::Yielded).then_some(self.indices.as_slice())
    }

    /// Returns the number of combinations not yet yielded.
    ///
    /// Returns `None` if the count does not fit in `usize`.
    ///
    /// # Examples
    ///
    /// ```
    /// use permute::{CombinationIndices, CombinationStream as _};
    ///
    /// let mut generator = CombinationIndices::new(5, 3);
    /// assert_eq!(generator.remaining(), Some(10));
    /// generator.next_combination();
    /// assert_eq!(generator.remaining(), Some(9));
    /// ```
    #[must_use]
    pub fn remaining(&self) -> Option<usize> {
        match self.state {
            State::Start => binomial(self.n, self.k),
            // Combinations after `c` in lexicographic order number
            // sum over i of C(n - 1 - c[i], k - i).
            State::Yielded => self
                .indices
                .iter()
                .enumerate()
                .try_fold(0_usize, |acc, (i, &c)| {
                    acc.checked_add(binomial(self.n - 1 - c, self.k - i)?)
                }),
            State::Exhausted => Some(0),
        }
    }

    /// Steps the buffer to its lexicographic successor.
    ///
    /// Returns `false`, leaving the buffer unchanged, if it already holds the
    /// last combination.
    fn advance(&mut self) -> bool {
        let offset = self.n - self.k;
        let Some(i) = (0..self.k)
            .rev()
            .find(|&i| self.indices[i] != i + offset)
        else {
            return false;
        };

        self.indices[i] += 1;
        let base = self.indices[i];
        for (slot, value) in self.indices[i + 1..].iter_mut().zip(base + 1..) {
            *slot = value;
        }
        true
    }
}

impl CombinationStream for CombinationIndices {
    type Item = [usize];

    fn next_combination(&mut self) -> Option<&[usize]> {
        match self.state {
            State::Start => self.state = State::Yielded,
            State::Yielded => {
                if !self.advance() {
                    log::trace!("exhausted combinations of {} out of {}", self.k, self.n);
                    self.state = State::Exhausted;
                    return None;
                }
            }
            State::Exhausted => return None,
        }
        Some(&self.indices)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining() {
            Some(n) => (n, Some(n)),
            None => (usize::MAX, None),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::ops::ControlFlow;

    use proptest::prelude::*;

    use super::*;
    use crate::testing::collect_owned;

    #[test]
    fn test_three_choose_two() {
        assert_eq!(
            collect_owned(combination_indices(3, 2)),
            [[0, 1], [0, 2], [1, 2]]
        );
    }

    #[test]
    fn test_five_choose_three() {
        assert_eq!(
            collect_owned(combination_indices(5, 3)),
            [
                [0, 1, 2],
                [0, 1, 3],
                [0, 1, 4],
                [0, 2, 3],
                [0, 2, 4],
                [0, 3, 4],
                [1, 2, 3],
                [1, 2, 4],
                [1, 3, 4],
                [2, 3, 4],
            ]
        );
    }

    #[test]
    fn test_k_equals_n_yields_identity_once() {
        assert_eq!(collect_owned(combination_indices(4, 4)), [[0, 1, 2, 3]]);
    }

    #[test]
    fn test_k_one_yields_each_index() {
        assert_eq!(
            collect_owned(combination_indices(4, 1)),
            [[0], [1], [2], [3]]
        );
    }

    #[test]
    fn test_k_greater_than_n_yields_nothing() {
        assert!(collect_owned(combination_indices(3, 4)).is_empty());
        assert!(collect_owned(combination_indices(0, 1)).is_empty());
    }

    #[test]
    fn test_zero_k_yields_nothing() {
        assert!(collect_owned(combination_indices(0, 0)).is_empty());
        assert!(collect_owned(combination_indices(5, 0)).is_empty());
    }

    #[test]
    fn test_negative_sizes_yield_nothing() {
        assert!(collect_owned(CombinationIndices::from_signed(-1, 0)).is_empty());
        assert!(collect_owned(CombinationIndices::from_signed(-3, -1)).is_empty());
        assert!(collect_owned(CombinationIndices::from_signed(3, -1)).is_empty());
        assert_eq!(
            collect_owned(CombinationIndices::from_signed(3, 2)),
            [[0, 1], [0, 2], [1, 2]]
        );
    }

    #[test]
    fn test_stays_exhausted() {
        let mut generator = combination_indices(2, 1);
        assert_eq!(generator.next_combination(), Some(&[0][..]));
        assert_eq!(generator.next_combination(), Some(&[1][..]));
        assert_eq!(generator.next_combination(), None);
        assert_eq!(generator.next_combination(), None);
        assert_eq!(generator.remaining(), Some(0));
    }

    #[test]
    fn test_early_termination_stops_generation() {
        let mut generator = combination_indices(5, 3);
        let mut calls = 0;
        let result = generator.try_for_each_combination(|_| {
            calls += 1;
            ControlFlow::Break(())
        });

        assert_eq!(result, ControlFlow::Break(()));
        assert_eq!(calls, 1);
        assert_eq!(generator.indices, [0, 1, 2]);
        assert_eq!(generator.state, State::Yielded);
        assert_eq!(generator.remaining(), Some(9));
    }

    #[test]
    fn test_remaining_tracks_progress() {
        let mut generator = combination_indices(6, 2);
        let mut expected = 15;
        assert_eq!(generator.remaining(), Some(expected));
        while generator.next_combination().is_some() {
            expected -= 1;
            assert_eq!(generator.remaining(), Some(expected));
        }
        assert_eq!(expected, 0);
    }

    #[test]
    fn test_current_follows_yields() {
        let mut generator = combination_indices(3, 3);
        assert_eq!(generator.current(), None);
        generator.next_combination();
        assert_eq!(generator.current(), Some(&[0, 1, 2][..]));
        generator.next_combination();
        assert_eq!(generator.current(), None);
    }

    #[test]
    fn test_accessors() {
        let generator = combination_indices(7, 3);
        assert_eq!((generator.n(), generator.k()), (7, 3));

        let generator = combination_indices(2, 3);
        assert_eq!((generator.n(), generator.k()), (2, 3));

        let generator = CombinationIndices::from_signed(-2, 3);
        assert_eq!((generator.n(), generator.k()), (0, 0));
    }

    #[test]
    fn test_clone_is_independent() {
        let mut generator = combination_indices(4, 2);
        generator.next_combination();
        let mut copy = generator.clone();
        assert_eq!(generator.next_combination(), Some(&[0, 2][..]));
        assert_eq!(generator.next_combination(), Some(&[0, 3][..]));
        assert_eq!(copy.next_combination(), Some(&[0, 2][..]));
    }

    proptest! {
        #[test]
        fn prop_yields_binomial_count(n in 0_usize..=12, k in 0_usize..=14) {
            let expected = if k == 0 { 0 } else { binomial(n, k).unwrap() };
            prop_assert_eq!(combination_indices(n, k).owned().count(), expected);
        }

        #[test]
        fn prop_combinations_are_strictly_increasing_and_in_range(
            n in 1_usize..=10,
            k in 1_usize..=10,
        ) {
            for indices in combination_indices(n, k).owned() {
                prop_assert_eq!(indices.len(), k);
                prop_assert!(indices.windows(2).all(|w| w[0] < w[1]));
                prop_assert!(indices.iter().all(|&i| i < n));
            }
        }

        #[test]
        fn prop_lexicographic_order(n in 1_usize..=10, k in 1_usize..=10) {
            let all = collect_owned(combination_indices(n, k));
            prop_assert!(all.windows(2).all(|w| w[0] < w[1]));
        }

        #[test]
        fn prop_covers_every_subset(n in 1_usize..=10, k in 1_usize..=10) {
            prop_assume!(k <= n);
            let mut masks: Vec<u32> = combination_indices(n, k)
                .owned()
                .map(|indices| indices.iter().fold(0, |mask, &i| mask | (1_u32 << i)))
                .collect();
            let mut expected: Vec<u32> = (0..1_u32 << n)
                .filter(|mask| mask.count_ones() as usize == k)
                .collect();
            masks.sort_unstable();
            expected.sort_unstable();
            prop_assert_eq!(masks, expected);
        }

        #[test]
        fn prop_size_hint_matches_remaining(n in 0_usize..=9, k in 0_usize..=9, skip in 0_usize..20) {
            let mut iter = combination_indices(n, k).owned();
            for _ in 0..skip {
                iter.next();
            }
            let (lower, upper) = iter.size_hint();
            let rest = iter.count();
            prop_assert_eq!(lower, rest);
            prop_assert_eq!(upper, Some(rest));
        }
    }
}
