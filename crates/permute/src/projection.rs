//! Combinations of the elements of a string or slice.
//!
//! These streams run a [`CombinationIndices`] over the positions of the input and
//! copy the selected elements into a reused buffer of length `k`. They follow the
//! same parameter policy: `k == 0` or `k` larger than the input yields nothing.
//!
//! # Examples
//!
//! ```
//! use permute::{CombinationStream as _, combinations, string_combinations};
//!
//! let mut seen = vec![];
//! string_combinations("abcd", 3).for_each_combination(|bytes| {
//!     seen.push(String::from_utf8_lossy(bytes).into_owned());
//! });
//! assert_eq!(seen, ["abc", "abd", "acd", "bcd"]);
//!
//! let pairs: Vec<Vec<i32>> = combinations(&[10, 20, 30], 2).owned().collect();
//! assert_eq!(pairs, [[10, 20], [10, 30], [20, 30]]);
//! ```

use crate::{CombinationIndices, CombinationStream};

/// Returns a stream over the length-`k` sub-sequences of `items`, in
/// lexicographic order of their positions.
///
/// Equivalent to [`Combinations::new`].
#[must_use]
#[inline]
pub fn combinations<E>(items: &[E], k: usize) -> Combinations<'_, E>
where
    E: Clone,
{
    Combinations::new(items, k)
}

/// Returns a stream over the length-`k` byte sub-sequences of `s`, in
/// lexicographic order of their positions.
///
/// Equivalent to [`StringCombinations::new`].
#[must_use]
#[inline]
pub fn string_combinations(s: &str, k: usize) -> StringCombinations<'_> {
    StringCombinations::new(s, k)
}

/// Stream over the length-`k` sub-sequences of a slice.
///
/// For each index combination `i0 < i1 < ... < i(k-1)` produced by
/// [`CombinationIndices`] over `0..items.len()`, the stream lends
/// `[items[i0], items[i1], ..., items[i(k-1)]]` from a reused buffer.
/// Elements are cloned into the buffer on every step.
#[derive(Debug, Clone)]
pub struct Combinations<'a, E> {
    items: &'a [E],
    indices: CombinationIndices,
    buf: Vec<E>,
}

impl<'a, E> Combinations<'a, E>
where
    E: Clone,
{
    /// Creates a stream over the length-`k` sub-sequences of `items`.
    ///
    /// If `k == 0` or `k > items.len()`, the stream yields nothing.
    #[must_use]
    pub fn new(items: &'a [E], k: usize) -> Self {
        Self {
            items,
            indices: CombinationIndices::new(items.len(), k),
            buf: Vec::with_capacity(k.min(items.len())),
        }
    }

    /// Returns the slice combinations are drawn from.
    #[must_use]
    #[inline]
    pub fn items(&self) -> &'a [E] {
        self.items
    }

    /// Returns the index combination of the last yielded sub-sequence.
    ///
    /// Returns an empty slice before the first call to
    /// [`next_combination`](CombinationStream::next_combination) and after
    /// exhaustion.
    ///
    /// # Examples
    ///
    /// ```
    /// use permute::{CombinationStream as _, combinations};
    ///
    /// let mut stream = combinations(&['a', 'b', 'c'], 2);
    /// stream.next_combination();
    /// stream.next_combination();
    /// assert_eq!(stream.indices(), [0, 2]);
    /// ```
    #[must_use]
    #[inline]
    pub fn indices(&self) -> &[usize] {
        self.indices.current().unwrap_or_default()
    }
}

impl<E> CombinationStream for Combinations<'_, E>
where
    E: Clone,
{
    type Item = [E];

    fn next_combination(&mut self) -> Option<&[E]> {
        self.buf.clear();
        let indices = self.indices.next_combination()?;
        self.buf.extend(indices.iter().map(|&i| self.items[i].clone()));
        Some(&self.buf)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.indices.size_hint()
    }
}

/// Stream over the length-`k` byte sub-sequences of a string.
///
/// Positions are byte offsets, so a combination may split a multi-byte
/// character and the yielded bytes are not necessarily valid UTF-8. For
/// character-wise combinations, collect the characters and use
/// [`Combinations`] instead.
///
/// # Examples
///
/// ```
/// use permute::{CombinationStream as _, StringCombinations};
///
/// let mut stream = StringCombinations::new("abc", 2);
/// let mut words = vec![];
/// while let Some(bytes) = stream.next_combination() {
///     words.push(String::from_utf8_lossy(bytes).into_owned());
/// }
/// assert_eq!(words, ["ab", "ac", "bc"]);
/// ```
#[derive(Debug, Clone)]
pub struct StringCombinations<'a> {
    inner: Combinations<'a, u8>,
}

impl<'a> StringCombinations<'a> {
    /// Creates a stream over the length-`k` byte sub-sequences of `s`.
    ///
    /// If `k == 0` or `k > s.len()`, the stream yields nothing.
    #[must_use]
    pub fn new(s: &'a str, k: usize) -> Self {
        Self {
            inner: Combinations::new(s.as_bytes(), k),
        }
    }

    /// Returns the byte positions of the last yielded sub-sequence.
    #[must_use]
    #[inline]
    pub fn indices(&self) -> &[usize] {
        self.inner.indices()
    }
}

impl CombinationStream for StringCombinations<'_> {
    type Item = [u8];

    #[inline]
    fn next_combination(&mut self) -> Option<&[u8]> {
        self.inner.next_combination()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}
