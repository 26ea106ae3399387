//! Test utilities for combination streams.
//!
//! Streams lend each combination from a reused buffer, so assertions over a whole
//! enumeration need owned copies. These helpers drain a stream into a `Vec`.

use crate::CombinationStream;

/// Drains `stream`, returning an owned copy of every combination in order.
pub fn collect_owned<S>(stream: S) -> Vec<<S::Item as ToOwned>::Owned>
where
    S: CombinationStream,
    S::Item: ToOwned,
{
    stream.owned().collect()
}

/// Drains a byte stream, decoding each combination as UTF-8.
///
/// # Panics
///
/// Panics if a combination is not valid UTF-8.
#[track_caller]
pub fn collect_strings<S>(mut stream: S) -> Vec<String>
where
    S: CombinationStream<Item = [u8]>,
{
    let mut strings = vec![];
    while let Some(bytes) = stream.next_combination() {
        let s = std::str::from_utf8(bytes)
            .unwrap_or_else(|e| panic!("combination {bytes:?} is not UTF-8: {e}"));
        strings.push(s.to_owned());
    }
    strings
}
