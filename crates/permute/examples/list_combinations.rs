//! Example listing the combinations of command-line input.
//!
//! This example shows how to:
//! - Enumerate index combinations with `combination_indices`
//! - Enumerate byte combinations of a string with `string_combinations`
//! - Enumerate combinations of arbitrary items with `combinations`
//! - Stop early with `ControlFlow::Break`
//!
//! # Usage
//!
//! Index combinations of a 5-element set:
//!
//! ```sh
//! cargo run --example list_combinations -- indices 5 3
//! ```
//!
//! Sub-strings of length 2:
//!
//! ```sh
//! cargo run --example list_combinations -- string abcd 2
//! ```
//!
//! Combinations of whitespace-separated words, printing at most 4:
//!
//! ```sh
//! cargo run --example list_combinations -- words 2 red green blue yellow --limit 4
//! ```
//!
//! Set `RUST_LOG=trace` to see when a stream yields nothing or runs out.

use std::{fmt::Display, ops::ControlFlow, process};

use clap::{Parser, Subcommand};
use permute::{
    CombinationStream, binomial, combination_indices, combinations, string_combinations,
};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    #[command(subcommand)]
    input: Input,

    /// Maximum number of combinations to print.
    #[arg(long, value_name = "COUNT", global = true)]
    limit: Option<usize>,
}

#[derive(Debug, Subcommand)]
enum Input {
    /// Index combinations of `0..n`.
    Indices {
        /// Size of the set.
        n: usize,
        /// Number of indices per combination.
        k: usize,
    },
    /// Byte combinations of a string.
    String {
        /// Input string.
        s: String,
        /// Length of each combination.
        k: usize,
    },
    /// Combinations of a list of words.
    Words {
        /// Number of words per combination.
        k: usize,
        /// Input words.
        #[arg(required = true)]
        words: Vec<String>,
    },
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    if args.limit == Some(0) {
        eprintln!("--limit must be at least 1.");
        process::exit(2);
    }

    let (n, k) = match &args.input {
        Input::Indices { n, k } => (*n, *k),
        Input::String { s, k } => (s.len(), *k),
        Input::Words { k, words } => (words.len(), *k),
    };
    match binomial(n, k) {
        Some(total) => log::info!("{total} combinations of {k} out of {n}"),
        None => log::info!("more than {} combinations of {k} out of {n}", usize::MAX),
    }

    let printed = match &args.input {
        Input::Indices { n, k } => print_all(combination_indices(*n, *k), args.limit, format_list),
        Input::String { s, k } => print_all(string_combinations(s, *k), args.limit, |bytes| {
            String::from_utf8_lossy(bytes).into_owned()
        }),
        Input::Words { k, words } => {
            print_all(combinations(words, *k), args.limit, |words| words.join(" "))
        }
    };

    if printed == 0 {
        eprintln!("No combinations of {k} out of {n}.");
        process::exit(1);
    }
}

fn print_all<S, F>(mut stream: S, limit: Option<usize>, mut format: F) -> usize
where
    S: CombinationStream,
    F: FnMut(&S::Item) -> String,
{
    let mut printed = 0;
    let _ = stream.try_for_each_combination(|item| {
        println!("{}", format(item));
        printed += 1;
        if limit.is_some_and(|limit| printed >= limit) {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    });
    printed
}

fn format_list<T>(items: &[T]) -> String
where
    T: Display,
{
    let items = items.iter().map(ToString::to_string).collect::<Vec<_>>();
    format!("{{{}}}", items.join(", "))
}
