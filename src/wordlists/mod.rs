//! Word lists for Hangman
//!
//! Provides an embedded dictionary compiled into the binary, plus loaders
//! for custom lists.

mod embedded;
pub mod loader;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT};

/// Distinct word lengths present in `words`, ascending
#[must_use]
pub fn available_lengths(words: &[String]) -> Vec<usize> {
    let lengths: std::collections::BTreeSet<usize> =
        words.iter().map(|w| w.chars().count()).collect();
    lengths.into_iter().collect()
}
