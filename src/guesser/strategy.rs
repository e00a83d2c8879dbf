//! Letter selection strategies
//!
//! Defines the Strategy trait and concrete implementations. Strategies only
//! look at what a player could see or derive: the candidate words consistent
//! with the revealed pattern and the letters already guessed.

use super::frequency::{letter_coverage, most_common};
use crate::hangman::HangmanManager;
use rustc_hash::FxHashSet;

/// Letters tried once the candidates offer no unguessed letter
pub const ALPHABET: &str = "abcdefghijklmnopqrstuvwxyz";

/// A strategy for choosing the next letter to guess
pub trait Strategy {
    /// Pick the next letter, or `None` when every letter has been tried
    fn next_letter(&self, game: &HangmanManager) -> Option<char>;
}

/// Enum wrapper for all strategy types
///
/// Allows runtime selection of strategy while maintaining static dispatch.
pub enum StrategyType {
    /// Letter found in the most candidate words (default)
    Frequency(FrequencyStrategy),
    /// First unguessed letter of the alphabet
    Alphabetical(AlphabeticalStrategy),
    /// Random unguessed letter
    Random(RandomStrategy),
}

impl Strategy for StrategyType {
    fn next_letter(&self, game: &HangmanManager) -> Option<char> {
        match self {
            Self::Frequency(s) => s.next_letter(game),
            Self::Alphabetical(s) => s.next_letter(game),
            Self::Random(s) => s.next_letter(game),
        }
    }
}

impl StrategyType {
    /// Create strategy from name string
    ///
    /// Supported names: "frequency", "alphabetical", "random".
    /// Defaults to frequency if name is unrecognized.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "alphabetical" | "alpha" => Self::Alphabetical(AlphabeticalStrategy),
            "random" => Self::Random(RandomStrategy),
            _ => Self::Frequency(FrequencyStrategy),
        }
    }

    /// Canonical name of this strategy
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Frequency(_) => "frequency",
            Self::Alphabetical(_) => "alphabetical",
            Self::Random(_) => "random",
        }
    }
}

fn unguessed_alphabet(game: &HangmanManager) -> impl Iterator<Item = char> + '_ {
    ALPHABET.chars().filter(|c| !game.guesses().contains(c))
}

/// Guess the letter contained in the most remaining candidates
pub struct FrequencyStrategy;

impl Strategy for FrequencyStrategy {
    fn next_letter(&self, game: &HangmanManager) -> Option<char> {
        let guessed: FxHashSet<char> = game.guesses().iter().copied().collect();
        let counts = letter_coverage(game.words(), &guessed);

        most_common(&counts).or_else(|| unguessed_alphabet(game).next())
    }
}

/// Guess letters in alphabetical order
pub struct AlphabeticalStrategy;

impl Strategy for AlphabeticalStrategy {
    fn next_letter(&self, game: &HangmanManager) -> Option<char> {
        unguessed_alphabet(game).next()
    }
}

/// Guess a random unguessed letter
pub struct RandomStrategy;

impl Strategy for RandomStrategy {
    fn next_letter(&self, game: &HangmanManager) -> Option<char> {
        use rand::prelude::IndexedRandom;

        let remaining: Vec<char> = unguessed_alphabet(game).collect();
        remaining.choose(&mut rand::rng()).copied()
    }
}
