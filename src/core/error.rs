//! Errors surfaced by the Hangman engine

use thiserror::Error;

/// Error type for engine construction and guess recording
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HangmanError {
    /// Word length below 1 or a negative guess budget
    #[error("invalid configuration: word length {length} (must be >= 1), max guesses {max_guesses} (must be >= 0)")]
    InvalidConfiguration { length: usize, max_guesses: i32 },

    /// The letter was already recorded earlier in this game
    #[error("letter '{0}' has already been guessed")]
    AlreadyGuessed(char),

    /// The letter can never appear in a word (blank marker or whitespace)
    #[error("'{0}' is not a guessable letter")]
    InvalidLetter(char),
}
