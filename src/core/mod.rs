//! Core domain types for Hangman
//!
//! Pure types with no game state: reveal patterns and the error type.

mod error;
mod pattern;

pub use error::HangmanError;
pub use pattern::{BLANK, PatternKey, Slot};
