//! Evil Hangman
//!
//! A Hangman host that never picks a word. It keeps every dictionary word
//! consistent with the guesses so far and, after each guess, keeps the
//! largest family of words sharing the same reveal pattern.
//!
//! # Quick Start
//!
//! ```rust
//! use evil_hangman::hangman::HangmanManager;
//!
//! let dictionary = ["cat", "bat", "hat", "cow", "dog"].map(String::from);
//! let mut game = HangmanManager::new(&dictionary, 3, 5).unwrap();
//!
//! // 'a' splits the words into "- a -" (3 words) and "- - -" (2 words)
//! assert_eq!(game.record('a').unwrap(), 1);
//! assert_eq!(game.pattern(), "- a -");
//! ```

// Core domain types
pub mod core;

// The engine
pub mod hangman;

// Automated guessing strategies
pub mod guesser;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
