//! Evil Hangman engine
//!
//! Per guess: compute a reveal key for every candidate, partition the
//! candidates into families, keep the largest family, then merge its key
//! into the revealed pattern and score the guess.

pub mod family;
mod manager;
mod tracker;

pub use manager::{GameStatus, HangmanManager};
pub use tracker::{Outcome, RevealState};
