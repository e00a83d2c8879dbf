//! Automated guessers
//!
//! Strategies that play the guessing side against the engine.

pub mod frequency;
pub mod strategy;

pub use strategy::{
    ALPHABET, AlphabeticalStrategy, FrequencyStrategy, RandomStrategy, Strategy, StrategyType,
};
