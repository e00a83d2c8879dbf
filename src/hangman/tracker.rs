//! Revealed pattern, guessed letters and the guess budget
//!
//! The budget is tracked as an explicit miss counter: a hit costs nothing,
//! a miss costs exactly one guess.

use crate::core::PatternKey;
use std::collections::BTreeSet;
use tracing::trace;

/// How a committed guess was scored
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The guess revealed at least one new slot
    Hit { revealed: usize },
    /// Nothing new was revealed
    Miss,
}

impl Outcome {
    #[must_use]
    pub const fn is_hit(self) -> bool {
        matches!(self, Self::Hit { .. })
    }
}

/// Everything the guesser can observe about a game
#[derive(Debug, Clone)]
pub struct RevealState {
    pattern: PatternKey,
    guessed: BTreeSet<char>,
    initial_budget: i32,
    misses: u32,
}

impl RevealState {
    /// Fresh state: all blanks, nothing guessed, full budget
    #[must_use]
    pub fn new(length: usize, budget: i32) -> Self {
        Self {
            pattern: PatternKey::blank(length),
            guessed: BTreeSet::new(),
            initial_budget: budget,
            misses: 0,
        }
    }

    #[must_use]
    pub const fn pattern(&self) -> &PatternKey {
        &self.pattern
    }

    #[must_use]
    pub const fn guessed(&self) -> &BTreeSet<char> {
        &self.guessed
    }

    #[must_use]
    pub fn has_guessed(&self, letter: char) -> bool {
        self.guessed.contains(&letter)
    }

    #[must_use]
    pub const fn initial_budget(&self) -> i32 {
        self.initial_budget
    }

    #[must_use]
    pub const fn misses(&self) -> u32 {
        self.misses
    }

    /// Initial budget minus misses so far
    ///
    /// Goes negative if the caller keeps guessing after the budget is spent.
    #[must_use]
    pub fn guesses_left(&self) -> i32 {
        let misses = i32::try_from(self.misses).unwrap_or(i32::MAX);
        self.initial_budget.saturating_sub(misses)
    }

    /// Merge the kept family's key, record the letter and score the guess
    pub fn commit(&mut self, key: &PatternKey, letter: char) -> Outcome {
        let revealed = self.pattern.merge(key);
        self.guessed.insert(letter);

        let outcome = if revealed > 0 {
            Outcome::Hit { revealed }
        } else {
            self.misses += 1;
            Outcome::Miss
        };

        trace!(%letter, ?outcome, pattern = %self.pattern, "committed guess");
        outcome
    }

    /// Record a guess that had no family to keep
    pub fn commit_miss(&mut self, letter: char) -> Outcome {
        self.guessed.insert(letter);
        self.misses += 1;
        trace!(%letter, "committed guess against an empty candidate set");
        Outcome::Miss
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_is_blank_with_full_budget() {
        let state = RevealState::new(4, 7);
        assert_eq!(state.pattern().to_string(), "- - - -");
        assert!(state.guessed().is_empty());
        assert_eq!(state.guesses_left(), 7);
        assert_eq!(state.misses(), 0);
    }

    #[test]
    fn hit_costs_nothing() {
        let mut state = RevealState::new(3, 5);
        let outcome = state.commit(&PatternKey::compute("cat", 'a'), 'a');

        assert_eq!(outcome, Outcome::Hit { revealed: 1 });
        assert_eq!(state.guesses_left(), 5);
        assert_eq!(state.pattern().to_string(), "- a -");
        assert!(state.has_guessed('a'));
    }

    #[test]
    fn miss_costs_one() {
        let mut state = RevealState::new(3, 5);
        let outcome = state.commit(&PatternKey::blank(3), 'z');

        assert_eq!(outcome, Outcome::Miss);
        assert_eq!(state.guesses_left(), 4);
        assert_eq!(state.misses(), 1);
        assert!(state.has_guessed('z'));
    }

    #[test]
    fn budget_tracks_misses_only() {
        let mut state = RevealState::new(5, 3);
        state.commit(&PatternKey::compute("never", 'e'), 'e');
        state.commit(&PatternKey::blank(5), 'x');
        state.commit(&PatternKey::compute("never", 'n'), 'n');
        state.commit(&PatternKey::blank(5), 'q');

        assert_eq!(state.guessed().len(), 4);
        assert_eq!(state.guesses_left(), 3 - 2);
    }

    #[test]
    fn budget_can_go_negative() {
        let mut state = RevealState::new(2, 0);
        state.commit_miss('a');
        assert_eq!(state.guesses_left(), -1);
    }

    #[test]
    fn guessed_letters_are_ordered() {
        let mut state = RevealState::new(3, 5);
        for letter in ['t', 'c', 'a'] {
            state.commit(&PatternKey::blank(3), letter);
        }
        let letters: Vec<char> = state.guessed().iter().copied().collect();
        assert_eq!(letters, vec!['a', 'c', 't']);
    }
}
