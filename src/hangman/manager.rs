//! The Evil Hangman engine
//!
//! Plays the host side of Hangman without ever fixing a secret word. The
//! engine keeps every dictionary word still consistent with the guesses so
//! far, and after each guess keeps whichever family of words is largest.
//!
//! The engine is a state accumulator, not a referee: it keeps accepting
//! guesses after the budget is spent or the pattern is complete. Use
//! [`HangmanManager::status`] to decide when a game is over.

use super::family::{Families, partition, select_family};
use super::tracker::{Outcome, RevealState};
use crate::core::{BLANK, HangmanError, PatternKey};
use std::collections::BTreeSet;
use tracing::debug;

/// Game state as observed by the caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Pattern incomplete and guesses remain
    Active,
    /// Every slot has been revealed
    Won,
    /// The guess budget has run out
    Lost,
}

/// Evil Hangman engine
///
/// # Examples
/// ```
/// use evil_hangman::hangman::HangmanManager;
///
/// let dictionary = ["cat", "bat", "hat", "cow", "dog"].map(String::from);
/// let mut game = HangmanManager::new(&dictionary, 3, 5).unwrap();
///
/// assert_eq!(game.record('a').unwrap(), 1);
/// assert_eq!(game.pattern(), "- a -");
/// assert_eq!(game.guesses_left(), 5);
/// ```
#[derive(Debug, Clone)]
pub struct HangmanManager {
    length: usize,
    words: BTreeSet<String>,
    state: RevealState,
}

impl HangmanManager {
    /// Start a game over every dictionary word of `length` letters
    ///
    /// Duplicate dictionary entries collapse. An empty candidate set is
    /// allowed; every guess against it is a miss.
    ///
    /// # Errors
    /// Returns `HangmanError::InvalidConfiguration` if `length` is 0 or
    /// `max_guesses` is negative.
    pub fn new<'a, I>(dictionary: I, length: usize, max_guesses: i32) -> Result<Self, HangmanError>
    where
        I: IntoIterator<Item = &'a String>,
    {
        if length < 1 || max_guesses < 0 {
            return Err(HangmanError::InvalidConfiguration {
                length,
                max_guesses,
            });
        }

        let words: BTreeSet<String> = dictionary
            .into_iter()
            .filter(|word| word.chars().count() == length)
            .cloned()
            .collect();

        debug!(
            length,
            max_guesses,
            candidates = words.len(),
            "starting hangman game"
        );

        Ok(Self {
            length,
            words,
            state: RevealState::new(length, max_guesses),
        })
    }

    /// Current candidate words, ascending
    #[must_use]
    pub const fn words(&self) -> &BTreeSet<String> {
        &self.words
    }

    /// Budget at construction minus misses so far
    #[must_use]
    pub fn guesses_left(&self) -> i32 {
        self.state.guesses_left()
    }

    /// Guessed letters, ascending
    #[must_use]
    pub const fn guesses(&self) -> &BTreeSet<char> {
        self.state.guessed()
    }

    /// Revealed pattern, slots separated by spaces and blanks shown as `-`
    #[must_use]
    pub fn pattern(&self) -> String {
        self.state.pattern().to_string()
    }

    /// Revealed pattern as slots
    #[must_use]
    pub const fn revealed(&self) -> &PatternKey {
        self.state.pattern()
    }

    /// Guess budget at construction
    #[must_use]
    pub const fn max_guesses(&self) -> i32 {
        self.state.initial_budget()
    }

    /// Word length of this game
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    /// Number of guesses that revealed nothing
    #[must_use]
    pub const fn misses(&self) -> u32 {
        self.state.misses()
    }

    /// Won once the pattern is complete, lost once the budget is spent
    ///
    /// A complete pattern takes precedence, so a final hit on the last
    /// guess still wins.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.state.pattern().is_complete() {
            GameStatus::Won
        } else if self.guesses_left() <= 0 {
            GameStatus::Lost
        } else {
            GameStatus::Active
        }
    }

    /// Partition the current candidates for `letter` without changing state
    #[must_use]
    pub fn preview(&self, letter: char) -> Families {
        partition(&self.words, letter)
    }

    /// Record a guess and keep the largest family
    ///
    /// Returns the number of positions `letter` occupies in the kept family's
    /// pattern. Against an empty candidate set this returns 0 and counts as
    /// a miss.
    ///
    /// # Errors
    /// - `HangmanError::AlreadyGuessed` if `letter` was recorded before
    /// - `HangmanError::InvalidLetter` for the blank marker or whitespace
    ///
    /// State is left untouched on error.
    pub fn record(&mut self, letter: char) -> Result<usize, HangmanError> {
        self.record_scored(letter).map(|(occurrences, _)| occurrences)
    }

    /// Same as [`HangmanManager::record`], also reporting hit or miss
    ///
    /// # Errors
    /// Same as [`HangmanManager::record`].
    pub fn record_scored(&mut self, letter: char) -> Result<(usize, Outcome), HangmanError> {
        if letter == BLANK || letter.is_whitespace() {
            return Err(HangmanError::InvalidLetter(letter));
        }
        if self.state.has_guessed(letter) {
            return Err(HangmanError::AlreadyGuessed(letter));
        }

        let families = partition(&self.words, letter);
        let family_count = families.len();

        let Some((key, family)) = select_family(families) else {
            debug!(%letter, "no candidates left to partition");
            return Ok((0, self.state.commit_miss(letter)));
        };

        let occurrences = key.occurrences(letter);
        let outcome = self.state.commit(&key, letter);
        debug!(
            %letter,
            families = family_count,
            kept = family.len(),
            %key,
            hit = outcome.is_hit(),
            "recorded guess"
        );
        self.words = family;

        Ok((occurrences, outcome))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary() -> Vec<String> {
        ["cat", "bat", "hat", "cow", "dog"]
            .iter()
            .map(|&w| w.to_string())
            .collect()
    }

    fn sorted(words: &BTreeSet<String>) -> Vec<&str> {
        words.iter().map(String::as_str).collect()
    }

    #[test]
    fn construction_filters_by_length() {
        let mut dict = dictionary();
        dict.extend(["horse", "ox", "cat"].iter().map(|&w| w.to_string()));

        let game = HangmanManager::new(&dict, 3, 5).unwrap();
        assert_eq!(sorted(game.words()), vec!["bat", "cat", "cow", "dog", "hat"]);
        assert_eq!(game.pattern(), "- - -");
        assert_eq!(game.guesses_left(), 5);
        assert!(game.guesses().is_empty());
        assert_eq!(game.status(), GameStatus::Active);
    }

    #[test]
    fn rejects_zero_length() {
        let err = HangmanManager::new(&dictionary(), 0, 5).unwrap_err();
        assert_eq!(
            err,
            HangmanError::InvalidConfiguration {
                length: 0,
                max_guesses: 5
            }
        );
    }

    #[test]
    fn rejects_negative_budget() {
        assert!(matches!(
            HangmanManager::new(&dictionary(), 3, -1),
            Err(HangmanError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn zero_budget_is_valid() {
        let game = HangmanManager::new(&dictionary(), 3, 0).unwrap();
        assert_eq!(game.guesses_left(), 0);
        assert_eq!(game.status(), GameStatus::Lost);
    }

    #[test]
    fn scripted_game() {
        let mut game = HangmanManager::new(&dictionary(), 3, 5).unwrap();

        assert_eq!(game.record('a').unwrap(), 1);
        assert_eq!(sorted(game.words()), vec!["bat", "cat", "hat"]);
        assert_eq!(game.pattern(), "- a -");
        assert_eq!(game.guesses_left(), 5);

        assert_eq!(game.record('z').unwrap(), 0);
        assert_eq!(sorted(game.words()), vec!["bat", "cat", "hat"]);
        assert_eq!(game.pattern(), "- a -");
        assert_eq!(game.guesses_left(), 4);

        assert_eq!(game.record('t').unwrap(), 1);
        assert_eq!(game.words().len(), 3);
        assert_eq!(game.pattern(), "- a t");
        assert_eq!(game.guesses_left(), 4);

        let letters: Vec<char> = game.guesses().iter().copied().collect();
        assert_eq!(letters, vec!['a', 't', 'z']);
    }

    #[test]
    fn repeated_letter_is_rejected_without_changes() {
        let mut game = HangmanManager::new(&dictionary(), 3, 5).unwrap();
        game.record('o').unwrap();
        let words_before = game.words().clone();

        assert_eq!(game.record('o'), Err(HangmanError::AlreadyGuessed('o')));
        assert_eq!(game.words(), &words_before);
        assert_eq!(game.guesses().len(), 1);
        assert_eq!(game.guesses_left(), 5 - i32::try_from(game.misses()).unwrap());
    }

    #[test]
    fn blank_marker_is_not_a_letter() {
        let mut game = HangmanManager::new(&dictionary(), 3, 5).unwrap();
        assert_eq!(game.record('-'), Err(HangmanError::InvalidLetter('-')));
        assert_eq!(game.record(' '), Err(HangmanError::InvalidLetter(' ')));
        assert!(game.guesses().is_empty());
    }

    #[test]
    fn empty_candidate_set_counts_misses() {
        let mut game = HangmanManager::new(&dictionary(), 7, 2).unwrap();
        assert!(game.words().is_empty());

        assert_eq!(game.record('e').unwrap(), 0);
        assert_eq!(game.pattern(), "- - - - - - -");
        assert_eq!(game.guesses_left(), 1);
        assert!(game.guesses().contains(&'e'));
        assert!(game.words().is_empty());
    }

    #[test]
    fn engine_keeps_accepting_guesses_after_loss() {
        let mut game = HangmanManager::new(&dictionary(), 3, 1).unwrap();
        game.record('x').unwrap();
        assert_eq!(game.status(), GameStatus::Lost);

        game.record('y').unwrap();
        assert_eq!(game.guesses_left(), -1);
    }

    #[test]
    fn single_word_game_is_won() {
        let dict = vec!["ox".to_string()];
        let mut game = HangmanManager::new(&dict, 2, 3).unwrap();

        assert_eq!(game.record('o').unwrap(), 1);
        assert_eq!(game.status(), GameStatus::Active);
        assert_eq!(game.record('x').unwrap(), 1);
        assert_eq!(game.pattern(), "o x");
        assert_eq!(game.status(), GameStatus::Won);
    }

    #[test]
    fn preview_does_not_mutate() {
        let game = HangmanManager::new(&dictionary(), 3, 5).unwrap();
        let families = game.preview('a');

        assert_eq!(families.len(), 2);
        assert_eq!(game.words().len(), 5);
        assert!(game.guesses().is_empty());
    }

    #[test]
    fn record_scored_reports_outcome() {
        let mut game = HangmanManager::new(&dictionary(), 3, 5).unwrap();

        let (count, outcome) = game.record_scored('a').unwrap();
        assert_eq!(count, 1);
        assert_eq!(outcome, Outcome::Hit { revealed: 1 });

        let (count, outcome) = game.record_scored('q').unwrap();
        assert_eq!(count, 0);
        assert_eq!(outcome, Outcome::Miss);
    }
}
