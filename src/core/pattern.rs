//! Reveal patterns for Hangman guesses
//!
//! A pattern is a word-shaped sequence of slots. Each slot is either blank or
//! holds a letter that has been guessed and appears at that position.
//!
//! The same type serves two roles:
//! - the per-word key produced for a single guessed letter (family key)
//! - the global pattern shown to the guesser, accumulated across guesses

use std::cmp::Ordering;
use std::fmt;

/// Marker used when rendering a blank slot
pub const BLANK: char = '-';

/// A single position in a reveal pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    /// Not revealed yet
    Blank,
    /// Revealed letter
    Letter(char),
}

impl Slot {
    /// Character used when rendering this slot
    #[inline]
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Blank => BLANK,
            Self::Letter(c) => c,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_blank(self) -> bool {
        matches!(self, Self::Blank)
    }
}

impl PartialOrd for Slot {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

// Slots compare as their rendered characters, so keys order exactly like
// their "- a -" strings would. The blank marker is never a guessable letter.
impl Ord for Slot {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_char().cmp(&other.as_char())
    }
}

/// Ordered, fixed-length sequence of slots
///
/// Keys order lexicographically by slot, which is the same as comparing the
/// rendered strings. The family selector relies on this for tie-breaking.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PatternKey(Vec<Slot>);

impl PatternKey {
    /// A pattern of `length` blank slots
    #[must_use]
    pub fn blank(length: usize) -> Self {
        Self(vec![Slot::Blank; length])
    }

    /// Compute the reveal key of `word` for a single guessed `letter`
    ///
    /// Position `i` holds `letter` if the word has it there, otherwise blank.
    ///
    /// # Examples
    /// ```
    /// use evil_hangman::core::PatternKey;
    ///
    /// assert_eq!(PatternKey::compute("banana", 'a').to_string(), "- a - a - a");
    /// assert_eq!(PatternKey::compute("cat", 'z').to_string(), "- - -");
    /// ```
    #[must_use]
    pub fn compute(word: &str, letter: char) -> Self {
        Self(
            word.chars()
                .map(|c| {
                    if c == letter {
                        Slot::Letter(letter)
                    } else {
                        Slot::Blank
                    }
                })
                .collect(),
        )
    }

    /// Number of slots
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn slots(&self) -> &[Slot] {
        &self.0
    }

    /// Count the slots holding `letter`
    #[must_use]
    pub fn occurrences(&self, letter: char) -> usize {
        self.0
            .iter()
            .filter(|&&slot| slot == Slot::Letter(letter))
            .count()
    }

    /// True when no slot is blank
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.0.iter().all(|slot| !slot.is_blank())
    }

    /// Number of blank slots
    #[must_use]
    pub fn blanks(&self) -> usize {
        self.0.iter().filter(|slot| slot.is_blank()).count()
    }

    /// Copy every revealed letter of `other` into slots that are still blank here
    ///
    /// Returns the number of slots that changed. Revealed slots are never
    /// overwritten, so a merge can only ever fill blanks.
    pub(crate) fn merge(&mut self, other: &Self) -> usize {
        let mut changed = 0;
        for (mine, &theirs) in self.0.iter_mut().zip(&other.0) {
            if mine.is_blank() && !theirs.is_blank() {
                *mine = theirs;
                changed += 1;
            }
        }
        changed
    }
}

impl fmt::Display for PatternKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, slot) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", slot.as_char())?;
        }
        Ok(())
    }
}
