//! Word family breakdown command
//!
//! Shows how a guess would split the candidate set, and which family the
//! engine would keep.

use super::config::GameConfig;
use crate::core::HangmanError;
use crate::hangman::family::preferred_key;

/// Maximum number of sample words listed per family
pub const SAMPLE_SIZE: usize = 5;

/// One family in a breakdown
pub struct FamilyRow {
    pub pattern: String,
    pub size: usize,
    pub sample: Vec<String>,
    pub kept: bool,
}

/// Result of breaking down a guess
pub struct FamilyReport {
    pub letter: char,
    pub pattern_before: String,
    pub candidates: usize,
    pub rows: Vec<FamilyRow>,
}

/// Break down the families `letter` would produce
///
/// The letters in `history` are recorded first, so the breakdown applies to
/// the game state they lead to. Rows are sorted largest first, then by
/// pattern.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or `history` repeats a
/// letter, contains the blank marker, or already contains `letter`.
pub fn analyze_families(
    config: GameConfig,
    dictionary: &[String],
    history: &[char],
    letter: char,
) -> Result<FamilyReport, HangmanError> {
    let mut game = config.start(dictionary)?;
    for &guess in history {
        game.record(guess)?;
    }
    if game.guesses().contains(&letter) {
        return Err(HangmanError::AlreadyGuessed(letter));
    }

    let families = game.preview(letter);
    let kept = preferred_key(&families).cloned();

    let mut rows: Vec<FamilyRow> = families
        .sorted()
        .into_iter()
        .map(|(key, family)| FamilyRow {
            pattern: key.to_string(),
            size: family.len(),
            sample: family.iter().take(SAMPLE_SIZE).cloned().collect(),
            kept: kept.as_ref() == Some(key),
        })
        .collect();
    rows.sort_by(|a, b| b.size.cmp(&a.size).then_with(|| a.pattern.cmp(&b.pattern)));

    Ok(FamilyReport {
        letter,
        pattern_before: game.pattern(),
        candidates: game.words().len(),
        rows,
    })
}
