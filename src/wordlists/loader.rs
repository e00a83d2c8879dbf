//! Dictionary loading utilities
//!
//! Words are trimmed and lower-cased; blank lines and entries containing
//! anything other than letters are skipped.

use std::fs;
use std::io;
use std::path::Path;
use tracing::debug;

/// Normalise one dictionary entry, or `None` if it is not a plain word
#[must_use]
pub fn normalize(entry: &str) -> Option<String> {
    let trimmed = entry.trim();
    if trimmed.is_empty() || !trimmed.chars().all(char::is_alphabetic) {
        return None;
    }
    Some(trimmed.to_lowercase())
}

/// Load words from a file, one per line
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use evil_hangman::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/dictionary.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<String>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;

    let words: Vec<String> = content.lines().filter_map(normalize).collect();
    debug!(path = %path.display(), words = words.len(), "loaded dictionary");

    Ok(words)
}

/// Convert an embedded string slice to owned words
///
/// # Examples
/// ```
/// use evil_hangman::wordlists::loader::words_from_slice;
/// use evil_hangman::wordlists::DICTIONARY;
///
/// let words = words_from_slice(DICTIONARY);
/// assert_eq!(words.len(), DICTIONARY.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice.iter().filter_map(|&s| normalize(s)).collect()
}
