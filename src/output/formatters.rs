//! Formatting utilities for terminal output

use std::collections::BTreeSet;

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    let filled = if max > 0.0 {
        // Cast is safe: value is clamped to [0, width]
        ((value / max) * width as f64).clamp(0.0, width as f64) as usize
    } else {
        0
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar showing the remaining share of the guess budget
#[must_use]
pub fn budget_bar(left: i32, total: i32, width: usize) -> String {
    create_progress_bar(f64::from(left.max(0)), f64::from(total), width)
}

/// Guessed letters as a comma-separated list
#[must_use]
pub fn format_letters(letters: &BTreeSet<char>) -> String {
    if letters.is_empty() {
        return "(none)".to_string();
    }
    letters
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Up to `limit` words, with a count of the rest
#[must_use]
pub fn word_preview(words: &[String], total: usize, limit: usize) -> String {
    let shown: Vec<&str> = words.iter().take(limit).map(String::as_str).collect();
    let hidden = total.saturating_sub(shown.len());
    if hidden == 0 {
        shown.join(", ")
    } else {
        format!("{}, … +{hidden} more", shown.join(", "))
    }
}
