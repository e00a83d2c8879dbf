//! Game configuration shared by the commands

use crate::core::HangmanError;
use crate::hangman::HangmanManager;

/// Default word length when none is given
pub const DEFAULT_LENGTH: usize = 5;

/// Default guess budget when none is given
pub const DEFAULT_MAX_GUESSES: i32 = 8;

/// Parameters for starting a game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub length: usize,
    pub max_guesses: i32,
}

impl GameConfig {
    #[must_use]
    pub const fn new(length: usize, max_guesses: i32) -> Self {
        Self {
            length,
            max_guesses,
        }
    }

    /// Start a game over `dictionary` with these parameters
    ///
    /// # Errors
    ///
    /// Returns `HangmanError::InvalidConfiguration` if the length is 0 or the
    /// budget is negative.
    pub fn start(&self, dictionary: &[String]) -> Result<HangmanManager, HangmanError> {
        HangmanManager::new(dictionary, self.length, self.max_guesses)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(DEFAULT_LENGTH, DEFAULT_MAX_GUESSES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = GameConfig::default();
        assert_eq!(config.length, 5);
        assert_eq!(config.max_guesses, 8);
    }

    #[test]
    fn start_validates() {
        let dictionary = vec!["cat".to_string()];
        assert!(GameConfig::new(3, 4).start(&dictionary).is_ok());
        assert!(GameConfig::new(0, 4).start(&dictionary).is_err());
        assert!(GameConfig::new(3, -2).start(&dictionary).is_err());
    }
}
