//! Automated play against the engine
//!
//! Runs a strategy against the engine for one or more word lengths and
//! collects win/loss statistics. Games share nothing, so they run in
//! parallel.

use super::config::GameConfig;
use crate::core::HangmanError;
use crate::guesser::Strategy;
use crate::hangman::{GameStatus, HangmanManager};
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Result of a single automated game
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub length: usize,
    pub won: bool,
    pub misses: u32,
    pub guesses: Vec<char>,
    pub pattern: String,
    pub remaining_words: usize,
}

/// Win/loss tally for one word length
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LengthTally {
    pub games: usize,
    pub won: usize,
}

/// Statistics from a simulation run
#[derive(Debug)]
pub struct SimulationStatistics {
    pub strategy: &'static str,
    pub total_games: usize,
    pub won: usize,
    pub lost: usize,
    pub win_rate: f64,
    pub average_misses: f64,
    pub by_length: BTreeMap<usize, LengthTally>,
    pub hardest: Option<GameRecord>,
    pub duration: Duration,
}

/// Play one game until the engine reports a win or loss
///
/// # Errors
///
/// Returns an error if the configuration is invalid.
pub fn play_game<S: Strategy>(
    strategy: &S,
    config: GameConfig,
    dictionary: &[String],
) -> Result<GameRecord, HangmanError> {
    let mut game = config.start(dictionary)?;
    let mut guesses = Vec::new();

    while game.status() == GameStatus::Active {
        let Some(letter) = strategy.next_letter(&game) else {
            break;
        };
        game.record(letter)?;
        guesses.push(letter);
    }

    Ok(finish(&game, guesses))
}

fn finish(game: &HangmanManager, guesses: Vec<char>) -> GameRecord {
    let record = GameRecord {
        length: game.length(),
        won: game.status() == GameStatus::Won,
        misses: game.misses(),
        guesses,
        pattern: game.pattern(),
        remaining_words: game.words().len(),
    };
    debug!(
        length = record.length,
        won = record.won,
        misses = record.misses,
        "simulated game finished"
    );
    record
}

/// Play `rounds` games per length and aggregate the results
///
/// # Errors
///
/// Returns an error if any length is 0 or `max_guesses` is negative.
pub fn run_simulation<S: Strategy + Sync>(
    strategy: &S,
    strategy_name: &'static str,
    dictionary: &[String],
    lengths: &[usize],
    max_guesses: i32,
    rounds: usize,
) -> Result<SimulationStatistics, HangmanError> {
    let jobs: Vec<GameConfig> = lengths
        .iter()
        .flat_map(|&length| std::iter::repeat_n(GameConfig::new(length, max_guesses), rounds))
        .collect();

    info!(
        games = jobs.len(),
        strategy = strategy_name,
        "starting simulation"
    );

    let pb = ProgressBar::new(jobs.len() as u64);
    if let Ok(style) = ProgressStyle::with_template(
        "{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}",
    ) {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb.set_message(strategy_name);

    let start = Instant::now();
    let records: Vec<GameRecord> = jobs
        .par_iter()
        .map(|&config| {
            let record = play_game(strategy, config, dictionary);
            pb.inc(1);
            record
        })
        .collect::<Result<_, _>>()?;
    pb.finish_and_clear();

    Ok(summarize(strategy_name, &records, start.elapsed()))
}

/// Aggregate finished games
#[must_use]
pub fn summarize(
    strategy: &'static str,
    records: &[GameRecord],
    duration: Duration,
) -> SimulationStatistics {
    let total_games = records.len();
    let won = records.iter().filter(|r| r.won).count();

    let mut by_length: BTreeMap<usize, LengthTally> = BTreeMap::new();
    for record in records {
        let tally = by_length.entry(record.length).or_default();
        tally.games += 1;
        if record.won {
            tally.won += 1;
        }
    }

    let total_misses: u64 = records.iter().map(|r| u64::from(r.misses)).sum();
    let (win_rate, average_misses) = if total_games == 0 {
        (0.0, 0.0)
    } else {
        (
            won as f64 / total_games as f64,
            total_misses as f64 / total_games as f64,
        )
    };

    // Hardest game: lost with the most candidates still alive
    let hardest = records
        .iter()
        .filter(|r| !r.won)
        .max_by_key(|r| (r.remaining_words, r.length))
        .cloned();

    SimulationStatistics {
        strategy,
        total_games,
        won,
        lost: total_games - won,
        win_rate,
        average_misses,
        by_length,
        hardest,
        duration,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guesser::{AlphabeticalStrategy, FrequencyStrategy};

    fn dictionary() -> Vec<String> {
        ["cat", "bat", "hat", "cow", "dog", "ox", "be", "tree", "moss"]
            .iter()
            .map(|&w| w.to_string())
            .collect()
    }

    #[test]
    fn single_game_ends() {
        let record = play_game(&FrequencyStrategy, GameConfig::new(3, 5), &dictionary()).unwrap();

        assert_eq!(record.length, 3);
        assert!(record.won || record.misses >= 5);
        assert!(!record.guesses.is_empty());
    }

    #[test]
    fn generous_budget_always_wins() {
        // With 26 guesses no game can be lost: the alphabet runs out first
        let record =
            play_game(&AlphabeticalStrategy, GameConfig::new(4, 26), &dictionary()).unwrap();
        assert!(record.won);
        assert_eq!(record.remaining_words, 1);
    }

    #[test]
    fn zero_budget_loses_immediately() {
        let record = play_game(&FrequencyStrategy, GameConfig::new(3, 0), &dictionary()).unwrap();
        assert!(!record.won);
        assert!(record.guesses.is_empty());
    }

    #[test]
    fn empty_length_loses_on_budget() {
        let record = play_game(&FrequencyStrategy, GameConfig::new(7, 3), &dictionary()).unwrap();
        assert!(!record.won);
        assert_eq!(record.misses, 3);
        assert_eq!(record.remaining_words, 0);
    }

    #[test]
    fn simulation_counts_every_game() {
        let stats = run_simulation(
            &FrequencyStrategy,
            "frequency",
            &dictionary(),
            &[2, 3, 4],
            4,
            3,
        )
        .unwrap();

        assert_eq!(stats.total_games, 9);
        assert_eq!(stats.won + stats.lost, 9);
        assert_eq!(stats.by_length.len(), 3);
        assert!(stats.by_length.values().all(|t| t.games == 3));
        assert!((0.0..=1.0).contains(&stats.win_rate));
    }

    #[test]
    fn simulation_rejects_invalid_length() {
        let result = run_simulation(&FrequencyStrategy, "frequency", &dictionary(), &[0], 4, 1);
        assert!(matches!(
            result,
            Err(HangmanError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn summarize_empty() {
        let stats = summarize("frequency", &[], Duration::ZERO);
        assert_eq!(stats.total_games, 0);
        assert!(stats.hardest.is_none());
        assert!(stats.win_rate.abs() < f64::EPSILON);
    }
}
