//! Interactive console game
//!
//! Text-based Hangman where the computer hosts and never commits to a word.

use super::config::GameConfig;
use crate::core::HangmanError;
use crate::hangman::{GameStatus, HangmanManager};
use crate::output::formatters::{budget_bar, format_letters};
use anyhow::{Context, Result};
use colored::Colorize;
use std::io::{self, BufRead, Write};
use tracing::info;

/// Options for an interactive session
#[derive(Debug, Clone, Copy)]
pub struct PlayOptions {
    pub config: GameConfig,
    /// Show how many words the engine is still considering
    pub reveal_count: bool,
}

/// How a single game ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEnd {
    Won(String),
    Lost(Option<String>),
    Quit,
}

/// Run the interactive game on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails, or if the
/// configuration is invalid.
pub fn run_play(options: PlayOptions, dictionary: &[String]) -> Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    play_session(&mut input, &mut output, options, dictionary)
}

/// Run games until the player declines another one
///
/// # Errors
///
/// Returns an error on I/O failure or an invalid configuration.
pub fn play_session<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    options: PlayOptions,
    dictionary: &[String],
) -> Result<()> {
    writeln!(output, "\n{}", "═".repeat(60).bright_cyan())?;
    writeln!(output, "{}", "                 H A N G M A N".bright_green().bold())?;
    writeln!(output, "{}", "═".repeat(60).bright_cyan())?;
    writeln!(
        output,
        "\nGuess a {}-letter word. You may miss {} times.",
        options.config.length, options.config.max_guesses
    )?;
    writeln!(output, "Commands: 'quit' to exit\n")?;

    loop {
        let mut game = options
            .config
            .start(dictionary)
            .context("Failed to start game")?;
        info!(candidates = game.words().len(), "new interactive game");

        match play_game(input, output, &mut game, options.reveal_count)? {
            GameEnd::Quit => break,
            GameEnd::Won(word) => {
                writeln!(
                    output,
                    "\n{} {}",
                    "🎉 You beat me! The word was".bright_green().bold(),
                    word.to_uppercase().bright_yellow().bold()
                )?;
            }
            GameEnd::Lost(word) => {
                let answer = word.unwrap_or_else(|| "(no such word)".to_string());
                writeln!(
                    output,
                    "\n{} {}",
                    "💀 Out of guesses. The word was".red().bold(),
                    answer.to_uppercase().bright_yellow().bold()
                )?;
            }
        }

        let again = prompt(input, output, "Play again? (yes/no)")?;
        let again = again.map(|answer| answer.to_lowercase());
        if !matches!(again.as_deref(), Some("yes" | "y")) {
            break;
        }
    }

    writeln!(output, "\n👋 Thanks for playing!\n")?;
    Ok(())
}

/// Play one game to its end
///
/// # Errors
///
/// Returns an error on I/O failure.
pub fn play_game<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    game: &mut HangmanManager,
    reveal_count: bool,
) -> Result<GameEnd> {
    loop {
        match game.status() {
            GameStatus::Won => {
                let word = game.words().iter().next().cloned().unwrap_or_default();
                return Ok(GameEnd::Won(word));
            }
            GameStatus::Lost => return Ok(GameEnd::Lost(game.words().iter().next().cloned())),
            GameStatus::Active => {}
        }

        print_state(output, game, reveal_count)?;

        let Some(line) = prompt(input, output, "Your guess")? else {
            return Ok(GameEnd::Quit);
        };
        let line = line.to_lowercase();
        if matches!(line.as_str(), "quit" | "q" | "exit") {
            return Ok(GameEnd::Quit);
        }

        let mut chars = line.chars();
        let (Some(letter), None) = (chars.next(), chars.next()) else {
            writeln!(output, "❌ Enter a single letter.\n")?;
            continue;
        };
        if !letter.is_alphabetic() {
            writeln!(output, "❌ '{letter}' is not a letter.\n")?;
            continue;
        }

        match game.record(letter) {
            Ok(0) => writeln!(output, "Sorry, there are no {}'s\n", letter.to_string().red())?,
            Ok(1) => writeln!(output, "Yes, there is one {}\n", letter.to_string().green())?,
            Ok(n) => writeln!(output, "Yes, there are {n} {}'s\n", letter.to_string().green())?,
            Err(HangmanError::AlreadyGuessed(_)) => {
                writeln!(output, "You already guessed '{letter}'.\n")?;
            }
            Err(err) => writeln!(output, "❌ {err}\n")?,
        }
    }
}

fn print_state<W: Write>(
    output: &mut W,
    game: &HangmanManager,
    reveal_count: bool,
) -> io::Result<()> {
    writeln!(output, "{}", "─".repeat(60))?;
    writeln!(output, "Word:    {}", game.pattern().bright_white().bold())?;
    writeln!(
        output,
        "Guesses: {} [{}]",
        game.guesses_left(),
        budget_bar(game.guesses_left(), game.max_guesses(), 20)
    )?;
    writeln!(output, "Guessed: {}", format_letters(game.guesses()))?;
    if reveal_count {
        let count = format!("({} words possible)", game.words().len());
        writeln!(output, "{}", count.bright_black())?;
    }
    Ok(())
}

/// Read one trimmed line, `None` at end of input
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    text: &str,
) -> io::Result<Option<String>> {
    write!(output, "{text}: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
