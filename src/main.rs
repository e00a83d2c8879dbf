//! Evil Hangman - CLI
//!
//! Play Hangman against a host that cheats, simulate guessing strategies
//! against it, or inspect how a guess splits the dictionary.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use evil_hangman::{
    commands::{
        GameConfig, PlayOptions, analyze_families,
        config::{DEFAULT_LENGTH, DEFAULT_MAX_GUESSES},
        run_play, run_simulation,
    },
    guesser::StrategyType,
    output::{print_family_report, print_simulation_result},
    wordlists::{DICTIONARY, available_lengths, loader::words_from_slice},
};
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "evil_hangman",
    about = "Hangman against a host that never commits to a word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Dictionary: 'embedded' (default) or path to a file with one word per line
    #[arg(short = 'd', long, global = true, default_value = "embedded")]
    dictionary: String,

    /// Word length
    #[arg(short = 'l', long, global = true, default_value_t = DEFAULT_LENGTH)]
    length: usize,

    /// Number of wrong guesses allowed
    #[arg(
        short = 'g',
        long,
        global = true,
        default_value_t = DEFAULT_MAX_GUESSES,
        allow_negative_numbers = true
    )]
    guesses: i32,

    /// Log engine decisions (same as RUST_LOG=debug)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Play an interactive game (default)
    Play {
        /// Show how many words are still possible
        #[arg(short, long)]
        reveal: bool,
    },

    /// Let a strategy play automated games
    Simulate {
        /// Strategy: frequency (default), alphabetical, random
        #[arg(short, long, default_value = "frequency")]
        strategy: String,

        /// Games per word length
        #[arg(short = 'n', long, default_value = "1")]
        rounds: usize,

        /// Play every word length in the dictionary instead of just --length
        #[arg(short, long)]
        all_lengths: bool,
    },

    /// Show how a guess splits the candidates into families
    Families {
        /// Letter to break down
        letter: char,

        /// Letters to record first, e.g. "aet"
        #[arg(short, long, default_value = "")]
        after: String,
    },
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Load the dictionary selected by the -d flag
fn load_dictionary(source: &str) -> Result<Vec<String>> {
    use evil_hangman::wordlists::loader::load_from_file;

    let words = match source {
        "embedded" => words_from_slice(DICTIONARY),
        path => load_from_file(path)
            .with_context(|| format!("Failed to load dictionary from {path}"))?,
    };

    if words.is_empty() {
        bail!("Dictionary '{source}' contains no usable words");
    }
    info!(source, words = words.len(), "dictionary loaded");
    Ok(words)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let dictionary = load_dictionary(&cli.dictionary)?;
    let config = GameConfig::new(cli.length, cli.guesses);
    debug!(?config, "game configuration");

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play { reveal: false });

    match command {
        Commands::Play { reveal } => run_play(
            PlayOptions {
                config,
                reveal_count: reveal,
            },
            &dictionary,
        ),
        Commands::Simulate {
            strategy,
            rounds,
            all_lengths,
        } => run_simulate_command(&strategy, rounds, all_lengths, config, &dictionary),
        Commands::Families { letter, after } => {
            run_families_command(letter, &after, config, &dictionary)
        }
    }
}

fn run_simulate_command(
    strategy_name: &str,
    rounds: usize,
    all_lengths: bool,
    config: GameConfig,
    dictionary: &[String],
) -> Result<()> {
    let lengths = if all_lengths {
        available_lengths(dictionary)
    } else {
        vec![config.length]
    };

    let strategy = StrategyType::from_name(strategy_name);
    println!(
        "Simulating {} game(s) per length over {} length(s) with the {} strategy...",
        rounds,
        lengths.len(),
        strategy.name()
    );

    let stats = run_simulation(
        &strategy,
        strategy.name(),
        dictionary,
        &lengths,
        config.max_guesses,
        rounds,
    )?;
    print_simulation_result(&stats);
    Ok(())
}

fn run_families_command(
    letter: char,
    after: &str,
    config: GameConfig,
    dictionary: &[String],
) -> Result<()> {
    let history: Vec<char> = after.to_lowercase().chars().collect();
    let letter = letter.to_ascii_lowercase();

    let report = analyze_families(config, dictionary, &history, letter)?;
    print_family_report(&report);
    Ok(())
}
