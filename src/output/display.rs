//! Display functions for command results

use super::formatters::{create_progress_bar, word_preview};
use crate::commands::{FamilyReport, SimulationStatistics};
use colored::Colorize;

/// Print the breakdown of a guess into families
pub fn print_family_report(report: &FamilyReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} '{}' ",
        "FAMILIES FOR".bright_cyan().bold(),
        report.letter.to_string().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\nPattern:    {}", report.pattern_before.bright_white().bold());
    println!("Candidates: {}", report.candidates);

    if report.rows.is_empty() {
        println!("\n{}", "No candidate words of this length.".yellow());
        return;
    }

    println!();
    for row in &report.rows {
        let marker = if row.kept { "▶".green().bold() } else { " ".normal() };
        let share = row.size as f64 / report.candidates as f64;
        println!(
            " {marker} {:<24} {:>6}  [{}]  {}",
            row.pattern,
            row.size,
            create_progress_bar(share, 1.0, 20).green(),
            word_preview(&row.sample, row.size, row.sample.len()).bright_black()
        );
    }
}

/// Print the result of a simulation run
pub fn print_simulation_result(stats: &SimulationStatistics) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Strategy:         {}", stats.strategy);
    println!("   Games played:     {}", stats.total_games);
    println!(
        "   Won / lost:       {} / {}",
        stats.won.to_string().green(),
        stats.lost.to_string().red()
    );
    println!(
        "   Win rate:         {}",
        format!("{:.1}%", stats.win_rate * 100.0).bright_yellow().bold()
    );
    println!("   Average misses:   {:.2}", stats.average_misses);
    println!("   Time taken:       {:.2}s", stats.duration.as_secs_f64());

    println!("\n📈 {}", "By word length:".bright_cyan().bold());
    for (length, tally) in &stats.by_length {
        let rate = if tally.games == 0 {
            0.0
        } else {
            tally.won as f64 / tally.games as f64
        };
        println!(
            "   {length:>2}: {} {:>4}/{:<4} ({:5.1}%)",
            create_progress_bar(rate, 1.0, 30).green(),
            tally.won,
            tally.games,
            rate * 100.0
        );
    }

    if let Some(hardest) = &stats.hardest {
        println!("\n💀 {}", "Hardest loss:".bright_cyan().bold());
        println!(
            "   Length {} ended at {} with {} words still possible",
            hardest.length,
            hardest.pattern.bright_white(),
            hardest.remaining_words
        );
        let guesses: String = hardest.guesses.iter().collect();
        println!("   Guesses: {}", guesses.bright_black());
    }
}
