//! Display functions for game state and command results

use super::formatters::{colored_row, create_progress_bar, guess_to_emoji};
use crate::commands::{ScoreReport, SimulationResult};
use crate::core::Word;
use crate::game::{GameStatus, Progress, Rules};
use colored::Colorize;

/// Print every scored guess, then an empty slot per remaining guess
pub fn print_board(progress: &Progress, rules: &Rules) {
    for (i, result) in progress.tries().iter().enumerate() {
        println!(
            "  {} {}  {}",
            format!("{}.", i + 1).bright_black(),
            colored_row(result),
            guess_to_emoji(result)
        );
    }

    let empty_row = " · ".repeat(rules.word_length());
    for i in progress.tries().len()..rules.max_guesses() {
        println!(
            "  {} {}",
            format!("{}.", i + 1).bright_black(),
            empty_row.bright_black()
        );
    }
}

/// Print the end-of-game message
///
/// Won and lost games get different messages; a game still in progress
/// prints the number of guesses left.
pub fn print_outcome(progress: &Progress, rules: &Rules, target: &Word) {
    match progress.status(rules) {
        GameStatus::Won => {
            let tries = progress.tries().len();
            let banner = match tries {
                1 => "🏆 Perfect! Hole in one!",
                2 => "⭐ Excellent!",
                3 => "💫 Great!",
                4 => "✨ Good!",
                _ => "👍 Solved!",
            };
            println!("{}", banner.bright_green().bold());
            println!(
                "Solved in {} {} for {} points.",
                tries.to_string().bright_cyan().bold(),
                if tries == 1 { "guess" } else { "guesses" },
                progress.points(rules).unwrap_or(0).to_string().bright_yellow().bold()
            );
        }
        GameStatus::Lost => {
            println!(
                "{}",
                format!("❌ Out of guesses after {} tries", progress.tries().len())
                    .red()
                    .bold()
            );
            println!("The word was {}.", target.text().to_uppercase().bright_yellow().bold());
        }
        GameStatus::InProgress => {
            println!("{} guesses left.", progress.remaining(rules));
        }
    }
}

/// Print the result of scoring a list of guesses
pub fn print_score_report(report: &ScoreReport, rules: &Rules) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Target: {}",
        report.target.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());
    println!();

    print_board(&report.progress, rules);
    println!();

    if let Some((guess, e)) = &report.rejected {
        let message = if e.is_game_over() {
            format!("⛔ '{guess}' not played: {e}").yellow()
        } else {
            format!("❌ '{guess}' rejected: {e}").red()
        };
        println!("{}", message.bold());
    }

    print_outcome(&report.progress, rules, &report.target);
}

/// Print the result of a simulation run
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Games:".bright_cyan().bold());
    println!("   Played:           {}", result.games);
    println!(
        "   Won:              {} ({:.1}%)",
        result.won.to_string().green(),
        result.win_rate() * 100.0
    );
    println!("   Lost:             {}", result.lost.to_string().red());
    println!(
        "   Average guesses:  {}",
        format!("{:.2}", result.average_guesses())
            .bright_yellow()
            .bold()
    );
    println!("   Points awarded:   {}", result.total_points);
    println!(
        "   Late guesses refused: {}/{}",
        result.late_guesses_rejected, result.games
    );
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    if result.won == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for (&tries, &count) in &result.distribution {
        let pct = count as f64 / result.won as f64 * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {tries}: {} {count:5} ({pct:5.1}%)", bar.green());
    }
}
