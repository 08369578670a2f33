//! Formatting utilities for terminal output

use crate::core::{Color, GuessResult, LetterResult};
use colored::{ColoredString, Colorize};

/// Format a scored guess as an emoji string
#[must_use]
pub fn guess_to_emoji(result: &GuessResult) -> String {
    result.to_emoji()
}

/// A single letter as a colored terminal tile
#[must_use]
pub fn colored_tile(letter: LetterResult) -> ColoredString {
    let text = format!(" {} ", letter.character().to_ascii_uppercase());
    match letter.color() {
        Color::Exact => text.black().on_green().bold(),
        Color::Present => text.black().on_yellow().bold(),
        Color::Absent => text.white().on_bright_black(),
    }
}

/// A scored guess as a row of colored tiles
#[must_use]
pub fn colored_row(result: &GuessResult) -> String {
    result
        .letters()
        .iter()
        .map(|&letter| colored_tile(letter).to_string())
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Word, score};

    fn scored(guess: &str, target: &str) -> GuessResult {
        score(&Word::new(guess).unwrap(), &Word::new(target).unwrap()).unwrap()
    }

    #[test]
    fn guess_to_emoji_all_absent() {
        assert_eq!(guess_to_emoji(&scored("qqqqq", "about")), "⬜⬜⬜⬜⬜");
    }

    #[test]
    fn guess_to_emoji_all_exact() {
        assert_eq!(guess_to_emoji(&scored("about", "about")), "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn colored_row_contains_letters() {
        colored::control::set_override(false);
        let row = colored_row(&scored("agony", "about"));
        assert_eq!(row, " A  G  O  N  Y ");
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }
}
