//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.
//! Only words playable under the given rules are kept.

use crate::core::Word;
use crate::game::Rules;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// Returns a vector of valid Word instances of the rules' word length,
/// skipping blank lines, `#` comments and any invalid entries.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_referee::game::Rules;
/// use wordle_referee::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/targets.txt", &Rules::default()).unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P, rules: &Rules) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_lines(content.lines(), rules))
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_referee::game::Rules;
/// use wordle_referee::wordlists::loader::words_from_slice;
/// use wordle_referee::wordlists::TARGETS;
///
/// let words = words_from_slice(TARGETS, &Rules::default());
/// assert_eq!(words.len(), TARGETS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str], rules: &Rules) -> Vec<Word> {
    words_from_lines(slice.iter().copied(), rules)
}

fn words_from_lines<'a>(lines: impl Iterator<Item = &'a str>, rules: &Rules) -> Vec<Word> {
    lines
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                None
            } else {
                rules.parse_word(trimmed).ok()
            }
        })
        .collect()
}
