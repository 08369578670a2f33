//! Per-letter feedback for a scored guess
//!
//! Each position of a guess gets one of three colors:
//! - Exact: right letter, right position
//! - Present: letter is in the target somewhere else
//! - Absent: letter is not in the target, or every occurrence is already
//!   accounted for

use serde::Serialize;
use std::fmt;

/// Verdict for a single letter of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Absent,
    Present,
    Exact,
}

impl Color {
    /// Square emoji for this color
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Exact => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Self::Exact => "exact",
            Self::Present => "present",
            Self::Absent => "absent",
        };
        f.write_str(tag)
    }
}

/// One scored position of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LetterResult {
    character: char,
    color: Color,
}

impl LetterResult {
    #[must_use]
    pub const fn new(character: char, color: Color) -> Self {
        Self { character, color }
    }

    #[inline]
    #[must_use]
    pub const fn character(self) -> char {
        self.character
    }

    #[inline]
    #[must_use]
    pub const fn color(self) -> Color {
        self.color
    }
}

/// A fully scored guess, index-aligned with the guessed word
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GuessResult {
    letters: Vec<LetterResult>,
}

impl GuessResult {
    pub(crate) const fn new(letters: Vec<LetterResult>) -> Self {
        Self { letters }
    }

    #[must_use]
    pub fn letters(&self) -> &[LetterResult] {
        &self.letters
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.letters.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.letters.is_empty()
    }

    /// Colors in position order
    pub fn colors(&self) -> impl Iterator<Item = Color> + '_ {
        self.letters.iter().map(|letter| letter.color)
    }

    /// True when every letter is an exact match
    #[must_use]
    pub fn is_all_exact(&self) -> bool {
        !self.letters.is_empty() && self.colors().all(|color| color == Color::Exact)
    }

    /// Count the letters with the given color
    #[must_use]
    pub fn count(&self, color: Color) -> usize {
        self.colors().filter(|&c| c == color).count()
    }

    /// The guessed word, reassembled from its letters
    #[must_use]
    pub fn word(&self) -> String {
        self.letters.iter().map(|letter| letter.character).collect()
    }

    /// Convert to emoji string
    ///
    /// # Examples
    /// ```
    /// use wordle_referee::core::{Word, score};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let target = Word::new("slate").unwrap();
    /// assert_eq!(score(&guess, &target).unwrap().to_emoji(), "⬜⬜🟩⬜🟩");
    /// ```
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.colors().map(Color::to_emoji).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(word: &str, colors: &[Color]) -> GuessResult {
        GuessResult::new(
            word.chars()
                .zip(colors)
                .map(|(ch, &color)| LetterResult::new(ch, color))
                .collect(),
        )
    }

    #[test]
    fn color_emoji() {
        assert_eq!(Color::Exact.to_emoji(), '🟩');
        assert_eq!(Color::Present.to_emoji(), '🟨');
        assert_eq!(Color::Absent.to_emoji(), '⬜');
    }

    #[test]
    fn color_ordering_ranks_exact_highest() {
        assert!(Color::Exact > Color::Present);
        assert!(Color::Present > Color::Absent);
    }

    #[test]
    fn color_serializes_as_lowercase_tag() {
        assert_eq!(serde_json::to_string(&Color::Exact).unwrap(), "\"exact\"");
        assert_eq!(serde_json::to_string(&Color::Present).unwrap(), "\"present\"");
        assert_eq!(serde_json::to_string(&Color::Absent).unwrap(), "\"absent\"");
    }

    #[test]
    fn guess_result_counts() {
        use Color::{Absent, Exact, Present};
        let guess = result("abotu", &[Exact, Exact, Exact, Present, Present]);

        assert_eq!(guess.len(), 5);
        assert_eq!(guess.count(Exact), 3);
        assert_eq!(guess.count(Present), 2);
        assert_eq!(guess.count(Absent), 0);
        assert!(!guess.is_all_exact());
        assert_eq!(guess.word(), "abotu");
        assert_eq!(guess.to_emoji(), "🟩🟩🟩🟨🟨");
    }

    #[test]
    fn guess_result_all_exact() {
        let guess = result("about", &[Color::Exact; 5]);
        assert!(guess.is_all_exact());
    }

    #[test]
    fn empty_guess_result_is_not_a_win() {
        assert!(!GuessResult::new(Vec::new()).is_all_exact());
    }

    #[test]
    fn guess_result_json_shape() {
        let guess = result("ab", &[Color::Exact, Color::Absent]);
        let json = serde_json::to_string(&guess).unwrap();
        assert_eq!(
            json,
            r#"{"letters":[{"character":"a","color":"exact"},{"character":"b","color":"absent"}]}"#
        );
    }
}
