//! Game rules: guess budget and word length

use super::error::RulesError;
use crate::core::{Word, WordError};

/// Guess budget used when none is configured
pub const DEFAULT_MAX_GUESSES: usize = 5;

/// Word length used when none is configured
pub const DEFAULT_WORD_LENGTH: usize = 5;

/// Parameters shared by every game played under them
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    max_guesses: usize,
    word_length: usize,
}

impl Rules {
    /// Create rules with a custom guess budget and word length
    ///
    /// # Errors
    /// Returns `RulesError` if either value is zero.
    pub const fn new(max_guesses: usize, word_length: usize) -> Result<Self, RulesError> {
        if max_guesses == 0 {
            return Err(RulesError::NoGuesses);
        }
        if word_length == 0 {
            return Err(RulesError::EmptyWords);
        }
        Ok(Self {
            max_guesses,
            word_length,
        })
    }

    #[inline]
    #[must_use]
    pub const fn max_guesses(&self) -> usize {
        self.max_guesses
    }

    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    /// Parse a word and check it has the configured length
    ///
    /// # Errors
    /// Returns `WordError` if the text is not a valid word or has the wrong length.
    ///
    /// # Examples
    /// ```
    /// use wordle_referee::game::Rules;
    ///
    /// let rules = Rules::default();
    /// assert!(rules.parse_word("ABOUT").is_ok());
    /// assert!(rules.parse_word("abouts").is_err());
    /// ```
    pub fn parse_word(&self, text: &str) -> Result<Word, WordError> {
        let word = Word::new(text.trim())?;
        if word.len() != self.word_length {
            return Err(WordError::WrongLength {
                expected: self.word_length,
                actual: word.len(),
            });
        }
        Ok(word)
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            max_guesses: DEFAULT_MAX_GUESSES,
            word_length: DEFAULT_WORD_LENGTH,
        }
    }
}
