//! Game progress and the guess state machine
//!
//! A `Progress` is a value. Making a try never touches the progress it was
//! called on; it returns a new one with exactly one more scored guess.

use super::error::GameError;
use super::rules::Rules;
use crate::core::{Color, GuessResult, Word, score};
use rustc_hash::FxHashMap;
use serde::Serialize;
use std::fmt;
use tracing::debug;

/// Where a game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

impl GameStatus {
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::InProgress => "in progress",
            Self::Won => "won",
            Self::Lost => "lost",
        };
        f.write_str(text)
    }
}

/// Accumulated state of one game: win flag plus guess history
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Progress {
    won: bool,
    tries: Vec<GuessResult>,
}

impl Progress {
    /// Progress of a game nobody has guessed in yet
    #[must_use]
    pub const fn new() -> Self {
        Self {
            won: false,
            tries: Vec::new(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn won(&self) -> bool {
        self.won
    }

    /// Scored guesses in the order they were made
    #[must_use]
    pub fn tries(&self) -> &[GuessResult] {
        &self.tries
    }

    #[must_use]
    pub fn last_try(&self) -> Option<&GuessResult> {
        self.tries.last()
    }

    #[must_use]
    pub fn status(&self, rules: &Rules) -> GameStatus {
        if self.won {
            GameStatus::Won
        } else if self.tries.len() >= rules.max_guesses() {
            GameStatus::Lost
        } else {
            GameStatus::InProgress
        }
    }

    /// Guesses left before the game is lost
    #[must_use]
    pub fn remaining(&self, rules: &Rules) -> usize {
        if self.won {
            0
        } else {
            rules.max_guesses().saturating_sub(self.tries.len())
        }
    }

    /// Points earned by a won game: one more than the unused guesses
    ///
    /// Winning on the first try of a five-guess game is worth 5, on the last
    /// try 1. Returns `None` unless the game is won.
    #[must_use]
    pub fn points(&self, rules: &Rules) -> Option<usize> {
        self.won
            .then(|| (rules.max_guesses() + 1).saturating_sub(self.tries.len()))
    }

    /// Best color seen so far for every guessed letter
    ///
    /// Useful for drawing a keyboard: a letter once seen as exact stays exact.
    #[must_use]
    pub fn letter_hints(&self) -> FxHashMap<char, Color> {
        let mut hints: FxHashMap<char, Color> = FxHashMap::default();
        for letter in self.tries.iter().flat_map(GuessResult::letters) {
            hints
                .entry(letter.character())
                .and_modify(|best| *best = (*best).max(letter.color()))
                .or_insert(letter.color());
        }
        hints
    }

    /// Score `guess` against `target` and return the resulting progress
    ///
    /// Game-over checks run first (won before budget), so a finished game
    /// never scores another guess.
    ///
    /// # Errors
    /// - `GameError::AlreadyWon` if this progress is already won
    /// - `GameError::AlreadyLost` if the guess budget is used up
    /// - `GameError::InvalidInput` if guess and target differ in length
    ///
    /// # Examples
    /// ```
    /// use wordle_referee::core::Word;
    /// use wordle_referee::game::{GameError, Progress, Rules};
    ///
    /// let rules = Rules::default();
    /// let target = Word::new("about").unwrap();
    ///
    /// let start = Progress::new();
    /// let after = start.make_try(&Word::new("about").unwrap(), &target, &rules).unwrap();
    ///
    /// assert!(after.won());
    /// assert!(start.tries().is_empty());
    /// assert_eq!(
    ///     after.make_try(&target, &target, &rules),
    ///     Err(GameError::AlreadyWon)
    /// );
    /// ```
    pub fn make_try(&self, guess: &Word, target: &Word, rules: &Rules) -> Result<Self, GameError> {
        if self.won {
            debug!(%guess, "rejected guess: already won");
            return Err(GameError::AlreadyWon);
        }
        if self.tries.len() >= rules.max_guesses() {
            debug!(%guess, "rejected guess: out of guesses");
            return Err(GameError::AlreadyLost {
                max_guesses: rules.max_guesses(),
            });
        }

        let result = score(guess, target)?;
        let won = result.is_all_exact();

        let mut tries = Vec::with_capacity(self.tries.len() + 1);
        tries.extend_from_slice(&self.tries);
        tries.push(result);

        debug!(%guess, attempt = tries.len(), won, "guess scored");
        Ok(Self { won, tries })
    }
}
