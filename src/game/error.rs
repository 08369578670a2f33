//! Errors raised while playing a game

use crate::core::WordError;
use thiserror::Error;

/// Why a guess was not accepted
///
/// None of these are transient: repeating the same call fails the same way.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    /// Guess or target is malformed, or their lengths differ
    #[error("invalid input: {0}")]
    InvalidInput(#[from] WordError),
    #[error("the game is already won")]
    AlreadyWon,
    #[error("the game is already lost: all {max_guesses} guesses used")]
    AlreadyLost { max_guesses: usize },
}

impl GameError {
    /// True for the errors that mean the game has ended
    #[must_use]
    pub const fn is_game_over(&self) -> bool {
        matches!(self, Self::AlreadyWon | Self::AlreadyLost { .. })
    }
}

/// Invalid rule parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RulesError {
    #[error("max guesses must be at least 1")]
    NoGuesses,
    #[error("word length must be at least 1")]
    EmptyWords,
}
