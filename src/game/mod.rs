//! Game state tracking
//!
//! `Progress::make_try` is the one operation outer layers call: it enforces
//! the game-over rules, scores the guess and returns the next progress value.

mod error;
mod progress;
mod rules;

pub use error::{GameError, RulesError};
pub use progress::{GameStatus, Progress};
pub use rules::{DEFAULT_MAX_GUESSES, DEFAULT_WORD_LENGTH, Rules};
