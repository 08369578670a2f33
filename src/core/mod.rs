//! Core domain types for Wordle
//!
//! Words, per-letter feedback and the scoring rule. Everything here is pure:
//! no I/O, no shared state.

mod feedback;
mod score;
mod word;

pub use feedback::{Color, GuessResult, LetterResult};
pub use score::score;
pub use word::{Word, WordError};
