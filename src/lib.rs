//! Wordle Referee
//!
//! Scores Wordle guesses against a hidden target and tracks each player's
//! progress through a game, from a single TUI session up to many concurrent
//! rooms sharing one store.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_referee::core::{Color, Word};
//! use wordle_referee::game::{Progress, Rules};
//!
//! let rules = Rules::default();
//! let target = Word::new("about").unwrap();
//!
//! // Each guess returns a new progress value
//! let progress = Progress::new();
//! let progress = progress
//!     .make_try(&Word::new("agony").unwrap(), &target, &rules)
//!     .unwrap();
//!
//! let last = progress.last_try().unwrap();
//! assert_eq!(last.letters()[0].color(), Color::Exact);
//! assert!(!progress.won());
//! ```

// Core domain types
pub mod core;

// Progress tracking and game rules
pub mod game;

// Concurrent per-room game storage
pub mod store;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;

// Tracing subscriber setup
pub mod logging;
