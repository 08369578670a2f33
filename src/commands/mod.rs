//! Command implementations

pub mod score;
pub mod simple;
pub mod simulate;

pub use score::{ScoreConfig, ScoreReport, score_guesses};
pub use simple::run_simple;
pub use simulate::{SimulateConfig, SimulationResult, run_simulation};
