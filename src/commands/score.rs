//! Score command
//!
//! Plays a fixed list of guesses against a known target and reports the
//! resulting progress.

use crate::core::Word;
use crate::game::{GameError, Progress, Rules};

/// Configuration for scoring a list of guesses
pub struct ScoreConfig {
    pub target: String,
    pub guesses: Vec<String>,
}

/// Result of scoring a list of guesses
pub struct ScoreReport {
    pub target: Word,
    /// Progress after the last accepted guess
    pub progress: Progress,
    /// The first guess that was refused, and why; later guesses are not tried
    pub rejected: Option<(String, GameError)>,
}

/// Play every guess in order until one is refused
///
/// # Errors
///
/// Returns `GameError::InvalidInput` if the target is not a valid word of the
/// configured length. Problems with individual guesses are reported in
/// `ScoreReport::rejected` instead.
///
/// # Examples
/// ```
/// use wordle_referee::commands::{ScoreConfig, score_guesses};
/// use wordle_referee::game::Rules;
///
/// let config = ScoreConfig {
///     target: "about".to_string(),
///     guesses: vec!["agony".to_string(), "about".to_string()],
/// };
/// let report = score_guesses(&config, &Rules::default()).unwrap();
/// assert!(report.progress.won());
/// assert!(report.rejected.is_none());
/// ```
pub fn score_guesses(config: &ScoreConfig, rules: &Rules) -> Result<ScoreReport, GameError> {
    let target = rules.parse_word(&config.target)?;
    let mut progress = Progress::new();

    for text in &config.guesses {
        let attempt = rules
            .parse_word(text)
            .map_err(GameError::from)
            .and_then(|guess| progress.make_try(&guess, &target, rules));

        match attempt {
            Ok(next) => progress = next,
            Err(e) => {
                return Ok(ScoreReport {
                    target,
                    progress,
                    rejected: Some((text.clone(), e)),
                });
            }
        }
    }

    Ok(ScoreReport {
        target,
        progress,
        rejected: None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Color, WordError};
    use crate::game::GameStatus;

    fn config(target: &str, guesses: &[&str]) -> ScoreConfig {
        ScoreConfig {
            target: target.to_string(),
            guesses: guesses.iter().map(|g| (*g).to_string()).collect(),
        }
    }

    #[test]
    fn scores_every_guess() {
        let rules = Rules::default();
        let report = score_guesses(&config("about", &["agony", "abotu"]), &rules).unwrap();

        assert_eq!(report.progress.tries().len(), 2);
        assert_eq!(report.progress.status(&rules), GameStatus::InProgress);
        assert!(report.rejected.is_none());
        assert_eq!(
            report.progress.tries()[1].colors().collect::<Vec<_>>(),
            [
                Color::Exact,
                Color::Exact,
                Color::Exact,
                Color::Present,
                Color::Present
            ]
        );
    }

    #[test]
    fn stops_after_win() {
        let report =
            score_guesses(&config("about", &["about", "agony"]), &Rules::default()).unwrap();

        assert!(report.progress.won());
        assert_eq!(report.progress.tries().len(), 1);
        assert_eq!(
            report.rejected,
            Some(("agony".to_string(), GameError::AlreadyWon))
        );
    }

    #[test]
    fn stops_after_exhaustion() {
        let guesses = ["bbqqq", "bqqbb", "qqqra", "bobaa", "aaaaa", "bobar"];
        let report = score_guesses(&config("bobar", &guesses), &Rules::default()).unwrap();

        assert!(!report.progress.won());
        assert_eq!(report.progress.tries().len(), 5);
        assert_eq!(
            report.rejected,
            Some(("bobar".to_string(), GameError::AlreadyLost { max_guesses: 5 }))
        );
    }

    #[test]
    fn bad_guess_is_reported() {
        let report =
            score_guesses(&config("about", &["agony", "ab", "about"]), &Rules::default()).unwrap();

        assert_eq!(report.progress.tries().len(), 1);
        assert!(matches!(
            report.rejected,
            Some((ref guess, GameError::InvalidInput(WordError::WrongLength { .. }))) if guess == "ab"
        ));
    }

    #[test]
    fn bad_target_is_an_error() {
        assert!(matches!(
            score_guesses(&config("ab0ut", &["about"]), &Rules::default()),
            Err(GameError::InvalidInput(WordError::InvalidCharacters))
        ));
    }
}
