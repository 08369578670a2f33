//! Letter scoring for a single guess
//!
//! Duplicate letters are handled with a pool of the target's letters: exact
//! matches consume from the pool first, then the remaining positions are
//! credited left to right while the pool still holds their letter.

use super::feedback::{Color, GuessResult, LetterResult};
use super::word::{Word, WordError};
use rustc_hash::FxHashMap;

/// Score `guess` against `target`
///
/// # Algorithm
/// 1. First pass: mark all exact matches and remove them from the pool
/// 2. Second pass: left to right, mark a pending letter present if the pool
///    still holds it (consuming one occurrence), absent otherwise
///
/// The result is a pure function of its inputs.
///
/// # Errors
/// Returns `WordError::LengthMismatch` if the words differ in length.
///
/// # Examples
/// ```
/// use wordle_referee::core::{Color, Word, score};
///
/// let guess = Word::new("bbqqq").unwrap();
/// let target = Word::new("bobar").unwrap();
/// let colors: Vec<Color> = score(&guess, &target).unwrap().colors().collect();
///
/// // Only one of the two spare b's in the guess can be credited
/// assert_eq!(
///     colors,
///     [Color::Exact, Color::Present, Color::Absent, Color::Absent, Color::Absent]
/// );
/// ```
pub fn score(guess: &Word, target: &Word) -> Result<GuessResult, WordError> {
    if guess.len() != target.len() {
        return Err(WordError::LengthMismatch {
            guess: guess.len(),
            target: target.len(),
        });
    }

    let mut colors: Vec<Option<Color>> = vec![None; guess.len()];
    let mut pool = target.letter_counts();

    // First pass: exact position matches
    // Allow: Index needed to access guess[i], target[i], and set colors[i]
    #[allow(clippy::needless_range_loop)]
    for i in 0..guess.len() {
        if guess.char_at(i) == target.char_at(i) {
            colors[i] = Some(Color::Exact);
            take_from_pool(&mut pool, guess.char_at(i));
        }
    }

    // Second pass: present elsewhere, earliest pending position wins
    for (slot, &letter) in colors.iter_mut().zip(guess.letters()) {
        if slot.is_none() {
            *slot = Some(if take_from_pool(&mut pool, letter) {
                Color::Present
            } else {
                Color::Absent
            });
        }
    }

    let letters = guess
        .letters()
        .iter()
        .zip(colors)
        .map(|(&letter, color)| {
            LetterResult::new(char::from(letter), color.unwrap_or(Color::Absent))
        })
        .collect();

    Ok(GuessResult::new(letters))
}

/// Consume one occurrence of `letter`, returning whether one was available
fn take_from_pool(pool: &mut FxHashMap<u8, usize>, letter: u8) -> bool {
    match pool.get_mut(&letter) {
        Some(count) if *count > 0 => {
            *count -= 1;
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Color::{Absent, Exact, Present};
    use pretty_assertions::assert_eq;

    fn colors(guess: &str, target: &str) -> Vec<Color> {
        let guess = Word::new(guess).unwrap();
        let target = Word::new(target).unwrap();
        score(&guess, &target).unwrap().colors().collect()
    }

    #[test]
    fn all_absent() {
        assert_eq!(colors("abcde", "fghij"), [Absent; 5]);
    }

    #[test]
    fn all_exact() {
        assert_eq!(colors("crane", "crane"), [Exact; 5]);
    }

    #[test]
    fn spare_duplicate_credited_once() {
        assert_eq!(
            colors("bbqqq", "bobar"),
            [Exact, Present, Absent, Absent, Absent]
        );
    }

    #[test]
    fn earliest_pending_duplicate_credited() {
        assert_eq!(
            colors("bqqbb", "bobar"),
            [Exact, Absent, Absent, Present, Absent]
        );
    }

    #[test]
    fn no_false_presence() {
        assert_eq!(
            colors("qqqra", "bobar"),
            [Absent, Absent, Absent, Present, Present]
        );
    }

    #[test]
    fn exact_match_consumes_before_presence() {
        // "floor" has two o's; the exact one at index 3 is claimed first,
        // leaving one for the guess's first 'o'
        assert_eq!(
            colors("robot", "floor"),
            [Present, Present, Absent, Exact, Absent]
        );
    }

    #[test]
    fn exact_match_later_starves_earlier_duplicate() {
        // "about" has a single 'a', claimed by the exact match at index 0,
        // so nothing is left for the other a's
        assert_eq!(
            colors("aaaaa", "about"),
            [Exact, Absent, Absent, Absent, Absent]
        );
        assert_eq!(
            colors("bobaa", "bobar"),
            [Exact, Exact, Exact, Exact, Absent]
        );
    }

    #[test]
    fn wrong_positions_both_credited() {
        assert_eq!(
            colors("abotu", "about"),
            [Exact, Exact, Exact, Present, Present]
        );
    }

    #[test]
    fn scoring_is_deterministic() {
        for (guess, target) in [("speed", "erase"), ("bqqbb", "bobar"), ("agony", "about")] {
            assert_eq!(colors(guess, target), colors(guess, target));
        }
    }

    #[test]
    fn result_aligned_with_guess() {
        let guess = Word::new("agony").unwrap();
        let target = Word::new("about").unwrap();
        let result = score(&guess, &target).unwrap();

        assert_eq!(result.len(), guess.len());
        assert_eq!(result.word(), "agony");
        assert_eq!(result.letters()[1].character(), 'g');
        assert_eq!(result.letters()[1].color(), Absent);
    }

    #[test]
    fn other_lengths_score_too() {
        assert_eq!(colors("tac", "cat"), [Present, Exact, Present]);
        assert_eq!(colors("x", "x"), [Exact]);
    }

    #[test]
    fn length_mismatch_rejected() {
        let guess = Word::new("abc").unwrap();
        let target = Word::new("about").unwrap();
        assert_eq!(
            score(&guess, &target),
            Err(WordError::LengthMismatch {
                guess: 3,
                target: 5
            })
        );
    }
}
