//! Simulation command
//!
//! Runs many simulated players concurrently against a shared game store.
//! Each round every player in every room plays one game; between rounds the
//! rooms get fresh targets, as a daily word change would.

use crate::core::{GuessResult, Word, score};
use crate::game::Rules;
use crate::store::{GameStore, StoreError};
use crate::wordlists::{RandomPicker, WordPicker};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};
use tracing::debug;

/// Configuration for a simulation run
#[derive(Debug, Clone)]
pub struct SimulateConfig {
    pub rooms: usize,
    pub players_per_room: usize,
    pub rounds: usize,
    pub seed: u64,
}

impl SimulateConfig {
    #[must_use]
    pub const fn new(rooms: usize, players_per_room: usize) -> Self {
        Self {
            rooms,
            players_per_room,
            rounds: 1,
            seed: 0,
        }
    }
}

/// Result of a simulation run
#[derive(Debug)]
pub struct SimulationResult {
    pub games: usize,
    pub won: usize,
    pub lost: usize,
    /// Won games by the number of guesses they took
    pub distribution: BTreeMap<usize, usize>,
    pub total_points: usize,
    /// Guesses sent after a game ended that the store refused
    pub late_guesses_rejected: usize,
    pub duration: Duration,
    pub games_per_second: f64,
}

impl SimulationResult {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.won as f64 / self.games as f64
        }
    }

    #[must_use]
    pub fn average_guesses(&self) -> f64 {
        if self.won == 0 {
            return 0.0;
        }
        let total: usize = self.distribution.iter().map(|(tries, count)| tries * count).sum();
        total as f64 / self.won as f64
    }
}

struct GameOutcome {
    won: bool,
    tries: usize,
    late_rejected: bool,
}

/// Run the simulation over `words`
///
/// Simulated players guess randomly among the words still consistent with
/// the feedback they have seen.
///
/// # Errors
///
/// Returns a `StoreError` if the store fails in a way a well-behaved player
/// should never trigger (for example an unknown room).
pub fn run_simulation(
    rules: &Rules,
    words: &[Word],
    config: &SimulateConfig,
) -> Result<SimulationResult, StoreError> {
    let store = GameStore::new(*rules);
    let mut picker = RandomPicker::seeded(words.to_vec(), config.seed);

    let room_names: Vec<String> = (0..config.rooms).map(|r| format!("room-{r}")).collect();
    for name in &room_names {
        let Some(target) = picker.pick() else {
            break;
        };
        store.open_room(name, target)?;
    }

    let total_games = store.room_count() * config.players_per_room * config.rounds;
    let pb = ProgressBar::new(total_games as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );

    let start = Instant::now();
    let mut outcomes = Vec::with_capacity(total_games);

    for round in 0..config.rounds {
        if round > 0 {
            store.refresh_rooms(&mut picker);
        }
        pb.set_message(format!("Round {}/{}", round + 1, config.rounds));

        let jobs: Vec<(&str, String, u64)> = room_names
            .iter()
            .take(store.room_count())
            .flat_map(|room| {
                (0..config.players_per_room).map(move |p| (room.as_str(), format!("player-{p}")))
            })
            .enumerate()
            .map(|(i, (room, player))| {
                let seed = config
                    .seed
                    .wrapping_add((round * total_games + i) as u64)
                    .wrapping_mul(0x9E37_79B9_7F4A_7C15);
                (room, player, seed)
            })
            .collect();

        let round_outcomes = jobs
            .par_iter()
            .map(|(room, player, seed)| {
                let outcome = play_game(&store, words, room, player, *seed);
                pb.inc(1);
                outcome
            })
            .collect::<Result<Vec<_>, StoreError>>()?;

        outcomes.extend(round_outcomes);
    }

    pb.finish_with_message("Complete!");

    let mut total_points = 0;
    for room in room_names.iter().take(store.room_count()) {
        for p in 0..config.players_per_room {
            total_points += store.score(room, &format!("player-{p}"))?;
        }
    }

    let duration = start.elapsed();
    let games = outcomes.len();
    let won = outcomes.iter().filter(|o| o.won).count();
    let mut distribution = BTreeMap::new();
    for outcome in outcomes.iter().filter(|o| o.won) {
        *distribution.entry(outcome.tries).or_insert(0) += 1;
    }

    Ok(SimulationResult {
        games,
        won,
        lost: games - won,
        distribution,
        total_points,
        late_guesses_rejected: outcomes.iter().filter(|o| o.late_rejected).count(),
        duration,
        games_per_second: games as f64 / duration.as_secs_f64().max(f64::EPSILON),
    })
}

/// Play one game to the end, then try one guess too many
fn play_game(
    store: &GameStore,
    words: &[Word],
    room: &str,
    player: &str,
    seed: u64,
) -> Result<GameOutcome, StoreError> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut candidates: Vec<&Word> = words.iter().collect();
    let mut progress = store.progress(room, player)?;

    while !progress.status(store.rules()).is_over() {
        let Some(&guess) = candidates.choose(&mut rng) else {
            break;
        };
        progress = store.submit(room, player, guess.text())?;

        if let Some(result) = progress.last_try() {
            candidates.retain(|candidate| is_consistent(guess, result, candidate));
        }
    }

    // A player who ran out of candidates mid-game sends nothing more
    let late_rejected = if progress.status(store.rules()).is_over() {
        match words.first().map(|w| store.submit(room, player, w.text())) {
            Some(Err(StoreError::Game(e))) => e.is_game_over(),
            Some(Err(other)) => return Err(other),
            _ => false,
        }
    } else {
        false
    };

    debug!(room, player, won = progress.won(), tries = progress.tries().len(), "game finished");

    Ok(GameOutcome {
        won: progress.won(),
        tries: progress.tries().len(),
        late_rejected,
    })
}

/// Would `candidate` as the target have produced `result` for `guess`?
fn is_consistent(guess: &Word, result: &GuessResult, candidate: &Word) -> bool {
    score(guess, candidate).is_ok_and(|r| r == *result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::TARGETS;
    use crate::wordlists::loader::words_from_slice;

    fn words() -> Vec<Word> {
        words_from_slice(TARGETS, &Rules::default())
    }

    #[test]
    fn simulation_plays_every_game() {
        let mut config = SimulateConfig::new(3, 4);
        config.seed = 42;

        let result = run_simulation(&Rules::default(), &words(), &config).unwrap();

        assert_eq!(result.games, 12);
        assert_eq!(result.won + result.lost, 12);
        assert_eq!(result.late_guesses_rejected, 12);
        assert_eq!(result.distribution.values().sum::<usize>(), result.won);
        assert!(result.distribution.keys().all(|&tries| (1..=5).contains(&tries)));
    }

    #[test]
    fn points_match_distribution() {
        let mut config = SimulateConfig::new(2, 3);
        config.rounds = 2;
        config.seed = 7;

        let result = run_simulation(&Rules::default(), &words(), &config).unwrap();

        let expected: usize = result
            .distribution
            .iter()
            .map(|(tries, count)| (6 - tries) * count)
            .sum();
        assert_eq!(result.games, 12);
        assert_eq!(result.total_points, expected);
    }

    #[test]
    fn consistent_players_win_small_lists() {
        // With only three candidate words a consistent player always wins
        // within three guesses
        let words = words_from_slice(&["about", "agony", "crane"], &Rules::default());
        let mut config = SimulateConfig::new(2, 5);
        config.seed = 1;

        let result = run_simulation(&Rules::default(), &words, &config).unwrap();

        assert_eq!(result.won, result.games);
        assert!(result.average_guesses() <= 3.0);
        assert!((result.win_rate() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn empty_word_list_plays_nothing() {
        let result =
            run_simulation(&Rules::default(), &[], &SimulateConfig::new(2, 2)).unwrap();

        assert_eq!(result.games, 0);
        assert_eq!(result.total_points, 0);
        assert!(result.win_rate().abs() < f64::EPSILON);
    }

    #[test]
    fn no_late_guess_while_game_is_open() {
        // The target is not in the player's list, so the only candidate is
        // ruled out after one guess and the game stays in progress
        let store = GameStore::new(Rules::default());
        store.open_room("room", Word::new("about").unwrap()).unwrap();
        let words = vec![Word::new("crane").unwrap()];

        let outcome = play_game(&store, &words, "room", "alice", 3).unwrap();

        assert!(!outcome.won);
        assert!(!outcome.late_rejected);
        assert_eq!(outcome.tries, 1);
        assert_eq!(store.progress("room", "alice").unwrap().tries().len(), 1);
    }

    #[test]
    fn consistency_filter() {
        let guess = Word::new("agony").unwrap();
        let target = Word::new("about").unwrap();
        let result = score(&guess, &target).unwrap();

        assert!(is_consistent(&guess, &result, &target));
        assert!(!is_consistent(&guess, &result, &Word::new("crane").unwrap()));
    }
}
