//! A room: one target word shared by any number of players

use crate::core::Word;
use crate::game::{GameError, Progress, Rules};
use rustc_hash::FxHashMap;

/// What the store remembers about one player in one room
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlayerRecord {
    pub progress: Progress,
    /// Points from every game this player has won in the room
    pub score: usize,
}

/// Target word plus each player's progress against it
#[derive(Debug, Clone)]
pub struct Room {
    target: Word,
    players: FxHashMap<String, PlayerRecord>,
}

impl Room {
    #[must_use]
    pub fn new(target: Word) -> Self {
        Self {
            target,
            players: FxHashMap::default(),
        }
    }

    #[must_use]
    pub const fn target(&self) -> &Word {
        &self.target
    }

    #[must_use]
    pub fn player(&self, player: &str) -> Option<&PlayerRecord> {
        self.players.get(player)
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// Swap in a new target and start every player over
    ///
    /// Scores are kept.
    pub fn reset(&mut self, target: Word) {
        self.target = target;
        for record in self.players.values_mut() {
            record.progress = Progress::new();
        }
    }

    /// Play `guess` for `player` against this room's target
    ///
    /// On success the player's progress is replaced and a win is credited.
    ///
    /// # Errors
    /// Returns the `GameError` from `Progress::make_try`; the player's record
    /// is left as it was.
    pub fn submit(
        &mut self,
        player: &str,
        guess: &Word,
        rules: &Rules,
    ) -> Result<Progress, GameError> {
        let record = self.players.entry(player.to_string()).or_default();
        let progress = record.progress.make_try(guess, &self.target, rules)?;

        if let Some(points) = progress.points(rules) {
            record.score += points;
        }
        record.progress = progress.clone();

        Ok(progress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn players_progress_independently() {
        let rules = Rules::default();
        let mut room = Room::new(word("about"));

        room.submit("ann", &word("agony"), &rules).unwrap();
        room.submit("bob", &word("about"), &rules).unwrap();

        assert_eq!(room.player_count(), 2);
        assert!(!room.player("ann").unwrap().progress.won());
        assert!(room.player("bob").unwrap().progress.won());
        assert_eq!(room.player("bob").unwrap().score, 5);
        assert_eq!(room.player("ann").unwrap().score, 0);
    }

    #[test]
    fn failed_submit_keeps_record() {
        let rules = Rules::default();
        let mut room = Room::new(word("about"));
        room.submit("ann", &word("about"), &rules).unwrap();

        let before = room.player("ann").unwrap().clone();
        assert_eq!(
            room.submit("ann", &word("agony"), &rules),
            Err(GameError::AlreadyWon)
        );
        assert_eq!(room.player("ann").unwrap(), &before);
    }

    #[test]
    fn reset_clears_progress_but_keeps_score() {
        let rules = Rules::default();
        let mut room = Room::new(word("about"));
        room.submit("ann", &word("about"), &rules).unwrap();

        room.reset(word("agony"));

        let record = room.player("ann").unwrap();
        assert_eq!(room.target().text(), "agony");
        assert!(record.progress.tries().is_empty());
        assert_eq!(record.score, 5);

        room.submit("ann", &word("agony"), &rules).unwrap();
        assert_eq!(room.player("ann").unwrap().score, 10);
    }
}
