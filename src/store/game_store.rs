//! Concurrent in-memory game store
//!
//! Each room sits behind its own map entry lock, so every read-modify-write
//! of a player's progress is serialized per room while different rooms
//! proceed in parallel.

use super::room::Room;
use crate::core::{Word, WordError};
use crate::game::{GameError, Progress, Rules};
use crate::wordlists::WordPicker;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry;
use dashmap::mapref::one::Ref;
use thiserror::Error;
use tracing::{debug, info, instrument, warn};

/// Errors from store operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("room '{0}' not found")]
    RoomNotFound(String),
    #[error("invalid target word: {0}")]
    InvalidTarget(WordError),
    /// Passed through untranslated so callers can tell won from lost
    #[error(transparent)]
    Game(#[from] GameError),
}

/// All rooms being played under one set of rules
pub struct GameStore {
    rules: Rules,
    rooms: DashMap<String, Room>,
}

impl GameStore {
    #[must_use]
    pub fn new(rules: Rules) -> Self {
        Self {
            rules,
            rooms: DashMap::new(),
        }
    }

    #[must_use]
    pub const fn rules(&self) -> &Rules {
        &self.rules
    }

    #[must_use]
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Create a room, or give an existing one a new target
    ///
    /// Replacing the target resets every player in the room in one step.
    ///
    /// # Errors
    /// Returns `StoreError::InvalidTarget` if the target has the wrong length.
    #[instrument(skip(self, target))]
    pub fn open_room(&self, room: &str, target: Word) -> Result<(), StoreError> {
        self.check_target(&target)?;

        match self.rooms.entry(room.to_string()) {
            Entry::Occupied(mut existing) => {
                existing.get_mut().reset(target);
                info!(players = existing.get().player_count(), "room target replaced");
            }
            Entry::Vacant(vacant) => {
                vacant.insert(Room::new(target));
                info!("room opened");
            }
        }
        Ok(())
    }

    /// Give every room a fresh target from `picker`
    ///
    /// Rooms for which the picker yields nothing playable keep their target.
    /// Returns the number of rooms refreshed.
    #[instrument(skip_all)]
    pub fn refresh_rooms<P: WordPicker + ?Sized>(&self, picker: &mut P) -> usize {
        let mut refreshed = 0;

        for mut room in self.rooms.iter_mut() {
            let Some(target) = picker.pick() else {
                warn!(room = %room.key(), "picker ran out of words");
                continue;
            };
            if let Err(e) = self.check_target(&target) {
                warn!(room = %room.key(), %e, "picked target skipped");
                continue;
            }
            room.reset(target);
            refreshed += 1;
            debug!(room = %room.key(), "target refreshed");
        }

        info!(refreshed, "rooms refreshed");
        refreshed
    }

    /// A player's current progress in a room
    ///
    /// Players who have not guessed yet have empty progress.
    ///
    /// # Errors
    /// Returns `StoreError::RoomNotFound` if the room does not exist.
    pub fn progress(&self, room: &str, player: &str) -> Result<Progress, StoreError> {
        let room = self.room(room)?;
        Ok(room
            .player(player)
            .map(|record| record.progress.clone())
            .unwrap_or_default())
    }

    /// Points a player has accumulated in a room
    ///
    /// # Errors
    /// Returns `StoreError::RoomNotFound` if the room does not exist.
    pub fn score(&self, room: &str, player: &str) -> Result<usize, StoreError> {
        let room = self.room(room)?;
        Ok(room.player(player).map_or(0, |record| record.score))
    }

    /// The word a room is currently playing against
    ///
    /// # Errors
    /// Returns `StoreError::RoomNotFound` if the room does not exist.
    pub fn target(&self, room: &str) -> Result<Word, StoreError> {
        Ok(self.room(room)?.target().clone())
    }

    /// Play a guess for a player and store the resulting progress
    ///
    /// # Errors
    /// - `StoreError::RoomNotFound` if the room does not exist
    /// - `StoreError::Game` if the guess is malformed or the game is over
    #[instrument(skip(self))]
    pub fn submit(&self, room: &str, player: &str, guess: &str) -> Result<Progress, StoreError> {
        let mut entry = self
            .rooms
            .get_mut(room)
            .ok_or_else(|| StoreError::RoomNotFound(room.to_string()))?;

        let result = self
            .rules
            .parse_word(guess)
            .map_err(GameError::from)
            .and_then(|guess| entry.submit(player, &guess, &self.rules));

        match result {
            Ok(progress) => {
                debug!(tries = progress.tries().len(), won = progress.won(), "guess stored");
                Ok(progress)
            }
            Err(e) => {
                warn!(%e, "guess rejected");
                Err(e.into())
            }
        }
    }

    fn room(&self, room: &str) -> Result<Ref<'_, String, Room>, StoreError> {
        self.rooms
            .get(room)
            .ok_or_else(|| StoreError::RoomNotFound(room.to_string()))
    }

    fn check_target(&self, target: &Word) -> Result<(), StoreError> {
        if target.len() == self.rules.word_length() {
            Ok(())
        } else {
            Err(StoreError::InvalidTarget(WordError::WrongLength {
                expected: self.rules.word_length(),
                actual: target.len(),
            }))
        }
    }
}
