//! In-memory storage of games
//!
//! Rooms hold a target word and one progress record per player. The store is
//! the layer that serializes concurrent guesses against the same game.

mod game_store;
mod room;

pub use game_store::{GameStore, StoreError};
pub use room::{PlayerRecord, Room};
