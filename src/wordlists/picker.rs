//! Target word selection strategies
//!
//! Defines the `WordPicker` trait and concrete implementations.

use crate::core::Word;
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;

/// A strategy for choosing the next target word
pub trait WordPicker {
    /// Pick the next target
    ///
    /// Returns `None` if the picker has no words to choose from.
    fn pick(&mut self) -> Option<Word>;
}

/// Uniform random choice from a word list
pub struct RandomPicker {
    words: Vec<Word>,
    rng: StdRng,
}

impl RandomPicker {
    /// Random picker seeded from the operating system
    #[must_use]
    pub fn new(words: Vec<Word>) -> Self {
        Self {
            words,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Random picker with a fixed seed, for reproducible runs
    #[must_use]
    pub fn seeded(words: Vec<Word>, seed: u64) -> Self {
        Self {
            words,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }
}

impl WordPicker for RandomPicker {
    fn pick(&mut self) -> Option<Word> {
        self.words.choose(&mut self.rng).cloned()
    }
}

/// Walks a word list in order, wrapping around at the end
pub struct CyclePicker {
    words: Vec<Word>,
    next: usize,
}

impl CyclePicker {
    #[must_use]
    pub const fn new(words: Vec<Word>) -> Self {
        Self { words, next: 0 }
    }
}

impl WordPicker for CyclePicker {
    fn pick(&mut self) -> Option<Word> {
        let word = self.words.get(self.next)?.clone();
        self.next = (self.next + 1) % self.words.len();
        Some(word)
    }
}
