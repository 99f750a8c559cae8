//! Game state management.

use alloc::string::String;
use alloc::vec::Vec;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::catalog::standard_catalog;
use crate::options::MemoryOptions;

mod deck;
mod score;

/// One position in the deck: a card identifier, or `None` once cleared.
pub type Slot = Option<String>;

/// Deck and score state for one memory game session.
///
/// The game owns the catalog, the deck in play, the score counter, and the
/// random number generator used for shuffling. Use [`MemoryOptions`] to
/// configure jokers, copies per card, and oversized request handling.
#[derive(Debug, Clone)]
pub struct MemoryGame {
    /// Game options.
    options: MemoryOptions,
    /// Every card identifier, in canonical order.
    catalog: Vec<String>,
    /// Slots currently in play.
    deck: Vec<Slot>,
    /// Current score.
    score: u64,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl MemoryGame {
    /// Creates a new game with the given seed.
    ///
    /// The catalog is built here once and stays in canonical order for the
    /// lifetime of the game. The deck starts empty and the score at zero.
    ///
    /// # Example
    ///
    /// ```
    /// use memrs::{CATALOG_SIZE, MemoryGame, MemoryOptions};
    ///
    /// let game = MemoryGame::new(MemoryOptions::default(), 42);
    /// assert_eq!(game.catalog().len(), CATALOG_SIZE);
    /// assert!(game.deck().is_empty());
    /// assert_eq!(game.score(), 0);
    /// ```
    #[must_use]
    pub fn new(options: MemoryOptions, seed: u64) -> Self {
        let catalog = standard_catalog(options.include_jokers);
        log::debug!(
            "memory game created: {} catalog cards, seed {seed}",
            catalog.len()
        );

        Self {
            options,
            catalog,
            deck: Vec::new(),
            score: 0,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Replaces the random number generator with a freshly seeded one.
    pub fn reseed(&mut self, seed: u64) {
        self.rng = ChaCha8Rng::seed_from_u64(seed);
    }

    /// Returns the game options.
    #[must_use]
    pub const fn options(&self) -> &MemoryOptions {
        &self.options
    }

    /// Returns every card identifier the game can deal.
    #[must_use]
    pub fn catalog(&self) -> &[String] {
        &self.catalog
    }

    /// Returns the slots currently in play.
    #[must_use]
    pub fn deck(&self) -> &[Slot] {
        &self.deck
    }

    /// Returns the deck for in-place edits such as reordering or clearing
    /// slots.
    pub const fn deck_mut(&mut self) -> &mut Vec<Slot> {
        &mut self.deck
    }
}
