use alloc::string::String;
use alloc::vec::Vec;

use crate::error::DeckError;
use crate::options::OversizeMode;
use crate::shuffle::shuffle;

use super::{MemoryGame, Slot};

impl MemoryGame {
    /// Deals a fresh deck built from `count` distinct catalog cards.
    ///
    /// The catalog is shuffled, its first `count` cards are taken, each is
    /// repeated [`copies`](crate::MemoryOptions::copies) times, and the
    /// result is shuffled again and stored as the deck. The catalog itself
    /// keeps its canonical order.
    ///
    /// When `count` exceeds the catalog, [`OversizeMode::Truncate`] deals
    /// the whole catalog instead.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::NotEnoughCards`] if `count` exceeds the catalog
    /// and oversized requests are rejected. The deck is left unchanged.
    pub fn request_deck(&mut self, count: usize) -> Result<(), DeckError> {
        let available = self.catalog.len();
        if count > available {
            match self.options.oversize {
                OversizeMode::Reject => {
                    return Err(DeckError::NotEnoughCards {
                        requested: count,
                        available,
                    });
                }
                OversizeMode::Truncate => {
                    log::warn!("requested {count} cards, dealing all {available}");
                }
            }
        }

        let mut drawn: Vec<String> = self.catalog.clone();
        shuffle(&mut drawn, &mut self.rng);
        drawn.truncate(count);

        let copies = usize::from(self.options.copies);
        let mut deck: Vec<Slot> = Vec::with_capacity(drawn.len() * copies);
        for _ in 0..copies {
            deck.extend(drawn.iter().cloned().map(Some));
        }
        shuffle(&mut deck, &mut self.rng);

        log::debug!("dealt {} slots from {} cards", deck.len(), drawn.len());
        self.deck = deck;

        Ok(())
    }

    /// Replaces the deck verbatim.
    pub fn set_deck(&mut self, deck: Vec<Slot>) {
        log::debug!("deck replaced with {} slots", deck.len());
        self.deck = deck;
    }

    /// Empties the deck.
    pub fn clear_deck(&mut self) {
        self.set_deck(Vec::new());
    }

    /// Clears one slot and returns the card it held.
    ///
    /// Returns `Ok(None)` if the slot was already empty.
    ///
    /// # Errors
    ///
    /// Returns [`DeckError::SlotOutOfRange`] if `index` is past the end of
    /// the deck.
    pub fn clear_slot(&mut self, index: usize) -> Result<Option<String>, DeckError> {
        let len = self.deck.len();
        let slot = self
            .deck
            .get_mut(index)
            .ok_or(DeckError::SlotOutOfRange { index, len })?;
        Ok(slot.take())
    }

    /// Returns the number of slots that still hold a card.
    #[must_use]
    pub fn remaining_cards(&self) -> usize {
        self.deck.iter().filter(|slot| slot.is_some()).count()
    }
}
