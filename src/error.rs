//! Error types for deck and card operations.

use thiserror::Error;

/// Errors that can occur while building or editing the deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DeckError {
    /// More distinct cards were requested than the catalog holds.
    ///
    /// Only returned when oversized requests are rejected.
    #[error("requested {requested} cards but the catalog holds {available}")]
    NotEnoughCards {
        /// Number of distinct cards requested.
        requested: usize,
        /// Number of cards in the catalog.
        available: usize,
    },
    /// Slot index is past the end of the deck.
    #[error("slot {index} is out of range for a deck of {len}")]
    SlotOutOfRange {
        /// The requested slot.
        index: usize,
        /// Current deck length.
        len: usize,
    },
}

/// Errors that can occur when parsing a card identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CardParseError {
    /// No `_` between suit and rank.
    #[error("card identifier has no suit separator")]
    MissingSeparator,
    /// Suit part is not a known suit.
    #[error("unknown suit")]
    UnknownSuit,
    /// Rank part is not a known rank.
    #[error("unknown rank")]
    UnknownRank,
}
