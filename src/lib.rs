//! Deck and score state for a memory-matching card game, with optional
//! `no_std` support.
//!
//! The crate provides a [`MemoryGame`] type that owns the card catalog, the
//! shuffled deck of matched pairs currently in play, and the score counter.
//! The building blocks, [`card_names`] and [`shuffle`], are exposed on their
//! own as well.
//!
//! # Example
//!
//! ```
//! use memrs::{MemoryGame, MemoryOptions};
//!
//! let mut game = MemoryGame::new(MemoryOptions::default(), 42);
//! game.request_deck(3).unwrap();
//! assert_eq!(game.deck().len(), 6);
//!
//! game.set_score(-5);
//! assert_eq!(game.score(), 0);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod card;
pub mod catalog;
pub mod error;
pub mod game;
pub mod options;
pub mod shuffle;

// Re-export main types
pub use card::{Card, Rank, Suit};
pub use catalog::{CATALOG_SIZE, JOKER_BLACK, JOKER_RED, card_names, standard_catalog};
pub use error::{CardParseError, DeckError};
pub use game::{MemoryGame, Slot};
pub use options::{MemoryOptions, OversizeMode};
pub use shuffle::shuffle;
