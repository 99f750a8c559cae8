//! Card types and identifier formatting.

use core::fmt;
use core::str::FromStr;

use alloc::string::{String, ToString};

use crate::error::CardParseError;

/// Card suit.
///
/// Variants are declared in catalog order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Suit {
    /// Clubs.
    Clubs,
    /// Diamonds.
    Diamonds,
    /// Hearts.
    Hearts,
    /// Spades.
    Spades,
}

impl Suit {
    /// All suits in catalog order.
    pub const ALL: [Self; 4] = [Self::Clubs, Self::Diamonds, Self::Hearts, Self::Spades];

    /// Returns the identifier prefix for this suit, e.g. `"clubs_"`.
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Clubs => "clubs_",
            Self::Diamonds => "diamonds_",
            Self::Hearts => "hearts_",
            Self::Spades => "spades_",
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|suit| suit.prefix().strip_suffix('_') == Some(name))
    }
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    /// 2.
    Two,
    /// 3.
    Three,
    /// 4.
    Four,
    /// 5.
    Five,
    /// 6.
    Six,
    /// 7.
    Seven,
    /// 8.
    Eight,
    /// 9.
    Nine,
    /// 10.
    Ten,
    /// Ace.
    Ace,
    /// Jack.
    Jack,
    /// King.
    King,
    /// Queen.
    Queen,
}

impl Rank {
    /// All ranks in catalog order.
    ///
    /// Face cards follow the numbers and are ordered by label, so the
    /// catalog reads `2..10, ace, jack, king, queen` for every suit.
    pub const ALL: [Self; 13] = [
        Self::Two,
        Self::Three,
        Self::Four,
        Self::Five,
        Self::Six,
        Self::Seven,
        Self::Eight,
        Self::Nine,
        Self::Ten,
        Self::Ace,
        Self::Jack,
        Self::King,
        Self::Queen,
    ];

    /// Returns the identifier label for this rank, e.g. `"ace"` or `"10"`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Two => "2",
            Self::Three => "3",
            Self::Four => "4",
            Self::Five => "5",
            Self::Six => "6",
            Self::Seven => "7",
            Self::Eight => "8",
            Self::Nine => "9",
            Self::Ten => "10",
            Self::Ace => "ace",
            Self::Jack => "jack",
            Self::King => "king",
            Self::Queen => "queen",
        }
    }

    fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|rank| rank.label() == label)
    }
}

/// A standard playing card.
///
/// Jokers are not cards in this sense; they only exist as identifiers in
/// a catalog built with jokers enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Card {
    /// The suit of the card.
    pub suit: Suit,
    /// The rank of the card.
    pub rank: Rank,
}

impl Card {
    /// Creates a new card.
    #[must_use]
    pub const fn new(suit: Suit, rank: Rank) -> Self {
        Self { suit, rank }
    }

    /// Returns the card identifier, e.g. `"hearts_queen"`.
    #[must_use]
    pub fn name(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suit.prefix())?;
        f.write_str(self.rank.label())
    }
}

impl FromStr for Card {
    type Err = CardParseError;

    /// Parses an identifier such as `"spades_10"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (suit, rank) = s.split_once('_').ok_or(CardParseError::MissingSeparator)?;
        let suit = Suit::from_name(suit).ok_or(CardParseError::UnknownSuit)?;
        let rank = Rank::from_label(rank).ok_or(CardParseError::UnknownRank)?;
        Ok(Self::new(suit, rank))
    }
}
