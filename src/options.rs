//! Game configuration options.

/// What a deck request does when it asks for more cards than the catalog
/// holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OversizeMode {
    /// Use the whole catalog and carry on.
    #[default]
    Truncate,
    /// Fail with [`DeckError::NotEnoughCards`](crate::DeckError::NotEnoughCards).
    Reject,
}

/// Configuration options for a memory game.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use memrs::{MemoryOptions, OversizeMode};
///
/// let options = MemoryOptions::default()
///     .with_jokers(true)
///     .with_copies(3)
///     .with_oversize(OversizeMode::Reject);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoryOptions {
    /// Whether the two jokers are part of the catalog.
    pub include_jokers: bool,
    /// How many times each drawn card appears in the deck (2 for pairs).
    pub copies: u8,
    /// Handling of requests larger than the catalog.
    pub oversize: OversizeMode,
}

impl Default for MemoryOptions {
    fn default() -> Self {
        Self {
            include_jokers: false,
            copies: 2,
            oversize: OversizeMode::Truncate,
        }
    }
}

impl MemoryOptions {
    /// Sets whether the catalog includes the two jokers.
    ///
    /// # Example
    ///
    /// ```
    /// use memrs::MemoryOptions;
    ///
    /// let options = MemoryOptions::default().with_jokers(true);
    /// assert!(options.include_jokers);
    /// ```
    #[must_use]
    pub const fn with_jokers(mut self, include: bool) -> Self {
        self.include_jokers = include;
        self
    }

    /// Sets how many copies of each drawn card go into the deck.
    ///
    /// Zero copies produce an empty deck.
    ///
    /// # Example
    ///
    /// ```
    /// use memrs::MemoryOptions;
    ///
    /// let options = MemoryOptions::default().with_copies(3);
    /// assert_eq!(options.copies, 3);
    /// ```
    #[must_use]
    pub const fn with_copies(mut self, copies: u8) -> Self {
        self.copies = copies;
        self
    }

    /// Sets the handling of oversized deck requests.
    ///
    /// # Example
    ///
    /// ```
    /// use memrs::{MemoryOptions, OversizeMode};
    ///
    /// let options = MemoryOptions::default().with_oversize(OversizeMode::Reject);
    /// assert_eq!(options.oversize, OversizeMode::Reject);
    /// ```
    #[must_use]
    pub const fn with_oversize(mut self, mode: OversizeMode) -> Self {
        self.oversize = mode;
        self
    }
}
