use super::MemoryGame;

impl MemoryGame {
    /// Returns the current score.
    #[must_use]
    pub const fn score(&self) -> u64 {
        self.score
    }

    /// Sets the score, clamping negative values to zero.
    ///
    /// Returns the stored score.
    ///
    /// # Example
    ///
    /// ```
    /// use memrs::{MemoryGame, MemoryOptions};
    ///
    /// let mut game = MemoryGame::new(MemoryOptions::default(), 1);
    /// assert_eq!(game.set_score(7), 7);
    /// assert_eq!(game.set_score(-5), 0);
    /// assert_eq!(game.score(), 0);
    /// ```
    pub fn set_score(&mut self, value: i64) -> u64 {
        self.score = u64::try_from(value).unwrap_or(0);
        self.score
    }
}
