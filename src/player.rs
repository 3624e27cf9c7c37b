//! Player identity and score tracking.

use serde::{Deserialize, Serialize};

/// Handle into the fixed two-player roster.
///
/// All player identity comparisons go through slots, never through symbol
/// equality, so two players configured with the same symbol stay
/// distinguishable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerSlot {
    /// The player who moves first.
    First,
    /// The player who moves second.
    Second,
}

impl PlayerSlot {
    /// Returns the opposing slot.
    pub fn other(self) -> Self {
        match self {
            PlayerSlot::First => PlayerSlot::Second,
            PlayerSlot::Second => PlayerSlot::First,
        }
    }

    /// Roster index (0 or 1) for slot-keyed arrays.
    pub fn index(self) -> usize {
        match self {
            PlayerSlot::First => 0,
            PlayerSlot::Second => 1,
        }
    }
}

/// A player: display symbol plus a running win count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    symbol: String,
    score: u32,
}

impl Player {
    /// Creates a player with the given symbol and a zero score.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            score: 0,
        }
    }

    /// Returns the player's symbol.
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Returns the player's score.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Adds one win to the score.
    pub fn increment_score(&mut self) {
        self.score += 1;
    }

    /// Sets the score back to zero.
    pub fn reset_score(&mut self) {
        self.score = 0;
    }

    /// Overwrites the score, used when restoring persisted totals.
    pub fn set_score(&mut self, score: u32) {
        self.score = score;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_slot() {
        assert_eq!(PlayerSlot::First.other(), PlayerSlot::Second);
        assert_eq!(PlayerSlot::Second.other(), PlayerSlot::First);
    }

    #[test]
    fn test_score_lifecycle() {
        let mut player = Player::new("x");
        assert_eq!(player.score(), 0);

        player.increment_score();
        player.increment_score();
        assert_eq!(player.score(), 2);

        player.set_score(7);
        assert_eq!(player.score(), 7);

        player.reset_score();
        assert_eq!(player.score(), 0);
        assert_eq!(player.symbol(), "x");
    }
}
