//! Score aggregation for a two-player session.

use crate::player::{Player, PlayerSlot};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Value snapshot of the three score records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scores {
    /// Wins recorded for the first player.
    pub first_player_score: u32,
    /// Wins recorded for the second player.
    pub second_player_score: u32,
    /// Games that ended without a winner.
    pub draw_score: u32,
}

/// Aggregates both players' scores plus a draw counter.
///
/// Owns the two-element player roster; the engine addresses players through
/// [`PlayerSlot`] handles. Scores persist across rounds until explicitly
/// reset or overwritten from storage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBoard {
    players: [Player; 2],
    draw_score: u32,
}

impl ScoreBoard {
    /// Creates a score board over the given roster, all counters at zero.
    pub fn new(first: Player, second: Player) -> Self {
        Self {
            players: [first, second],
            draw_score: 0,
        }
    }

    /// Returns the player in the given slot.
    pub fn player(&self, slot: PlayerSlot) -> &Player {
        &self.players[slot.index()]
    }

    /// Returns the first player.
    pub fn first_player(&self) -> &Player {
        self.player(PlayerSlot::First)
    }

    /// Returns the second player.
    pub fn second_player(&self) -> &Player {
        self.player(PlayerSlot::Second)
    }

    /// Returns the draw counter.
    pub fn draw_score(&self) -> u32 {
        self.draw_score
    }

    /// Credits a win to the player in the given slot.
    #[instrument(skip(self))]
    pub fn increment_player_score(&mut self, slot: PlayerSlot) {
        let player = &mut self.players[slot.index()];
        player.increment_score();
        debug!(score = player.score(), "Player score incremented");
    }

    /// Records a drawn game.
    #[instrument(skip(self))]
    pub fn increment_draw_score(&mut self) {
        self.draw_score += 1;
        debug!(draw_score = self.draw_score, "Draw score incremented");
    }

    /// Zeroes both players' scores and the draw counter.
    #[instrument(skip(self))]
    pub fn reset_scores(&mut self) {
        for player in &mut self.players {
            player.reset_score();
        }
        self.draw_score = 0;
        debug!("Scores reset");
    }

    /// Bulk-assigns all three counters, used when restoring from storage.
    #[instrument(skip(self))]
    pub fn set_scores(&mut self, first: u32, second: u32, draws: u32) {
        self.players[0].set_score(first);
        self.players[1].set_score(second);
        self.draw_score = draws;
        debug!("Scores restored");
    }

    /// Returns a value copy of the current totals.
    pub fn scores(&self) -> Scores {
        Scores {
            first_player_score: self.players[0].score(),
            second_player_score: self.players[1].score(),
            draw_score: self.draw_score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> ScoreBoard {
        ScoreBoard::new(Player::new("x"), Player::new("o"))
    }

    #[test]
    fn test_increments_attribute_to_the_right_party() {
        let mut board = board();
        board.increment_player_score(PlayerSlot::First);
        board.increment_player_score(PlayerSlot::First);
        board.increment_player_score(PlayerSlot::Second);
        board.increment_draw_score();

        let scores = board.scores();
        assert_eq!(scores.first_player_score, 2);
        assert_eq!(scores.second_player_score, 1);
        assert_eq!(scores.draw_score, 1);
    }

    #[test]
    fn test_reset_zeroes_everything() {
        let mut board = board();
        board.set_scores(4, 2, 3);
        board.reset_scores();

        let scores = board.scores();
        assert_eq!(scores.first_player_score, 0);
        assert_eq!(scores.second_player_score, 0);
        assert_eq!(scores.draw_score, 0);
    }

    #[test]
    fn test_snapshot_is_a_value_copy() {
        let mut board = board();
        let before = board.scores();
        board.increment_player_score(PlayerSlot::First);

        assert_eq!(before.first_player_score, 0);
        assert_eq!(board.scores().first_player_score, 1);
    }

    #[test]
    fn test_set_scores_bulk_assigns() {
        let mut board = board();
        board.set_scores(10, 20, 30);

        let scores = board.scores();
        assert_eq!(scores.first_player_score, 10);
        assert_eq!(scores.second_player_score, 20);
        assert_eq!(scores.draw_score, 30);
    }
}
