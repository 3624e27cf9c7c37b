//! The game engine: move validation, turn alternation, and win detection.

use super::error::{InvalidComboLength, MoveError};
use super::rules::scan;
use super::rules::tally::LineTally;
use super::types::{Board, Cell, GameResult};
use crate::config::{ConfigError, GameConfig, MIN_WIN_COMBO_LENGTH};
use crate::player::{Player, PlayerSlot};
use crate::scoreboard::ScoreBoard;
use tracing::{info, instrument};

/// Game state for one board configuration.
///
/// A `TicTacToe` instance is created for a fixed field size; changing the
/// size means building a fresh engine and moving the score board across
/// with [`TicTacToe::into_score_board`] and [`TicTacToe::with_score_board`].
/// The engine is the single writer of scores: it credits the winner or the
/// draw counter itself on every terminal result.
///
/// Processing is strictly synchronous. Each move completes (validation,
/// mutation, detection, score update) before the next is accepted, and
/// configuration changes must be serialized with move processing by the
/// caller.
#[derive(Debug, Clone)]
pub struct TicTacToe {
    field_size: usize,
    board: Board,
    score_board: ScoreBoard,
    current_player: PlayerSlot,
    is_over: bool,
    empty_cells: usize,
    win_combo_length: usize,
    tallies: [LineTally; 2],
}

impl TicTacToe {
    /// Creates an engine from the given configuration with a fresh score
    /// board built from the configured symbols.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when the field size or win combo length is
    /// out of range.
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        let score_board = ScoreBoard::new(
            Player::new(config.first_symbol().clone()),
            Player::new(config.second_symbol().clone()),
        );
        Self::with_score_board(config, score_board)
    }

    /// Creates an engine reusing an existing score board, so scores carry
    /// across board rebuilds (field-size changes).
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when the configuration is out of range.
    #[instrument(skip(config, score_board))]
    pub fn with_score_board(
        config: &GameConfig,
        score_board: ScoreBoard,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let field_size = *config.field_size();
        info!(
            field_size,
            win_combo_length = config.resolved_win_combo_length(),
            "Creating game engine"
        );

        Ok(Self {
            field_size,
            board: Board::new(field_size),
            score_board,
            current_player: PlayerSlot::First,
            is_over: false,
            empty_cells: field_size * field_size,
            win_combo_length: config.resolved_win_combo_length(),
            tallies: [LineTally::new(field_size), LineTally::new(field_size)],
        })
    }

    /// Places the current player's mark at `position`.
    ///
    /// Returns `Ok(None)` while the game continues (the turn passes to the
    /// other player) or `Ok(Some(result))` when this move ended the game.
    /// A terminal result sets the game over and applies the score update.
    ///
    /// # Errors
    ///
    /// - [`MoveError::IndexOutOfBounds`] when `position >= field_size²`.
    /// - [`MoveError::GameAlreadyOver`] when a previous move ended the game.
    /// - [`MoveError::CellOccupied`] when the cell already holds a mark.
    #[instrument(skip(self), fields(player = ?self.current_player))]
    pub fn make_move(&mut self, position: usize) -> Result<Option<GameResult>, MoveError> {
        if position >= self.board.cell_count() {
            return Err(MoveError::IndexOutOfBounds(position));
        }
        if self.is_over {
            return Err(MoveError::GameAlreadyOver);
        }
        if !self.board.is_empty(position) {
            return Err(MoveError::CellOccupied(position));
        }

        self.board.set(position, Cell::Occupied(self.current_player));
        self.empty_cells -= 1;

        let result = if self.win_combo_length == self.field_size {
            self.check_full_length(position)
        } else {
            self.check_short_run(position)
        };

        match result {
            Some(result) => {
                self.finish_game(&result);
                Ok(Some(result))
            }
            None => {
                self.current_player = self.current_player.other();
                Ok(None)
            }
        }
    }

    /// Full-length mode: bump the mover's line tallies and reconstruct the
    /// completed line on demand.
    fn check_full_length(&mut self, position: usize) -> Option<GameResult> {
        let size = self.field_size;
        let row = position / size;
        let col = position % size;

        let tally = &mut self.tallies[self.current_player.index()];
        if let Some(axis) = tally.record(row, col) {
            return Some(GameResult::Win {
                player: self.current_player,
                combination: axis.indexes(size),
            });
        }

        if self.empty_cells == 0 {
            return Some(GameResult::Draw);
        }

        None
    }

    /// Short-run mode: scan outward from the last move.
    fn check_short_run(&mut self, position: usize) -> Option<GameResult> {
        if let Some(combination) = scan::find_winning_run(
            &self.board,
            position,
            self.current_player,
            self.win_combo_length,
        ) {
            return Some(GameResult::Win {
                player: self.current_player,
                combination,
            });
        }

        if self.empty_cells == 0 {
            return Some(GameResult::Draw);
        }

        None
    }

    fn finish_game(&mut self, result: &GameResult) {
        self.is_over = true;
        match result {
            GameResult::Win { player, .. } => {
                info!(winner = ?player, "Game won");
                self.score_board.increment_player_score(*player);
            }
            GameResult::Draw => {
                info!("Game drawn");
                self.score_board.increment_draw_score();
            }
        }
    }

    /// Sets the winning run length for subsequent games.
    ///
    /// Only call between games (no moves made yet, or the previous game
    /// over); the engine does not enforce that precondition.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidComboLength`] when `length` is below 3 or above the
    /// field size.
    #[instrument(skip(self))]
    pub fn set_win_combo_length(&mut self, length: usize) -> Result<(), InvalidComboLength> {
        if length < MIN_WIN_COMBO_LENGTH || length > self.field_size {
            return Err(InvalidComboLength {
                requested: length,
                max: self.field_size,
            });
        }
        self.win_combo_length = length;
        Ok(())
    }

    /// Starts a new round: clears the board and tallies, hands the turn
    /// back to the first player, and clears the game-over flag. Field size,
    /// win combo length, players, and scores are preserved.
    #[instrument(skip(self))]
    pub fn reset_game(&mut self) {
        self.board.clear();
        for tally in &mut self.tallies {
            tally.reset();
        }
        self.current_player = PlayerSlot::First;
        self.is_over = false;
        self.empty_cells = self.field_size * self.field_size;
        info!("Game reset");
    }

    /// The slot whose turn it is.
    pub fn current_player(&self) -> PlayerSlot {
        self.current_player
    }

    /// The player in the given slot.
    pub fn player(&self, slot: PlayerSlot) -> &Player {
        self.score_board.player(slot)
    }

    /// The first player.
    pub fn first_player(&self) -> &Player {
        self.score_board.first_player()
    }

    /// The second player.
    pub fn second_player(&self) -> &Player {
        self.score_board.second_player()
    }

    /// Side length of the board.
    pub fn field_size(&self) -> usize {
        self.field_size
    }

    /// Number of unmarked cells.
    pub fn empty_cells(&self) -> usize {
        self.empty_cells
    }

    /// Whether the current game has ended.
    pub fn is_over(&self) -> bool {
        self.is_over
    }

    /// The configured winning run length.
    pub fn win_combo_length(&self) -> usize {
        self.win_combo_length
    }

    /// The score board.
    pub fn score_board(&self) -> &ScoreBoard {
        &self.score_board
    }

    /// Mutable score board access, used by the persistence adapter to
    /// restore saved totals.
    pub fn score_board_mut(&mut self) -> &mut ScoreBoard {
        &mut self.score_board
    }

    /// The board, for rendering.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Consumes the engine and hands the score board to a replacement
    /// engine (field-size changes discard the old engine).
    pub fn into_score_board(self) -> ScoreBoard {
        self.score_board
    }
}
