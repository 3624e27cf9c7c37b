//! Gridtac - configurable N-by-N tic-tac-toe engine.
//!
//! Two players alternate marking cells on a square grid of side length
//! 3-100, with a winning run length configurable from 3 up to the side
//! length. After each move the engine reports whether that move won the
//! game, filled the board, or left play ongoing.
//!
//! Win detection never rescans the board. When the run length equals the
//! side length, per-player line tallies decide in O(1) per move; for
//! shorter runs, a directional scan around the last move decides in
//! O(run length), so a 100x100 board plays as fast as a 3x3 one.
//!
//! # Architecture
//!
//! - **Game**: board state, move validation, turn alternation, and both
//!   win-detection strategies
//! - **Scores**: per-player and draw counters that outlive individual
//!   rounds, with a key-value persistence adapter
//! - **Config**: board size, run length, and player symbols, loadable
//!   from TOML
//!
//! # Example
//!
//! ```
//! use gridtac::{GameConfig, GameResult, TicTacToe};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut game = TicTacToe::new(&GameConfig::new(3))?;
//!
//! // First player takes the top row, second player answers in the middle.
//! for position in [0, 4, 1, 5] {
//!     game.make_move(position)?;
//! }
//! let result = game.make_move(2)?;
//!
//! assert!(matches!(result, Some(GameResult::Win { .. })));
//! assert_eq!(game.score_board().scores().first_player_score, 1);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod game;
mod player;
mod scoreboard;
mod storage;

// Crate-level exports - Configuration
pub use config::{ConfigError, GameConfig, MAX_FIELD_SIZE, MIN_FIELD_SIZE, MIN_WIN_COMBO_LENGTH};

// Crate-level exports - Game engine
pub use game::{Board, Cell, GameResult, InvalidComboLength, MoveError, TicTacToe};

// Crate-level exports - Players and scores
pub use player::{Player, PlayerSlot};
pub use scoreboard::{ScoreBoard, Scores};

// Crate-level exports - Score persistence
pub use storage::{
    DRAW_SCORE_KEY, FIRST_PLAYER_SCORE_KEY, FileStore, MemoryStore, SECOND_PLAYER_SCORE_KEY,
    ScoreStorage, ScoreStore, StoreError,
};
