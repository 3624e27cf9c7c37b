mod engine;
mod error;
mod rules;
mod types;

pub use engine::TicTacToe;
pub use error::{InvalidComboLength, MoveError};
pub use types::{Board, Cell, GameResult};
