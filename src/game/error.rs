//! Errors reported by the game engine.

use derive_more::{Display, Error};

/// Error that can occur when applying a move.
///
/// All variants are recoverable: a stray move against a finished or
/// occupied board is not fatal and callers may simply ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum MoveError {
    /// The index does not address a cell on the board.
    #[display("Cell {} is out of bounds", _0)]
    IndexOutOfBounds(usize),

    /// The cell at the index is already occupied.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(usize),

    /// The game has already ended.
    #[display("Game is already over")]
    GameAlreadyOver,
}

impl std::error::Error for MoveError {}

/// Rejected win combo length: must lie between 3 and the field size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display(
    "Invalid win combo length {}: must be between 3 and {}",
    requested,
    max
)]
pub struct InvalidComboLength {
    /// The length that was requested.
    pub requested: usize,
    /// The largest acceptable length (the field size).
    pub max: usize,
}
