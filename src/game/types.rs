//! Core board and result types.

use crate::player::PlayerSlot;
use serde::{Deserialize, Serialize};

/// A cell on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell marked by a player.
    Occupied(PlayerSlot),
}

impl Cell {
    /// Returns true for an empty cell.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

/// Square grid of cells in row-major order.
///
/// Index `i` maps to `row = i / size`, `col = i % size`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    size: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Creates an empty board with the given side length.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Empty; size * size],
        }
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells (`size * size`).
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Gets the cell at the given index, `None` when out of bounds.
    pub fn get(&self, position: usize) -> Option<Cell> {
        self.cells.get(position).copied()
    }

    /// Checks whether the cell at the given index is empty.
    pub fn is_empty(&self, position: usize) -> bool {
        matches!(self.get(position), Some(Cell::Empty))
    }

    /// All cells as a slice, row-major.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub(crate) fn set(&mut self, position: usize, cell: Cell) {
        self.cells[position] = cell;
    }

    pub(crate) fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }
}

/// Terminal outcome of a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameResult {
    /// A player completed a winning run.
    Win {
        /// The winning player.
        player: PlayerSlot,
        /// Cell indices of the winning run.
        combination: Vec<usize>,
    },
    /// The board filled with no winning run.
    Draw,
}

impl GameResult {
    /// Returns the winner, `None` for a draw.
    pub fn winner(&self) -> Option<PlayerSlot> {
        match self {
            GameResult::Win { player, .. } => Some(*player),
            GameResult::Draw => None,
        }
    }

    /// Returns the winning combination, `None` for a draw.
    pub fn combination(&self) -> Option<&[usize]> {
        match self {
            GameResult::Win { combination, .. } => Some(combination),
            GameResult::Draw => None,
        }
    }

    /// Returns true for a drawn game.
    pub fn is_draw(&self) -> bool {
        matches!(self, GameResult::Draw)
    }
}
