//! Directional run scan for short-run win detection.
//!
//! When the winning run is shorter than the board side, a win can appear
//! anywhere along a line, so line tallies do not apply. Instead the scan
//! walks outward from the last move in each of the four line directions.
//! Cost is O(run length) per move regardless of board size.

use super::super::{Board, Cell};
use crate::player::PlayerSlot;
use strum::IntoEnumIterator;

/// The four line directions, checked in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumIter)]
pub(crate) enum Direction {
    /// Left to right.
    Horizontal,
    /// Top to bottom.
    Vertical,
    /// Top-left to bottom-right.
    MainDiagonal,
    /// Top-right to bottom-left.
    AntiDiagonal,
}

impl Direction {
    fn step(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::MainDiagonal => (1, 1),
            Direction::AntiDiagonal => (1, -1),
        }
    }
}

/// Finds a run of at least `win_length` marks through the last move.
///
/// Returns the cell indices of the run, last move first, then the
/// positive-direction cells, then the negative-direction cells. The first
/// qualifying direction wins; later directions are not examined.
pub(crate) fn find_winning_run(
    board: &Board,
    last_move: usize,
    player: PlayerSlot,
    win_length: usize,
) -> Option<Vec<usize>> {
    let size = board.size();
    let row = (last_move / size) as isize;
    let col = (last_move % size) as isize;

    for direction in Direction::iter() {
        let (row_step, col_step) = direction.step();
        let forward = collect_run(board, player, row, col, row_step, col_step);
        let backward = collect_run(board, player, row, col, -row_step, -col_step);

        if 1 + forward.len() + backward.len() >= win_length {
            let mut combination = Vec::with_capacity(1 + forward.len() + backward.len());
            combination.push(last_move);
            combination.extend(forward);
            combination.extend(backward);
            return Some(combination);
        }
    }

    None
}

/// Walks from `(row, col)` by `(row_step, col_step)` while cells stay in
/// bounds and hold the player's mark, collecting visited indices.
fn collect_run(
    board: &Board,
    player: PlayerSlot,
    row: isize,
    col: isize,
    row_step: isize,
    col_step: isize,
) -> Vec<usize> {
    let size = board.size() as isize;
    let mut positions = Vec::new();
    let mut r = row + row_step;
    let mut c = col + col_step;

    while r >= 0 && r < size && c >= 0 && c < size {
        let index = (r * size + c) as usize;
        if board.get(index) != Some(Cell::Occupied(player)) {
            break;
        }
        positions.push(index);
        r += row_step;
        c += col_step;
    }

    positions
}
