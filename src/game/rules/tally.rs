//! Incremental line tallies for full-length win detection.
//!
//! When the winning run length equals the board side, a win can only occur
//! on a complete row, column, or diagonal. Per-player running counts of
//! marks on each line make that check O(1) per move instead of a board
//! rescan.

/// A completed win line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Axis {
    /// A full row.
    Row(usize),
    /// A full column.
    Col(usize),
    /// The main diagonal (top-left to bottom-right).
    MainDiagonal,
    /// The anti-diagonal (top-right to bottom-left).
    AntiDiagonal,
}

impl Axis {
    /// Reconstructs the cell indices of this line on a board of the given
    /// side length.
    pub(crate) fn indexes(self, size: usize) -> Vec<usize> {
        match self {
            Axis::Row(row) => (0..size).map(|col| row * size + col).collect(),
            Axis::Col(col) => (0..size).map(|row| row * size + col).collect(),
            Axis::MainDiagonal => (0..size).map(|i| i * (size + 1)).collect(),
            Axis::AntiDiagonal => (0..size).map(|i| (i + 1) * (size - 1)).collect(),
        }
    }
}

/// Running mark counts for one player: every row, every column, and the
/// two diagonals. Each count is bounded by the board side.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct LineTally {
    rows: Vec<usize>,
    cols: Vec<usize>,
    diag: usize,
    anti: usize,
}

impl LineTally {
    pub(crate) fn new(size: usize) -> Self {
        Self {
            rows: vec![0; size],
            cols: vec![0; size],
            diag: 0,
            anti: 0,
        }
    }

    pub(crate) fn reset(&mut self) {
        self.rows.fill(0);
        self.cols.fill(0);
        self.diag = 0;
        self.anti = 0;
    }

    /// Records a mark at `(row, col)` and returns the first line this mark
    /// completed, checked in row, column, main-diagonal, anti-diagonal
    /// priority order.
    pub(crate) fn record(&mut self, row: usize, col: usize) -> Option<Axis> {
        let size = self.rows.len();

        self.rows[row] += 1;
        self.cols[col] += 1;
        if row == col {
            self.diag += 1;
        }
        if row + col == size - 1 {
            self.anti += 1;
        }

        if self.rows[row] == size {
            return Some(Axis::Row(row));
        }
        if self.cols[col] == size {
            return Some(Axis::Col(col));
        }
        if self.diag == size {
            return Some(Axis::MainDiagonal);
        }
        if self.anti == size {
            return Some(Axis::AntiDiagonal);
        }

        None
    }
}
