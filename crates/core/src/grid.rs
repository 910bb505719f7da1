//! Grid module - the playfield buffer, collision checks, locking and line clears
//!
//! The grid is 10 columns by 20 visible rows, with a 2-row hidden buffer above
//! the visible field. Storage is a flat row-major array, hidden rows first.
//! Coordinates are `(row, col)`: row ranges -2..=19 (top to bottom), col
//! ranges 0..=9 (left to right). Rows -2 and -1 are the hidden buffer.

use arrayvec::ArrayVec;
use log::debug;

use crate::matrix::Matrix;
use crate::piece::Piece;
use crate::types::{Cell, PieceKind, GRID_HEIGHT, GRID_TOTAL_ROWS, GRID_WIDTH, HIDDEN_ROWS};

/// Total number of cells stored, hidden buffer included
const GRID_SIZE: usize = (GRID_WIDTH as usize) * (GRID_TOTAL_ROWS as usize);

/// Topmost row index (first row of the hidden buffer)
pub const TOP_ROW: i8 = -(HIDDEN_ROWS as i8);

/// Rows removed by one lock, in the order they were cleared (row indices as
/// seen at the time of each clear, so cascades report the same index again).
pub type ClearedRows = ArrayVec<i8, { GRID_TOTAL_ROWS as usize }>;

/// Result of committing a piece to the grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LockOutcome {
    /// Every cell was written; `cleared_rows` lists the row clears that followed.
    Locked { cleared_rows: ClearedRows },
    /// A cell sat above the visible field. Cells met before it stay written.
    ToppedOut,
}

impl LockOutcome {
    pub fn is_topped_out(&self) -> bool {
        matches!(self, LockOutcome::ToppedOut)
    }

    /// Number of rows cleared (0 on top-out)
    pub fn lines_cleared(&self) -> usize {
        match self {
            LockOutcome::Locked { cleared_rows } => cleared_rows.len(),
            LockOutcome::ToppedOut => 0,
        }
    }
}

/// The playfield - 10 columns x (2 hidden + 20 visible) rows, flat storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    cells: [Cell; GRID_SIZE],
}

impl Grid {
    /// Create a new empty grid
    pub fn new() -> Self {
        Self {
            cells: [None; GRID_SIZE],
        }
    }

    /// Flat index of (row, col), or None outside the stored area
    #[inline(always)]
    fn index(row: i8, col: i8) -> Option<usize> {
        if Self::is_out_of_bounds(row, col) {
            return None;
        }
        let stored_row = (row - TOP_ROW) as usize;
        Some(stored_row * (GRID_WIDTH as usize) + (col as usize))
    }

    /// Width in columns
    pub fn width(&self) -> u8 {
        GRID_WIDTH
    }

    /// Visible height in rows
    pub fn height(&self) -> u8 {
        GRID_HEIGHT
    }

    /// Whether (row, col) lies outside the stored area (hidden rows included)
    pub fn is_out_of_bounds(row: i8, col: i8) -> bool {
        row < TOP_ROW || row >= GRID_HEIGHT as i8 || col < 0 || col >= GRID_WIDTH as i8
    }

    /// Get cell at (row, col); None if out of bounds
    pub fn get(&self, row: i8, col: i8) -> Option<Cell> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, col); returns false if out of bounds.
    ///
    /// This bypasses the lock rules and is meant for building prepared boards.
    pub fn set(&mut self, row: i8, col: i8, cell: Cell) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if (row, col) is inside the grid and filled
    pub fn is_occupied(&self, row: i8, col: i8) -> bool {
        matches!(self.get(row, col), Some(Some(_)))
    }

    /// Cells of one row, hidden rows included
    pub fn row(&self, row: i8) -> Option<&[Cell]> {
        let start = Self::index(row, 0)?;
        Some(&self.cells[start..start + GRID_WIDTH as usize])
    }

    /// Check if a row is completely filled (by any kinds)
    pub fn is_row_full(&self, row: i8) -> bool {
        self.row(row)
            .map(|cells| cells.iter().all(|cell| cell.is_some()))
            .unwrap_or(false)
    }

    /// Number of filled cells, hidden buffer included
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Whether `matrix` fits with its top-left cell at (row, col).
    ///
    /// Occupied cells must stay within the left, right and bottom edges and
    /// must not overlap filled cells. There is no top edge: cells above the
    /// stored area are accepted so pieces can float in the hidden buffer.
    /// Any `i8` position is accepted; a cell whose coordinate would overflow
    /// lies past the floor or the right wall and fails.
    pub fn is_valid_move(&self, matrix: &Matrix, row: i8, col: i8) -> bool {
        matrix
            .occupied()
            .all(|(r, c)| match (row.checked_add(r), col.checked_add(c)) {
                (Some(y), Some(x)) => {
                    x >= 0
                        && x < GRID_WIDTH as i8
                        && y < GRID_HEIGHT as i8
                        && !self.is_occupied(y, x)
                }
                _ => false,
            })
    }

    /// Remove `row` by shifting every row above it down by one.
    ///
    /// Row r takes row r-1's contents for r from `row` up to the row just
    /// below the top of the hidden buffer. The topmost hidden row has nothing
    /// above it and keeps its own contents.
    /// Returns false if `row` is out of range.
    pub fn clear_row(&mut self, row: i8) -> bool {
        let Some(dst_end) = Self::index(row, 0) else {
            return false;
        };
        let width = GRID_WIDTH as usize;
        // Stored rows [0, row) move to [1, row]; copy_within handles the overlap.
        self.cells.copy_within(0..dst_end, width);
        true
    }

    /// Clear every full visible row, scanning from the bottom up.
    ///
    /// After a clear the same row index is checked again, because the row
    /// that moved into it may be full as well.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared = ClearedRows::new();
        let mut row = GRID_HEIGHT as i8 - 1;
        // The cap only matters when the topmost hidden row is itself full:
        // it copies into itself on every clear and would refill forever.
        while row >= 0 && !cleared.is_full() {
            if self.is_row_full(row) {
                self.clear_row(row);
                cleared.push(row);
            } else {
                row -= 1;
            }
        }
        cleared
    }

    /// Commit a piece to the grid and clear any rows it completes.
    ///
    /// Cells are written in row-major matrix order. Meeting a cell above the
    /// visible field aborts with [`LockOutcome::ToppedOut`]; cells already
    /// written are left in place.
    pub fn lock(&mut self, piece: &Piece) -> LockOutcome {
        for (row, col) in piece.cells() {
            if row < 0 {
                debug!(
                    "lock aborted: {} cell at row {} is above the visible field",
                    piece.kind.as_str(),
                    row
                );
                return LockOutcome::ToppedOut;
            }
            self.set(row, col, Some(piece.kind));
        }

        let cleared_rows = self.clear_full_rows();
        if !cleared_rows.is_empty() {
            debug!("cleared {} row(s): {:?}", cleared_rows.len(), cleared_rows);
        }
        LockOutcome::Locked { cleared_rows }
    }

    /// Fill a whole row with one kind (for prepared boards)
    pub fn fill_row(&mut self, row: i8, kind: PieceKind) -> bool {
        if Self::is_out_of_bounds(row, 0) {
            return false;
        }
        for col in 0..GRID_WIDTH as i8 {
            self.set(row, col, Some(kind));
        }
        true
    }

    /// Get a reference to the internal cells array, hidden rows first
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Clear the entire grid
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}
