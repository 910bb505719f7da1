//! Piece module - the active falling piece and its spawn placement

use crate::matrix::Matrix;
use crate::shapes::get_shape;
use crate::types::{PieceKind, GRID_WIDTH};

/// Active falling piece
///
/// `row`/`col` locate the matrix's top-left cell in grid coordinates.
/// Negative rows address the hidden buffer above the visible field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub matrix: Matrix,
    pub row: i8,
    pub col: i8,
}

impl Piece {
    /// Create a piece of the given kind at its spawn position
    ///
    /// Column is `W/2 - ceil(side/2)`: I and O come out centered, the 3-wide
    /// kinds sit one column left of center. The I piece starts one row lower
    /// because its bar is on the second row of its 4x4 matrix.
    pub fn spawn(kind: PieceKind) -> Self {
        let matrix = get_shape(kind);
        let side = matrix.side() as i8;
        let col = (GRID_WIDTH as i8) / 2 - (side + 1) / 2;
        let row = if kind == PieceKind::I { -1 } else { -2 };
        Self {
            kind,
            matrix,
            row,
            col,
        }
    }

    /// Absolute grid coordinates `(row, col)` of every occupied cell
    ///
    /// Coordinates saturate at `i8::MAX`, which is always off the grid.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.matrix
            .occupied()
            .map(move |(r, c)| (self.row.saturating_add(r), self.col.saturating_add(c)))
    }
}
