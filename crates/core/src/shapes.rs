//! Shapes module - the static table of spawn matrices
//!
//! Indexed by [`PieceKind::index`], so lookups are a plain array access.

use crate::matrix::Matrix;
use crate::types::PieceKind;

/// Spawn-orientation matrix for every kind, in [`PieceKind::ALL`] order
const SHAPES: [Matrix; 7] = [
    // I
    Matrix::from_rows([[0, 0, 0, 0], [1, 1, 1, 1], [0, 0, 0, 0], [0, 0, 0, 0]]),
    // J
    Matrix::from_rows([[1, 0, 0], [1, 1, 1], [0, 0, 0]]),
    // L
    Matrix::from_rows([[0, 0, 1], [1, 1, 1], [0, 0, 0]]),
    // O
    Matrix::from_rows([[1, 1], [1, 1]]),
    // S
    Matrix::from_rows([[0, 1, 1], [1, 1, 0], [0, 0, 0]]),
    // T
    Matrix::from_rows([[0, 1, 0], [1, 1, 1], [0, 0, 0]]),
    // Z
    Matrix::from_rows([[1, 1, 0], [0, 1, 1], [0, 0, 0]]),
];

/// Get the spawn matrix for a piece kind
pub fn get_shape(kind: PieceKind) -> Matrix {
    SHAPES[kind.index()]
}
