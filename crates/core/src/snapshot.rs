use crate::grid::Grid;
use crate::piece::Piece;
use crate::types::Cell;

/// Read-only copy of the game for renderers and observers.
///
/// Owns its data, so holding one never borrows the engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct GameSnapshot {
    pub grid: Grid,
    pub active: Option<Piece>,
    pub game_over: bool,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.grid.clear();
        self.active = None;
        self.game_over = false;
    }

    pub fn playable(&self) -> bool {
        !self.game_over
    }

    /// Cell as it should be drawn: the active piece overlays the grid.
    ///
    /// Anything outside the stored area is empty.
    pub fn cell(&self, row: i8, col: i8) -> Cell {
        if Grid::is_out_of_bounds(row, col) {
            return None;
        }
        if let Some(active) = self.active {
            if active.cells().any(|cell| cell == (row, col)) {
                return Some(active.kind);
            }
        }
        self.grid.get(row, col).flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PieceKind;

    #[test]
    fn test_cell_overlays_active_piece() {
        let mut snap = GameSnapshot::default();
        snap.grid.set(19, 0, Some(PieceKind::J));
        let mut piece = Piece::spawn(PieceKind::O);
        piece.row = 5;
        snap.active = Some(piece);

        assert_eq!(snap.cell(19, 0), Some(PieceKind::J));
        assert_eq!(snap.cell(5, 4), Some(PieceKind::O));
        assert_eq!(snap.cell(6, 5), Some(PieceKind::O));
        assert_eq!(snap.cell(7, 4), None);
        // Outside the grid is empty
        assert_eq!(snap.cell(25, 4), None);
    }

    #[test]
    fn test_cell_with_piece_at_extreme_position() {
        let mut snap = GameSnapshot::default();
        let mut piece = Piece::spawn(PieceKind::I);
        piece.row = i8::MAX;
        piece.col = i8::MAX;
        snap.active = Some(piece);

        assert_eq!(snap.cell(i8::MAX, i8::MAX), None);
        assert_eq!(snap.cell(19, 9), None);
    }

    #[test]
    fn test_clear_resets() {
        let mut snap = GameSnapshot {
            grid: Grid::new(),
            active: Some(Piece::spawn(PieceKind::T)),
            game_over: true,
        };
        snap.grid.fill_row(19, PieceKind::T);
        snap.clear();
        assert_eq!(snap, GameSnapshot::default());
        assert!(snap.playable());
    }
}
