//! Display colors per piece kind.

use crate::fb::Rgb;
use crate::types::PieceKind;

/// Indexed by [`PieceKind::index`].
const PIECE_COLORS: [Rgb; 7] = [
    Rgb::new(0, 255, 255),   // I cyan
    Rgb::new(0, 0, 255),     // J blue
    Rgb::new(255, 165, 0),   // L orange
    Rgb::new(255, 255, 0),   // O yellow
    Rgb::new(0, 255, 0),     // S green
    Rgb::new(128, 0, 128),   // T purple
    Rgb::new(255, 0, 0),     // Z red
];

pub fn piece_color(kind: PieceKind) -> Rgb {
    PIECE_COLORS[kind.index()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_colors_are_distinct() {
        for a in PieceKind::ALL {
            for b in PieceKind::ALL {
                if a != b {
                    assert_ne!(piece_color(a), piece_color(b), "{:?} vs {:?}", a, b);
                }
            }
        }
    }

    #[test]
    fn test_known_colors() {
        assert_eq!(piece_color(PieceKind::I), Rgb::new(0, 255, 255));
        assert_eq!(piece_color(PieceKind::Z), Rgb::new(255, 0, 0));
    }
}
