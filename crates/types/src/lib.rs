//! Shared types and constants for the blockfall workspace.
//!
//! Everything here is plain data with no external dependencies, so it can be
//! used by the engine, the input mapper and the terminal view alike.
//!
//! # Grid Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Visible height**: 20 rows (indexed 0-19)
//! - **Hidden buffer**: 2 rows above the visible field (indexed -2 and -1)
//!
//! # Timing
//!
//! The engine has no notion of real time. It counts calls to `tick()` and
//! applies gravity once the counter exceeds [`DROP_THRESHOLD`]. [`TICK_MS`] is
//! only the nominal cadence a scheduler is expected to use.
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Action, PieceKind, GRID_HEIGHT, GRID_WIDTH};
//!
//! assert_eq!(PieceKind::from_str("t"), Some(PieceKind::T));
//! assert_eq!(PieceKind::T.index(), 5);
//!
//! assert_eq!(Action::from_str("rotateCw"), Some(Action::RotateCw));
//!
//! assert_eq!(GRID_WIDTH, 10);
//! assert_eq!(GRID_HEIGHT, 20);
//! ```

/// Grid width in cells (10 columns)
pub const GRID_WIDTH: u8 = 10;

/// Visible grid height in cells (20 rows)
pub const GRID_HEIGHT: u8 = 20;

/// Rows of hidden buffer above the visible field
pub const HIDDEN_ROWS: u8 = 2;

/// Total rows stored by the grid, hidden buffer included
pub const GRID_TOTAL_ROWS: u8 = GRID_HEIGHT + HIDDEN_ROWS;

/// Gravity fires on the tick where the counter first exceeds this value,
/// i.e. once every `DROP_THRESHOLD + 1` ticks.
pub const DROP_THRESHOLD: u32 = 35;

/// Nominal scheduler cadence in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// The seven piece kinds
///
/// Display colors (looked up by the renderer from the kind):
/// - **I**: cyan
/// - **J**: blue
/// - **L**: orange
/// - **O**: yellow
/// - **S**: green
/// - **T**: purple
/// - **Z**: red
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// Every kind, in ordinal order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Ordinal of the kind, for indexing fixed-size per-kind tables.
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// for (i, kind) in PieceKind::ALL.iter().enumerate() {
    ///     assert_eq!(kind.index(), i);
    /// }
    /// ```
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            "o" => Some(PieceKind::O),
            "s" => Some(PieceKind::S),
            "t" => Some(PieceKind::T),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Single uppercase letter naming the kind
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::J => "J",
            PieceKind::L => "L",
            PieceKind::O => "O",
            PieceKind::S => "S",
            PieceKind::T => "T",
            PieceKind::Z => "Z",
        }
    }
}

/// Discrete player actions accepted by the engine
///
/// Mapping physical keys to these is the input layer's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Rotate piece 90° clockwise
    RotateCw,
    /// Move piece one row down, locking it if it cannot move
    SoftDrop,
}

impl Action {
    /// Parse action from string (case-insensitive camelCase)
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_types::Action;
    ///
    /// assert_eq!(Action::from_str("moveLeft"), Some(Action::MoveLeft));
    /// assert_eq!(Action::from_str("softdrop"), Some(Action::SoftDrop));
    /// assert_eq!(Action::from_str("hardDrop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(Action::MoveLeft),
            "moveright" => Some(Action::MoveRight),
            "rotatecw" => Some(Action::RotateCw),
            "softdrop" => Some(Action::SoftDrop),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::MoveLeft => "moveLeft",
            Action::MoveRight => "moveRight",
            Action::RotateCw => "rotateCw",
            Action::SoftDrop => "softDrop",
        }
    }
}

/// Observable engine phase
///
/// Locking happens inside a single tick or soft drop and is never observed
/// between two triggers, so it has no variant here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GamePhase {
    #[default]
    Falling,
    GameOver,
}

/// A cell on the grid
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell committed by a piece of the given kind
pub type Cell = Option<PieceKind>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_dimensions() {
        assert_eq!(GRID_WIDTH, 10);
        assert_eq!(GRID_HEIGHT, 20);
        assert_eq!(HIDDEN_ROWS, 2);
        assert_eq!(GRID_TOTAL_ROWS, 22);
    }

    #[test]
    fn piece_kind_string_roundtrip() {
        for kind in PieceKind::ALL {
            assert_eq!(PieceKind::from_str(kind.as_str()), Some(kind));
        }
    }

    #[test]
    fn action_string_roundtrip() {
        for action in [
            Action::MoveLeft,
            Action::MoveRight,
            Action::RotateCw,
            Action::SoftDrop,
        ] {
            assert_eq!(Action::from_str(action.as_str()), Some(action));
        }
    }

    #[test]
    fn phase_defaults_to_falling() {
        assert_eq!(GamePhase::default(), GamePhase::Falling);
    }
}
