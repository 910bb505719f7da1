//! Game state module - the drop/lock state machine
//!
//! Ties the grid, the active piece and the bag together. Two kinds of trigger
//! drive it: [`GameState::tick`] (gravity, counted in calls) and
//! [`GameState::handle_input`] (player actions). Each trigger runs to
//! completion through `&mut self`, so no half-moved piece is ever observable.

use log::{debug, info};

use crate::bag::BagRandomizer;
use crate::grid::{ClearedRows, Grid, LockOutcome};
use crate::piece::Piece;
use crate::snapshot::GameSnapshot;
use crate::types::{Action, GamePhase, PieceKind, DROP_THRESHOLD};

/// Most recent lock, kept for observers until taken
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockEvent {
    pub kind: PieceKind,
    pub cleared_rows: ClearedRows,
    pub topped_out: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    grid: Grid,
    /// Always Some while falling; after top-out it keeps the offending piece.
    active: Option<Piece>,
    bag: BagRandomizer,
    /// Ticks since gravity last fired
    drop_counter: u32,
    phase: GamePhase,
    pieces_locked: u32,
    last_event: Option<LockEvent>,
}

impl GameState {
    /// Create a new game with the given bag seed and spawn the first piece
    pub fn new(seed: u64) -> Self {
        Self::with_bag(Grid::new(), BagRandomizer::new(seed))
    }

    /// Create a new game with an OS-seeded bag
    pub fn from_entropy() -> Self {
        Self::with_bag(Grid::new(), BagRandomizer::from_entropy())
    }

    /// Start a game on a prepared grid
    pub fn from_grid(grid: Grid, seed: u64) -> Self {
        Self::with_bag(grid, BagRandomizer::new(seed))
    }

    /// Start a game on `grid`, drawing pieces from `bag`
    pub fn with_bag(grid: Grid, bag: BagRandomizer) -> Self {
        let mut state = Self {
            grid,
            active: None,
            bag,
            drop_counter: 0,
            phase: GamePhase::Falling,
            pieces_locked: 0,
            last_event: None,
        };
        state.spawn_piece();
        state
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn drop_counter(&self) -> u32 {
        self.drop_counter
    }

    /// Pieces committed to the grid so far (top-outs excluded)
    pub fn pieces_locked(&self) -> u32 {
        self.pieces_locked
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.grid.clone_from(&self.grid);
        out.active = self.active;
        out.game_over = self.is_game_over();
    }

    /// Owned copy of everything a renderer needs
    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Draw the next kind from the bag and make it the active piece.
    ///
    /// The spawn cell is not checked: a blocked spawn fails its first move
    /// down and tops out on lock.
    fn spawn_piece(&mut self) {
        let piece = Piece::spawn(self.bag.next());
        debug!(
            "spawned {} at row {} col {}",
            piece.kind.as_str(),
            piece.row,
            piece.col
        );
        self.active = Some(piece);
    }

    /// Advance game time by one tick.
    ///
    /// Returns true if gravity fired on this tick.
    pub fn tick(&mut self) -> bool {
        if self.is_game_over() {
            return false;
        }

        self.drop_counter += 1;
        if self.drop_counter <= DROP_THRESHOLD {
            return false;
        }
        self.drop_counter = 0;

        if !self.try_move(1, 0) {
            self.lock_piece();
        }
        true
    }

    /// Apply a player action.
    ///
    /// Returns true if the action changed the game state (a soft drop that
    /// locks counts as a change).
    pub fn handle_input(&mut self, action: Action) -> bool {
        if self.is_game_over() {
            return false;
        }

        match action {
            Action::MoveLeft => self.try_move(0, -1),
            Action::MoveRight => self.try_move(0, 1),
            Action::RotateCw => self.try_rotate(),
            Action::SoftDrop => {
                if !self.try_move(1, 0) {
                    self.lock_piece();
                }
                true
            }
        }
    }

    /// Move the active piece by (rows, cols) if the target is valid
    pub(crate) fn try_move(&mut self, d_row: i8, d_col: i8) -> bool {
        let Some(active) = self.active.as_mut() else {
            return false;
        };

        let (row, col) = (active.row + d_row, active.col + d_col);
        if !self.grid.is_valid_move(&active.matrix, row, col) {
            return false;
        }
        active.row = row;
        active.col = col;
        true
    }

    /// Rotate the active piece clockwise in place, if the result fits
    pub(crate) fn try_rotate(&mut self) -> bool {
        let Some(active) = self.active.as_mut() else {
            return false;
        };

        let rotated = active.matrix.rotate_cw();
        if !self.grid.is_valid_move(&rotated, active.row, active.col) {
            return false;
        }
        active.matrix = rotated;
        true
    }

    /// Commit the active piece, then spawn the next one or end the game
    fn lock_piece(&mut self) {
        let Some(active) = self.active else {
            return;
        };

        let outcome = self.grid.lock(&active);
        let topped_out = outcome.is_topped_out();
        let cleared_rows = match outcome {
            LockOutcome::Locked { cleared_rows } => cleared_rows,
            LockOutcome::ToppedOut => ClearedRows::new(),
        };

        self.last_event = Some(LockEvent {
            kind: active.kind,
            cleared_rows,
            topped_out,
        });

        if topped_out {
            info!(
                "game over: {} locked above the visible field after {} pieces",
                active.kind.as_str(),
                self.pieces_locked
            );
            self.phase = GamePhase::GameOver;
            return;
        }

        self.pieces_locked += 1;
        self.spawn_piece();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
