//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds every rule of the falling-block engine and nothing else.
//! It has no dependencies on terminals, input devices or clocks:
//!
//! - **Deterministic**: the same bag seed produces the same game
//! - **Synchronous**: every trigger runs to completion through `&mut self`
//! - **Allocation-light**: the grid and matrices are fixed-size arrays
//!
//! # Module Structure
//!
//! - [`bag`]: 7-bag randomizer feeding piece kinds into play
//! - [`shapes`]: spawn matrix for each piece kind
//! - [`matrix`]: square occupancy matrices and the clockwise rotation
//! - [`piece`]: the active piece and its spawn placement
//! - [`grid`]: playfield storage, move validation, locking and line clears
//! - [`game_state`]: the drop/lock state machine driven by ticks and input
//! - [`snapshot`]: owned read-only copies for renderers
//!
//! # Game Rules
//!
//! - **7-Bag Randomizer**: every kind appears once per bag of seven
//! - **Plain rotation**: clockwise only, no wall kicks; a blocked rotation is discarded
//! - **Hidden buffer**: two rows above the field where pieces spawn
//! - **Top-out**: locking any cell above the visible field ends the game
//! - **Cascading clears**: stacked full rows all clear in the same lock
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameState;
//! use blockfall_types::{Action, DROP_THRESHOLD};
//!
//! let mut game = GameState::new(12345);
//!
//! game.handle_input(Action::MoveRight);
//! game.handle_input(Action::RotateCw);
//!
//! // Gravity fires once the tick counter passes the threshold
//! let row = game.active().unwrap().row;
//! for _ in 0..=DROP_THRESHOLD {
//!     game.tick();
//! }
//! assert_eq!(game.active().unwrap().row, row + 1);
//! assert!(!game.is_game_over());
//! ```
//!
//! # Timing
//!
//! The engine counts calls to [`GameState::tick`](game_state::GameState::tick);
//! it never reads a clock. The caller decides the cadence (nominally
//! [`types::TICK_MS`]).

pub mod bag;
pub mod game_state;
pub mod grid;
pub mod matrix;
pub mod piece;
pub mod shapes;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use bag::BagRandomizer;
pub use game_state::{GameState, LockEvent};
pub use grid::{ClearedRows, Grid, LockOutcome};
pub use matrix::{rotate, Matrix};
pub use piece::Piece;
pub use shapes::get_shape;
pub use snapshot::GameSnapshot;
