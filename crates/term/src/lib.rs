//! Terminal rendering for blockfall.
//!
//! Renders [`core::GameSnapshot`] values into a simple framebuffer and flushes
//! that to the terminal with `crossterm`. The engine never sees any of this;
//! the view only reads snapshots.

pub mod fb;
pub mod game_view;
pub mod palette;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{AnchorY, GameView, Viewport, GAME_OVER_TEXT};
pub use palette::piece_color;
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
