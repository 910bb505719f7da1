//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::Action`]. The engine never
//! sees key codes; this crate is the only place that knows about them.

pub mod map;

pub use blockfall_types as types;

pub use map::{handle_key_event, is_actionable, should_quit};
