//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. The mapping
//! only needs the current [`crate::types::Phase`] to pick what Space means;
//! whether an action is valid is left to the engine's guard.

pub mod map;

pub use classic_tetris_types as types;

pub use map::{handle_key_event, should_quit};
