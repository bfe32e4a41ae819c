//! Classic Tetris (workspace facade crate).
//!
//! Re-exports the member crates as `classic_tetris::{core, input, store, term, types}`
//! and holds the pieces only the binary needs: startup configuration and the
//! frame clock.

pub mod clock;
pub mod config;

pub use classic_tetris_core as core;
pub use classic_tetris_input as input;
pub use classic_tetris_store as store;
pub use classic_tetris_term as term;
pub use classic_tetris_types as types;
