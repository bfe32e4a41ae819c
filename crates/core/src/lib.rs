//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has no dependencies on the terminal or the filesystem, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Unit tests for every rule, no terminal needed
//! - **Portable**: Can run headless (benches, tests) or behind any renderer
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid of colour cells, locking and line clearing
//! - [`collision`]: Shape-against-board overlap test
//! - [`game_state`]: Session lifecycle, gravity, movement, rotation, scoring
//! - [`persistence`]: High score store seam and an in-memory store
//! - [`pieces`]: Tetromino matrices and clockwise rotation
//! - [`rng`]: Uniform random piece selection
//! - [`scoring`]: Line clear points, leveling, gravity speed
//! - [`snapshot`]: Read-only copy of the state for renderers
//!
//! # Game Rules
//!
//! Classic rules, no modern extras:
//!
//! - **Random pieces**: Every kind equally likely on each draw, one piece of preview
//! - **Rotation**: Clockwise only, with a one-column kick left then right
//! - **Locking**: A piece locks as soon as it cannot move down
//! - **Scoring**: 100/300/500/800 times the level for 1-4 lines
//!
//! # Example
//!
//! ```
//! use classic_tetris_core::GameState;
//! use classic_tetris_types::{GameAction, Phase};
//!
//! let mut game = GameState::in_memory(12345);
//! assert!(game.apply_action(GameAction::Start));
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.apply_action(GameAction::MoveDown);
//!
//! assert_eq!(game.phase(), Phase::Playing);
//! assert_eq!(game.score(), 0);
//! ```
//!
//! # Timing
//!
//! The host calls [`GameState::tick`](game_state::GameState::tick) every frame
//! with the elapsed milliseconds. Gravity fires once the accumulated time
//! exceeds the level's drop interval (1000ms at level 1, 100ms minimum).

pub mod board;
pub mod collision;
pub mod game_state;
pub mod persistence;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use classic_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, Grid};
pub use collision::{collides, fits};
pub use game_state::GameState;
pub use persistence::{HighScoreStore, MemoryHighScores};
pub use pieces::{canonical_shape, Piece, Shape};
pub use rng::SimpleRng;
pub use scoring::{calculate_score, drop_interval_ms, level_for_lines, ScoreResult};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
