//! Core game logic module for Snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! The terminal front end drives it through [`GameLoop`], and tests drive it directly.

pub mod collision;
pub mod config;
pub mod direction;
pub mod engine;
pub mod grid;
pub mod leaderboard;
pub mod state;

// Re-export commonly used types
pub use collision::{Outcome, check};
pub use config::GameConfig;
pub use direction::{Direction, DirectionController};
pub use engine::{FinalizeReport, GameLoop, Phase, Snapshot, Tick};
pub use grid::{Cell, GridGeometry};
pub use leaderboard::{Leaderboard, LeaderboardEntry};
pub use state::{Advance, GameState, Snake};
