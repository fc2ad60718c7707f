//! Grid Snake - a terminal Snake game with a session leaderboard
//!
//! This library provides:
//! - Core game logic (game module): grid, snake state, collisions, leaderboard, tick loop
//! - Key mapping and name entry (input module)
//! - TUI rendering (render module)
//! - The interactive terminal session (modes module)

pub mod error;
pub mod game;
pub mod input;
pub mod modes;
pub mod render;
