//! Error types for configuration loading and state construction

use std::path::PathBuf;
use thiserror::Error;

use crate::game::Cell;

/// Errors raised while loading or validating a [`GameConfig`](crate::game::GameConfig)
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("cell size must be positive")]
    NonPositiveCellSize,

    #[error("board must have at least one column and one row, got {cols}x{rows}")]
    EmptyBoard { cols: u32, rows: u32 },

    #[error("a {cols}x{rows} board of {cell_size}-unit cells exceeds the coordinate range")]
    BoardTooLarge { cols: u32, rows: u32, cell_size: u32 },

    #[error("tick period must be at least 1 ms")]
    ZeroTickPeriod,

    #[error("start cell ({col}, {row}) lies outside a {cols}x{rows} board")]
    StartOutOfBounds {
        col: u32,
        row: u32,
        cols: u32,
        rows: u32,
    },

    #[error("failed to read config file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors raised when a [`GameState`](crate::game::GameState) is assembled from parts
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StateError {
    #[error("snake must have at least one cell")]
    EmptySnake,

    #[error("cell ({}, {}) is not aligned to the grid", .0.x, .0.y)]
    MisalignedCell(Cell),

    #[error("origin ({}, {}) lies outside the board", .0.x, .0.y)]
    OriginOutOfBounds(Cell),

    #[error("food at ({}, {}) lies outside the board", .0.x, .0.y)]
    FoodOutOfBounds(Cell),
}
