use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

use super::grid::{Cell, GridGeometry};
use crate::error::ConfigError;

/// Configuration for the game
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side of one cell in board units
    pub cell_size: u32,
    /// Width of the board in cells
    pub cols: u32,
    /// Height of the board in cells
    pub rows: u32,
    /// Milliseconds between game ticks
    pub tick_ms: u64,
    /// Column of the snake's starting cell
    pub start_col: u32,
    /// Row of the snake's starting cell
    pub start_row: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            cell_size: 20,
            cols: 30,
            rows: 30,
            tick_ms: 230,
            start_col: 5,
            start_row: 5,
        }
    }
}

impl GameConfig {
    /// Create a new configuration with custom grid size
    pub fn new(cols: u32, rows: u32) -> Self {
        Self {
            cols,
            rows,
            ..Default::default()
        }
    }

    /// Create a small grid for testing
    pub fn small() -> Self {
        Self::new(10, 10)
    }

    /// Load a JSON config file. Missing fields take their defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cell_size == 0 {
            return Err(ConfigError::NonPositiveCellSize);
        }
        if self.cols == 0 || self.rows == 0 {
            return Err(ConfigError::EmptyBoard {
                cols: self.cols,
                rows: self.rows,
            });
        }
        // One step past the far edge must still be representable
        let fits = |cells: u32| {
            (u64::from(cells) + 1)
                .checked_mul(u64::from(self.cell_size))
                .is_some_and(|extent| extent <= i32::MAX as u64)
        };
        if !fits(self.cols) || !fits(self.rows) {
            return Err(ConfigError::BoardTooLarge {
                cols: self.cols,
                rows: self.rows,
                cell_size: self.cell_size,
            });
        }
        if self.tick_ms == 0 {
            return Err(ConfigError::ZeroTickPeriod);
        }
        if self.start_col >= self.cols || self.start_row >= self.rows {
            return Err(ConfigError::StartOutOfBounds {
                col: self.start_col,
                row: self.start_row,
                cols: self.cols,
                rows: self.rows,
            });
        }
        Ok(())
    }

    pub fn grid(&self) -> GridGeometry {
        GridGeometry::new(self.cell_size, self.cols, self.rows)
    }

    pub fn start_cell(&self) -> Cell {
        self.grid().cell_at(self.start_col as i32, self.start_row as i32)
    }

    pub fn tick_period(&self) -> Duration {
        Duration::from_millis(self.tick_ms)
    }
}
