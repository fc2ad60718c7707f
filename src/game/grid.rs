use rand::Rng;

use super::direction::Direction;

/// A position on the board, in board units.
///
/// Both coordinates are multiples of the grid's cell size. Cells outside the
/// board are representable so a head that ran through a wall can be detected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move by one cell of `cell_size` in a direction
    pub fn stepped(&self, direction: Direction, cell_size: i32) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx * cell_size,
            y: self.y + dy * cell_size,
        }
    }
}

/// The discrete coordinate space the game is played on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridGeometry {
    cell_size: i32,
    cols: i32,
    rows: i32,
}

impl GridGeometry {
    /// Build a geometry from already-validated dimensions.
    ///
    /// Callers go through [`GameConfig::validate`](super::GameConfig::validate),
    /// which rejects zero sizes and boards whose extent, plus one off-board
    /// step, does not fit in `i32`.
    pub fn new(cell_size: u32, cols: u32, rows: u32) -> Self {
        Self {
            cell_size: cell_size as i32,
            cols: cols as i32,
            rows: rows as i32,
        }
    }

    pub fn cell_size(&self) -> i32 {
        self.cell_size
    }

    pub fn cols(&self) -> i32 {
        self.cols
    }

    pub fn rows(&self) -> i32 {
        self.rows
    }

    pub fn board_width(&self) -> i32 {
        self.cols * self.cell_size
    }

    pub fn board_height(&self) -> i32 {
        self.rows * self.cell_size
    }

    /// The cell at grid index (col, row)
    pub fn cell_at(&self, col: i32, row: i32) -> Cell {
        Cell::new(col * self.cell_size, row * self.cell_size)
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0 && cell.x < self.board_width() && cell.y >= 0 && cell.y < self.board_height()
    }

    pub fn is_aligned(&self, cell: Cell) -> bool {
        cell.x.rem_euclid(self.cell_size) == 0 && cell.y.rem_euclid(self.cell_size) == 0
    }

    /// Uniformly random aligned cell inside the board
    pub fn random_cell<R: Rng + ?Sized>(&self, rng: &mut R) -> Cell {
        let col = rng.gen_range(0..self.cols);
        let row = rng.gen_range(0..self.rows);
        self.cell_at(col, row)
    }
}
