use log::debug;
use rand::Rng;
use std::collections::VecDeque;

use super::direction::Direction;
use super::grid::{Cell, GridGeometry};
use crate::error::StateError;

/// The snake in the game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    /// Body segments, with head at the front
    body: VecDeque<Cell>,
}

impl Snake {
    /// A single-cell snake
    pub fn new(head: Cell) -> Self {
        Self {
            body: VecDeque::from([head]),
        }
    }

    /// Build a snake from head-first cells. Returns `None` if `cells` is empty.
    pub fn from_cells(cells: impl IntoIterator<Item = Cell>) -> Option<Self> {
        let body: VecDeque<Cell> = cells.into_iter().collect();
        if body.is_empty() {
            None
        } else {
            Some(Self { body })
        }
    }

    /// Get the head position
    pub fn head(&self) -> Cell {
        self.body[0]
    }

    /// Get the tail position (last segment)
    pub fn tail(&self) -> Cell {
        self.body[self.body.len() - 1]
    }

    /// All cells, head first
    pub fn cells(&self) -> impl ExactSizeIterator<Item = &Cell> + '_ {
        self.body.iter()
    }

    /// Cells excluding the head
    pub fn body_segments(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.body.iter().skip(1)
    }

    /// Check if position collides with snake body (excluding head)
    pub fn collides_with_body(&self, cell: Cell) -> bool {
        self.body_segments().any(|&segment| segment == cell)
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Push a new head, dropping the tail unless growing
    fn push_head(&mut self, head: Cell, grow: bool) {
        if !grow {
            self.body.pop_back();
        }
        self.body.push_front(head);
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Never true for a snake built through this API
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// What one call to [`GameState::advance`] did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Advance {
    /// The newly pushed head
    pub head: Cell,
    /// Whether the head landed on the food
    pub ate_food: bool,
}

/// Complete state of one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    grid: GridGeometry,
    origin: Cell,
    snake: Snake,
    direction: Direction,
    food: Cell,
    score: u32,
}

impl GameState {
    /// Fresh state: one-cell snake at `origin` heading right, random food
    pub fn new<R: Rng + ?Sized>(grid: GridGeometry, origin: Cell, rng: &mut R) -> Self {
        Self {
            grid,
            origin,
            snake: Snake::new(origin),
            direction: Direction::Right,
            food: grid.random_cell(rng),
            score: 0,
        }
    }

    /// Assemble a state from explicit parts, e.g. to set up a scenario.
    ///
    /// Every cell must be aligned to the grid, and the food and the `origin`
    /// that [`reset`](Self::reset) returns to must be on the board. Snake
    /// cells may lie off the board so wall hits can be staged.
    pub fn from_parts(
        grid: GridGeometry,
        origin: Cell,
        snake: Vec<Cell>,
        direction: Direction,
        food: Cell,
    ) -> Result<Self, StateError> {
        let misaligned = snake
            .iter()
            .chain([&origin, &food])
            .find(|&&cell| !grid.is_aligned(cell));
        if let Some(&bad) = misaligned {
            return Err(StateError::MisalignedCell(bad));
        }
        if !grid.contains(origin) {
            return Err(StateError::OriginOutOfBounds(origin));
        }
        if !grid.contains(food) {
            return Err(StateError::FoodOutOfBounds(food));
        }
        let snake = Snake::from_cells(snake).ok_or(StateError::EmptySnake)?;

        Ok(Self {
            grid,
            origin,
            snake,
            direction,
            food,
            score: 0,
        })
    }

    /// Move the snake one cell in `direction`.
    ///
    /// Eating food relocates it to a random cell, which may land on the snake,
    /// and keeps the tail so the snake grows by one.
    pub fn advance<R: Rng + ?Sized>(&mut self, direction: Direction, rng: &mut R) -> Advance {
        let head = self.snake.head().stepped(direction, self.grid.cell_size());
        let ate_food = head == self.food;

        if ate_food {
            self.food = self.grid.random_cell(rng);
            self.score += 1;
            debug!("food eaten at ({}, {}), score {}", head.x, head.y, self.score);
        }

        self.snake.push_head(head, ate_food);
        self.direction = direction;

        Advance { head, ate_food }
    }

    /// Restore the initial configuration with freshly placed food
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        *self = Self::new(self.grid, self.origin, rng);
    }

    pub fn grid(&self) -> GridGeometry {
        self.grid
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn head(&self) -> Cell {
        self.snake.head()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn food(&self) -> Cell {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }
}
