use log::trace;

/// Direction the snake can move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns true if turning from self to other would be a 180-degree turn
    pub fn is_opposite(&self, other: Direction) -> bool {
        self.opposite() == other
    }

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Unit step (dx, dy) in grid cells; y grows downwards
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// Buffers turn requests between ticks.
///
/// `current` is the direction applied on the last tick and `pending` is the
/// latest request that does not reverse it. Reversal is always judged against
/// `current`, so a burst of presses between two ticks can never sneak the
/// snake into a 180-degree turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectionController {
    current: Direction,
    pending: Direction,
}

impl DirectionController {
    pub fn new(initial: Direction) -> Self {
        Self {
            current: initial,
            pending: initial,
        }
    }

    /// Record a turn request. Reversals are dropped silently; the return
    /// value only says whether the request was kept.
    pub fn request_direction(&mut self, direction: Direction) -> bool {
        if self.current.is_opposite(direction) {
            trace!("ignoring reversal {:?} -> {:?}", self.current, direction);
            return false;
        }
        self.pending = direction;
        true
    }

    /// Apply the pending request. Called exactly once per tick.
    pub fn consume(&mut self) -> Direction {
        self.current = self.pending;
        self.current
    }

    pub fn current(&self) -> Direction {
        self.current
    }

    pub fn pending(&self) -> Direction {
        self.pending
    }

    pub fn reset(&mut self, initial: Direction) {
        self.current = initial;
        self.pending = initial;
    }
}

impl Default for DirectionController {
    fn default() -> Self {
        Self::new(Direction::Right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    #[test]
    fn test_opposite_directions() {
        assert!(Direction::Up.is_opposite(Direction::Down));
        assert!(Direction::Down.is_opposite(Direction::Up));
        assert!(Direction::Left.is_opposite(Direction::Right));
        assert!(Direction::Right.is_opposite(Direction::Left));

        assert!(!Direction::Up.is_opposite(Direction::Left));
        assert!(!Direction::Up.is_opposite(Direction::Right));
        assert!(!Direction::Up.is_opposite(Direction::Up));
    }

    #[test]
    fn test_direction_delta() {
        assert_eq!(Direction::Up.delta(), (0, -1));
        assert_eq!(Direction::Down.delta(), (0, 1));
        assert_eq!(Direction::Left.delta(), (-1, 0));
        assert_eq!(Direction::Right.delta(), (1, 0));
    }

    #[test]
    fn test_reversal_is_ignored() {
        let mut controller = DirectionController::default();
        assert!(!controller.request_direction(Direction::Left));
        assert_eq!(controller.consume(), Direction::Right);
    }

    #[test]
    fn test_latest_valid_request_wins() {
        let mut controller = DirectionController::default();
        assert!(controller.request_direction(Direction::Up));
        assert!(controller.request_direction(Direction::Down));
        assert_eq!(controller.consume(), Direction::Down);
    }

    #[test]
    fn test_burst_cannot_reverse_between_ticks() {
        // Moving right: Up then Left would reverse if Left were judged against Up
        let mut controller = DirectionController::default();
        controller.request_direction(Direction::Up);
        controller.request_direction(Direction::Left);
        assert_eq!(controller.consume(), Direction::Up);

        controller.request_direction(Direction::Left);
        assert_eq!(controller.consume(), Direction::Left);
    }

    #[test]
    fn test_consume_never_returns_opposite_of_previous() {
        // Every request sequence of length 3 between each pair of ticks
        let mut controller = DirectionController::default();
        let mut previous = controller.current();
        for a in ALL {
            for b in ALL {
                for c in ALL {
                    controller.request_direction(a);
                    controller.request_direction(b);
                    controller.request_direction(c);
                    let next = controller.consume();
                    assert!(!previous.is_opposite(next), "{previous:?} -> {next:?}");
                    previous = next;
                }
            }
        }
    }

    #[test]
    fn test_reset() {
        let mut controller = DirectionController::default();
        controller.request_direction(Direction::Down);
        controller.consume();
        controller.reset(Direction::Right);
        assert_eq!(controller.current(), Direction::Right);
        assert_eq!(controller.pending(), Direction::Right);
    }
}
