use super::state::GameState;

/// Verdict of a collision check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Alive,
    /// Head left the board
    Wall,
    /// Head overlaps another body segment
    SelfHit,
}

impl Outcome {
    pub fn is_alive(&self) -> bool {
        matches!(self, Outcome::Alive)
    }
}

/// Judge the state as it stands. Wall hits take precedence over self hits.
pub fn check(state: &GameState) -> Outcome {
    let head = state.head();

    if !state.grid().contains(head) {
        return Outcome::Wall;
    }

    if state.snake().collides_with_body(head) {
        return Outcome::SelfHit;
    }

    Outcome::Alive
}
