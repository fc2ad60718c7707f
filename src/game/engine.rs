use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

use super::{
    collision::{self, Outcome},
    config::GameConfig,
    direction::{Direction, DirectionController},
    grid::{Cell, GridGeometry},
    leaderboard::Leaderboard,
    state::{GameState, Snake},
};
use crate::error::ConfigError;

/// Where the loop is between ticks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Running,
    /// The run has ended and the loop is waiting for [`GameLoop::finalize`]
    AwaitingName { outcome: Outcome, score: u32 },
}

/// What a single tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tick {
    /// The snake moved
    Advanced {
        head: Cell,
        ate_food: bool,
        score: u32,
    },
    /// The previous move was fatal; the run is over
    GameOver { outcome: Outcome, score: u32 },
    /// Nothing happened: a finished run still needs finalizing
    AwaitingName,
}

/// Result of closing a finished run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FinalizeReport {
    pub score: u32,
    /// Whether the run made it onto the leaderboard
    pub recorded: bool,
}

/// Read-only view handed to render sinks
#[derive(Debug, Clone, Copy)]
pub struct Snapshot<'a> {
    pub grid: GridGeometry,
    pub snake: &'a Snake,
    pub food: Cell,
    pub score: u32,
    pub phase: Phase,
}

/// Fixed-period driver for one player's session.
///
/// Owns the run state, the turn buffer and the session leaderboard. The host
/// calls [`tick`](Self::tick) once per period; when a tick reports
/// [`Tick::GameOver`] the host collects a name however it likes and hands it to
/// [`finalize`](Self::finalize), which records the run and starts the next one.
pub struct GameLoop<R = StdRng> {
    state: GameState,
    /// Last state that passed a collision check; what render sinks see
    shown: GameState,
    controller: DirectionController,
    leaderboard: Leaderboard,
    phase: Phase,
    tick_period: Duration,
    runs_played: u32,
    best_score: u32,
    rng: R,
}

impl GameLoop<StdRng> {
    /// Create a loop seeded from OS entropy
    pub fn new(config: &GameConfig) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::from_entropy())
    }

    /// Create a loop with a reproducible food sequence
    pub fn seeded(config: &GameConfig, seed: u64) -> Result<Self, ConfigError> {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> GameLoop<R> {
    pub fn with_rng(config: &GameConfig, mut rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let state = GameState::new(config.grid(), config.start_cell(), &mut rng);
        let mut game = Self::from_state(state, rng);
        game.tick_period = config.tick_period();
        Ok(game)
    }

    /// Drive an arbitrary state, e.g. one built with [`GameState::from_parts`]
    pub fn from_state(state: GameState, rng: R) -> Self {
        Self {
            controller: DirectionController::new(state.direction()),
            shown: state.clone(),
            state,
            leaderboard: Leaderboard::new(),
            phase: Phase::Running,
            tick_period: GameConfig::default().tick_period(),
            runs_played: 0,
            best_score: 0,
            rng,
        }
    }

    /// Queue a turn for the next tick. Reversals, and any input while a
    /// finished run awaits its name, are ignored.
    pub fn request_direction(&mut self, direction: Direction) -> bool {
        match self.phase {
            Phase::Running => self.controller.request_direction(direction),
            Phase::AwaitingName { .. } => false,
        }
    }

    /// Run one period of the game.
    ///
    /// Collision is judged on the state left by the previous tick, before this
    /// tick's move. A fatal move is therefore applied, then caught on the next
    /// tick, which ends the run without moving again. The snapshot shows the
    /// state as it was checked, one move behind, so a fatal move never reaches
    /// the screen.
    pub fn tick(&mut self) -> Tick {
        if let Phase::AwaitingName { .. } = self.phase {
            return Tick::AwaitingName;
        }

        let direction = self.controller.consume();

        let outcome = collision::check(&self.state);
        if !outcome.is_alive() {
            let score = self.state.score();
            self.runs_played += 1;
            self.best_score = self.best_score.max(score);
            self.phase = Phase::AwaitingName { outcome, score };
            info!("run {} over: {:?} with score {}", self.runs_played, outcome, score);
            return Tick::GameOver { outcome, score };
        }

        self.shown.clone_from(&self.state);
        let step = self.state.advance(direction, &mut self.rng);
        Tick::Advanced {
            head: step.head,
            ate_food: step.ate_food,
            score: self.state.score(),
        }
    }

    /// Close a finished run and start the next one.
    ///
    /// A name that is missing or blank after trimming skips the leaderboard.
    /// The game resets either way. Returns `None` if no run is waiting.
    pub fn finalize(&mut self, name: Option<&str>) -> Option<FinalizeReport> {
        let Phase::AwaitingName { score, .. } = self.phase else {
            return None;
        };

        let name = name.map(str::trim).filter(|name| !name.is_empty());
        let recorded = match name {
            Some(name) => {
                self.leaderboard.record(name, score);
                true
            }
            None => {
                info!("run with score {score} left unrecorded");
                false
            }
        };

        self.state.reset(&mut self.rng);
        self.controller.reset(self.state.direction());
        self.shown.clone_from(&self.state);
        self.phase = Phase::Running;

        Some(FinalizeReport { score, recorded })
    }

    /// Render view of the last state that passed a collision check
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            grid: self.shown.grid(),
            snake: self.shown.snake(),
            food: self.shown.food(),
            score: self.shown.score(),
            phase: self.phase,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn leaderboard(&self) -> &Leaderboard {
        &self.leaderboard
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn tick_period(&self) -> Duration {
        self.tick_period
    }

    pub fn runs_played(&self) -> u32 {
        self.runs_played
    }

    /// Highest score of any finished run this session, named or not
    pub fn best_score(&self) -> u32 {
        self.best_score
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scenario(points: &[(i32, i32)], food: (i32, i32)) -> GameLoop {
        let snake = points.iter().map(|&(x, y)| Cell::new(x, y)).collect();
        let state = GameState::from_parts(
            GridGeometry::new(20, 30, 30),
            Cell::new(100, 100),
            snake,
            Direction::Right,
            Cell::new(food.0, food.1),
        )
        .unwrap();
        GameLoop::from_state(state, StdRng::seed_from_u64(17))
    }

    #[test]
    fn test_new_loop() {
        let game = GameLoop::seeded(&GameConfig::default(), 1).unwrap();
        assert_eq!(game.phase(), Phase::Running);
        assert_eq!(game.state().head(), Cell::new(100, 100));
        assert_eq!(game.state().score(), 0);
        assert_eq!(game.tick_period(), Duration::from_millis(230));
        assert!(game.leaderboard().is_empty());
    }

    #[test]
    fn test_rejects_invalid_config() {
        let config = GameConfig {
            cell_size: 0,
            ..Default::default()
        };
        assert!(GameLoop::seeded(&config, 1).is_err());
    }

    #[test]
    fn test_tick_advances() {
        let mut game = scenario(&[(100, 100)], (0, 0));

        let tick = game.tick();

        assert_eq!(
            tick,
            Tick::Advanced {
                head: Cell::new(120, 100),
                ate_food: false,
                score: 0
            }
        );
    }

    #[test]
    fn test_tick_eats_food() {
        let mut game = scenario(&[(40, 40), (20, 40)], (60, 40));

        let tick = game.tick();

        assert!(matches!(
            tick,
            Tick::Advanced {
                ate_food: true,
                score: 1,
                ..
            }
        ));
        assert_eq!(game.state().snake().len(), 3);
    }

    #[test]
    fn test_turn_applies_on_next_tick() {
        let mut game = scenario(&[(100, 100)], (0, 0));
        assert!(game.request_direction(Direction::Down));
        game.tick();
        assert_eq!(game.state().head(), Cell::new(100, 120));

        // Reversal relative to the applied direction is ignored
        assert!(!game.request_direction(Direction::Up));
        game.tick();
        assert_eq!(game.state().head(), Cell::new(100, 140));
    }

    #[test]
    fn test_fatal_move_is_caught_on_next_tick() {
        let mut game = scenario(&[(580, 100)], (0, 0));

        // Moves through the wall without ending the run
        assert!(matches!(game.tick(), Tick::Advanced { .. }));
        assert_eq!(game.state().head(), Cell::new(600, 100));

        assert_eq!(
            game.tick(),
            Tick::GameOver {
                outcome: Outcome::Wall,
                score: 0
            }
        );
        // No move happened on the fatal tick
        assert_eq!(game.state().head(), Cell::new(600, 100));
    }

    #[test]
    fn test_fatal_move_is_never_shown() {
        let mut game = scenario(&[(580, 100)], (0, 0));
        assert_eq!(game.snapshot().snake.head(), Cell::new(580, 100));

        game.tick();
        assert_eq!(game.state().head(), Cell::new(600, 100));
        assert_eq!(game.snapshot().snake.head(), Cell::new(580, 100));
        assert_eq!(game.snapshot().phase, Phase::Running);

        game.tick();
        assert_eq!(game.snapshot().snake.head(), Cell::new(580, 100));
        assert!(matches!(
            game.snapshot().phase,
            Phase::AwaitingName {
                outcome: Outcome::Wall,
                ..
            }
        ));
    }

    #[test]
    fn test_snapshot_follows_reset() {
        let mut game = scenario(&[(-20, 40)], (0, 0));
        game.tick();
        game.finalize(None);

        let snapshot = game.snapshot();
        assert_eq!(snapshot.snake.head(), Cell::new(100, 100));
        assert_eq!(snapshot.snake.len(), 1);
        assert_eq!(snapshot.food, game.state().food());
        assert_eq!(snapshot.score, 0);
    }

    #[test]
    fn test_self_hit_ends_run() {
        let mut game = scenario(&[(40, 40), (60, 40), (40, 40)], (0, 0));
        assert_eq!(
            game.tick(),
            Tick::GameOver {
                outcome: Outcome::SelfHit,
                score: 0
            }
        );
    }

    #[test]
    fn test_ticks_pause_until_finalized() {
        let mut game = scenario(&[(-20, 40)], (0, 0));
        assert!(matches!(game.tick(), Tick::GameOver { .. }));

        let head = game.state().head();
        assert_eq!(game.tick(), Tick::AwaitingName);
        assert_eq!(game.tick(), Tick::AwaitingName);
        assert_eq!(game.state().head(), head);
        assert!(!game.request_direction(Direction::Down));
    }

    #[test]
    fn test_finalize_records_named_run() {
        let mut game = scenario(&[(-20, 40)], (0, 0));
        game.tick();

        let report = game.finalize(Some("  ann ")).unwrap();

        assert!(report.recorded);
        assert_eq!(game.leaderboard().best().unwrap().name, "ann");
        assert_eq!(game.phase(), Phase::Running);
        assert_eq!(game.runs_played(), 1);
    }

    #[test]
    fn test_finalize_skips_blank_name() {
        let mut game = scenario(&[(-20, 40)], (0, 0));
        game.tick();

        let report = game.finalize(Some("   ")).unwrap();

        assert!(!report.recorded);
        assert!(game.leaderboard().is_empty());
        assert_eq!(game.phase(), Phase::Running);
        assert_eq!(game.state().head(), Cell::new(100, 100));

        game.tick();
        game.finalize(None);
        assert!(game.leaderboard().is_empty());
    }

    #[test]
    fn test_finalize_without_pending_run() {
        let mut game = scenario(&[(100, 100)], (0, 0));
        assert_eq!(game.finalize(Some("ann")), None);
        assert!(game.leaderboard().is_empty());
    }

    #[test]
    fn test_finalize_resets_state_and_direction() {
        let config = GameConfig::default();
        let mut game = GameLoop::seeded(&config, 3).unwrap();
        game.request_direction(Direction::Up);
        for _ in 0..6 {
            game.tick();
        }
        assert!(matches!(
            game.tick(),
            Tick::GameOver {
                outcome: Outcome::Wall,
                ..
            }
        ));

        game.finalize(None);

        assert_eq!(game.state().head(), config.start_cell());
        assert_eq!(game.state().snake().len(), 1);
        assert_eq!(game.state().score(), 0);
        assert_eq!(collision::check(game.state()), Outcome::Alive);
        // Moving right again, so Left is a reversal
        assert!(!game.request_direction(Direction::Left));
    }
}
