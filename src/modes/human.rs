use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use log::{debug, info};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::{MissedTickBehavior, interval};

use crate::game::{GameLoop, Tick};
use crate::input::{InputHandler, KeyAction};
use crate::render::Renderer;

/// Interactive terminal session: one player, one leaderboard, until quit
pub struct HumanMode {
    game: GameLoop,
    renderer: Renderer,
    input_handler: InputHandler,
    should_quit: bool,
}

impl HumanMode {
    pub fn new(game: GameLoop) -> Self {
        Self {
            game,
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        info!(
            "session started on a {}x{} board, {} ms per tick",
            self.game.state().grid().cols(),
            self.game.state().grid().rows(),
            self.game.tick_period().as_millis()
        );

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        info!(
            "session ended after {} games, best score {}",
            self.game.runs_played(),
            self.game.best_score()
        );

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        let mut tick_timer = interval(self.game.tick_period());
        // An overrun tick is not made up with a burst of catch-up ticks
        tick_timer.set_missed_tick_behavior(MissedTickBehavior::Delay);

        // Render at 30 FPS (33ms per frame)
        let render_interval = Duration::from_millis(33);
        let mut render_timer = interval(render_interval);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                // Game logic tick
                _ = tick_timer.tick() => {
                    self.update_game();
                }

                // Render frame
                _ = render_timer.tick() => {
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.game, self.input_handler.prompt());
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return;
            }

            match self.input_handler.handle_key_event(key, self.game.phase()) {
                KeyAction::Turn(direction) => {
                    self.game.request_direction(direction);
                }
                KeyAction::SubmitName(name) => {
                    self.game.finalize(name.as_deref());
                }
                KeyAction::Quit => {
                    self.should_quit = true;
                }
                KeyAction::None => {}
            }
        }
    }

    fn update_game(&mut self) {
        match self.game.tick() {
            Tick::Advanced { ate_food: true, score, .. } => {
                debug!("score now {score}");
            }
            Tick::GameOver { .. } => {
                self.input_handler.open_prompt();
            }
            Tick::Advanced { .. } | Tick::AwaitingName => {}
        }
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Direction, GameConfig, Phase};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn press(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn mode() -> HumanMode {
        HumanMode::new(GameLoop::seeded(&GameConfig::default(), 8).unwrap())
    }

    /// Steer into the top wall and tick until the run ends
    fn crash(mode: &mut HumanMode) {
        mode.handle_event(press(KeyCode::Up));
        while mode.game.phase() == Phase::Running {
            mode.update_game();
        }
    }

    #[test]
    fn test_game_initialization() {
        let mode = mode();
        assert_eq!(mode.game.phase(), Phase::Running);
        assert_eq!(mode.game.state().score(), 0);
        assert!(!mode.should_quit);
    }

    #[test]
    fn test_arrow_key_turns_snake() {
        let mut mode = mode();
        mode.handle_event(press(KeyCode::Down));
        mode.update_game();
        assert_eq!(mode.game.state().direction(), Direction::Down);
    }

    #[test]
    fn test_name_entry_records_run() {
        let mut mode = mode();
        crash(&mut mode);
        assert!(matches!(mode.game.phase(), Phase::AwaitingName { .. }));

        // Movement keys are text while the prompt is open
        for c in "dana".chars() {
            mode.handle_event(press(KeyCode::Char(c)));
        }
        assert_eq!(mode.input_handler.prompt().text(), "dana");
        mode.handle_event(press(KeyCode::Enter));

        assert_eq!(mode.game.phase(), Phase::Running);
        assert_eq!(mode.game.leaderboard().best().unwrap().name, "dana");
    }

    #[test]
    fn test_escape_skips_leaderboard() {
        let mut mode = mode();
        crash(&mut mode);

        mode.handle_event(press(KeyCode::Char('x')));
        mode.handle_event(press(KeyCode::Esc));

        assert_eq!(mode.game.phase(), Phase::Running);
        assert!(mode.game.leaderboard().is_empty());
        assert!(!mode.should_quit);
    }

    #[test]
    fn test_quit_key() {
        let mut mode = mode();
        mode.handle_event(press(KeyCode::Char('q')));
        assert!(mode.should_quit);
    }
}
