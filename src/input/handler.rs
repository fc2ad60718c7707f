use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::prompt::{NamePrompt, PromptAction};
use crate::game::{Direction, Phase};

/// What the session should do in response to a key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    Turn(Direction),
    /// Close the finished run; `None` leaves it off the leaderboard
    SubmitName(Option<String>),
    Quit,
    None,
}

/// Steering keys: arrows and WASD in either case
pub fn direction_for_key(code: KeyCode) -> Option<Direction> {
    let direction = match code {
        KeyCode::Up | KeyCode::Char('w' | 'W') => Direction::Up,
        KeyCode::Down | KeyCode::Char('s' | 'S') => Direction::Down,
        KeyCode::Left | KeyCode::Char('a' | 'A') => Direction::Left,
        KeyCode::Right | KeyCode::Char('d' | 'D') => Direction::Right,
        _ => return None,
    };
    Some(direction)
}

fn is_interrupt(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c')
}

/// Routes keys by game phase.
///
/// While a run is in progress keys steer or quit. Once it ends they edit the
/// name prompt, so letters that normally steer are typed instead.
#[derive(Debug, Default)]
pub struct InputHandler {
    prompt: NamePrompt,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_key_event(&mut self, key: KeyEvent, phase: Phase) -> KeyAction {
        if is_interrupt(&key) {
            return KeyAction::Quit;
        }

        match phase {
            Phase::Running => Self::play_key(key.code),
            Phase::AwaitingName { .. } => self.prompt_key(key),
        }
    }

    fn play_key(code: KeyCode) -> KeyAction {
        if let Some(direction) = direction_for_key(code) {
            return KeyAction::Turn(direction);
        }
        match code {
            KeyCode::Char('q' | 'Q') | KeyCode::Esc => KeyAction::Quit,
            _ => KeyAction::None,
        }
    }

    fn prompt_key(&mut self, key: KeyEvent) -> KeyAction {
        match self.prompt.handle_key_event(key) {
            PromptAction::Editing => KeyAction::None,
            PromptAction::Submit(name) => KeyAction::SubmitName(name),
            PromptAction::Cancel => KeyAction::SubmitName(None),
            PromptAction::Quit => KeyAction::Quit,
        }
    }

    /// Clear the name buffer for a freshly finished run
    pub fn open_prompt(&mut self) {
        self.prompt = NamePrompt::new();
    }

    pub fn prompt(&self) -> &NamePrompt {
        &self.prompt
    }
}
