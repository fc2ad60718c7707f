use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Longest name the prompt accepts, in characters
pub const MAX_NAME_LEN: usize = 16;

/// What a key did to the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptAction {
    /// Still typing
    Editing,
    /// Enter was pressed; `None` if the buffer was blank
    Submit(Option<String>),
    /// Esc was pressed; the run goes unrecorded
    Cancel,
    /// Ctrl+C: leave the game entirely
    Quit,
}

/// Line editor for the game-over name entry
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamePrompt {
    buffer: String,
}

impl NamePrompt {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self) -> &str {
        &self.buffer
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) -> PromptAction {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return PromptAction::Quit;
        }

        match key.code {
            KeyCode::Enter => {
                let name = std::mem::take(&mut self.buffer);
                let name = name.trim();
                if name.is_empty() {
                    PromptAction::Submit(None)
                } else {
                    PromptAction::Submit(Some(name.to_string()))
                }
            }
            KeyCode::Esc => {
                self.buffer.clear();
                PromptAction::Cancel
            }
            KeyCode::Backspace => {
                self.buffer.pop();
                PromptAction::Editing
            }
            KeyCode::Char(c) if !c.is_control() => {
                if self.buffer.chars().count() < MAX_NAME_LEN {
                    self.buffer.push(c);
                }
                PromptAction::Editing
            }
            _ => PromptAction::Editing,
        }
    }
}
