pub mod handler;
pub mod prompt;

pub use handler::{InputHandler, KeyAction, direction_for_key};
pub use prompt::{MAX_NAME_LEN, NamePrompt, PromptAction};
