//! Prompt/minibuffer system for user input

use crate::input::keys::Key;
use crate::model::cursor::Cursor;
use crate::model::document::Document;
use crate::view::viewport::Viewport;

/// Type of prompt - determines what action to take when user confirms
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptType {
    /// Incremental search through the document
    Search,
    /// Pick a file name for an unnamed document before saving
    SaveFileAs,
}

/// What a key press did to the prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptOutcome {
    /// The prompt stays open
    Editing,
    /// Enter on a non-empty input
    Confirmed(String),
    /// Escape
    Cancelled,
}

/// Editor state a prompt handler may touch
pub struct PromptContext<'a> {
    pub document: &'a mut Document,
    pub cursor: &'a mut Cursor,
    pub viewport: &'a mut Viewport,
}

/// Per-keystroke hook attached to a prompt.
///
/// Called after the prompt has applied the key to its input, including the
/// key that confirms or cancels it.
pub trait PromptHandler {
    fn on_key(&mut self, ctx: PromptContext<'_>, query: &str, key: Key);
}

/// Prompt state for the minibuffer
#[derive(Debug, Clone)]
pub struct Prompt {
    /// The prompt message shown before the input (e.g., "Search: ")
    pub message: String,
    /// Hint shown after the input
    pub hint: String,
    /// User's current input
    pub input: String,
    /// What to do when user confirms
    pub prompt_type: PromptType,
}

impl Prompt {
    /// Create a new prompt
    pub fn new(message: impl Into<String>, hint: impl Into<String>, prompt_type: PromptType) -> Self {
        Self {
            message: message.into(),
            hint: hint.into(),
            input: String::new(),
            prompt_type,
        }
    }

    /// Full text for the message line
    pub fn display(&self) -> String {
        format!("{}{}{}", self.message, self.input, self.hint)
    }

    /// Apply one key to the input
    pub fn handle_key(&mut self, key: Key) -> PromptOutcome {
        match key {
            Key::Backspace | Key::Delete => {
                self.input.pop();
                PromptOutcome::Editing
            }
            Key::Escape => PromptOutcome::Cancelled,
            Key::Enter if !self.input.is_empty() => PromptOutcome::Confirmed(self.input.clone()),
            _ => {
                if let Some(byte) = key.printable() {
                    self.input.push(char::from(byte));
                }
                PromptOutcome::Editing
            }
        }
    }
}
