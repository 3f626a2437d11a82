use crate::view::prompt::{Prompt, PromptHandler};
use std::time::{Duration, Instant};

/// Text on the message line and when it was set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub set_at: Instant,
}

impl StatusMessage {
    pub fn new(text: impl Into<String>, set_at: Instant) -> Self {
        Self {
            text: text.into(),
            set_at,
        }
    }

    /// Whether the message is still shown at `now`
    pub fn is_visible(&self, now: Instant, timeout: Duration) -> bool {
        now.saturating_duration_since(self.set_at) < timeout
    }
}

/// An open prompt on the message line and the hook that follows its keystrokes
pub(super) struct ActivePrompt {
    pub prompt: Prompt,
    pub handler: Option<Box<dyn PromptHandler>>,
}

impl ActivePrompt {
    pub fn new(prompt: Prompt) -> Self {
        Self {
            prompt,
            handler: None,
        }
    }

    pub fn with_handler(prompt: Prompt, handler: Box<dyn PromptHandler>) -> Self {
        Self {
            prompt,
            handler: Some(handler),
        }
    }
}
