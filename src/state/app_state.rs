//! Application state definitions

use crate::prompt::{PromptModal, PromptResponse};
use tokio::sync::oneshot;

/// Lines kept in the display pane before the oldest are dropped
const DISPLAY_HISTORY: usize = 500;

/// An open prompt dialog and the channel its answer goes back on
#[derive(Debug)]
pub struct ActivePrompt {
    pub modal: PromptModal,
    reply: oneshot::Sender<PromptResponse>,
}

impl ActivePrompt {
    pub fn new(modal: PromptModal, reply: oneshot::Sender<PromptResponse>) -> Self {
        Self { modal, reply }
    }

    /// Hand the answer back to the waiting action
    pub fn resolve(self, response: PromptResponse) {
        if self.reply.send(response).is_err() {
            tracing::warn!("prompt answered after its action went away");
        }
    }
}

/// Screen-facing state that is not owned by the navigation or focus layers
#[derive(Debug, Default)]
pub struct AppState {
    /// Lines pushed to the display pane, oldest first
    pub display: Vec<String>,
    /// Uncommitted text in the input line
    pub input: String,
    /// Open prompt dialog, if any
    pub prompt: Option<ActivePrompt>,
    /// Short message shown in the status bar
    pub status_message: Option<String>,
}

impl AppState {
    /// Append a line to the display pane
    pub fn push_line(&mut self, line: impl Into<String>) {
        self.display.push(line.into());
        if self.display.len() > DISPLAY_HISTORY {
            let excess = self.display.len() - DISPLAY_HISTORY;
            self.display.drain(..excess);
        }
    }

    /// Move the input line into the display pane
    pub fn commit_input(&mut self) {
        let line = std::mem::take(&mut self.input);
        self.push_line(line);
    }

    pub fn clear_input(&mut self) {
        self.input.clear();
    }

    pub fn has_prompt(&self) -> bool {
        self.prompt.is_some()
    }
}
