//! Prompt request and response payloads

use serde::{Deserialize, Serialize};

/// One choice in a selection prompt
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: &str, label: &str) -> Self {
        Self {
            value: value.to_string(),
            label: label.to_string(),
        }
    }
}

/// What an action is asking the user for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptRequest {
    Text {
        prompt: String,
        initial_value: Option<String>,
    },
    Select {
        prompt: String,
        options: Vec<SelectOption>,
        multi: bool,
    },
}

impl PromptRequest {
    pub fn prompt(&self) -> &str {
        match self {
            PromptRequest::Text { prompt, .. } | PromptRequest::Select { prompt, .. } => prompt,
        }
    }
}

/// How a prompt was resolved
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptResponse {
    /// Trimmed text from a text prompt
    Text(String),
    /// Selected option values, in the order they were toggled on
    Select(Vec<String>),
    /// The user dismissed the dialog
    Cancelled,
}
