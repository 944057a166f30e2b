//! Modal dialog state for an open prompt

use super::request::{PromptRequest, PromptResponse, SelectOption};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Digit keys are the only way to pick options, so at most nine are bound
const MAX_BOUND_OPTIONS: usize = 9;

/// Input state of the open dialog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptModal {
    Text {
        prompt: String,
        value: String,
    },
    Select {
        prompt: String,
        options: Vec<SelectOption>,
        multi: bool,
        /// 1-based option numbers in the order they were toggled on
        selected: Vec<usize>,
    },
}

impl PromptModal {
    pub fn open(request: PromptRequest) -> Self {
        match request {
            PromptRequest::Text {
                prompt,
                initial_value,
            } => PromptModal::Text {
                prompt,
                value: initial_value.unwrap_or_default(),
            },
            PromptRequest::Select {
                prompt,
                options,
                multi,
            } => PromptModal::Select {
                prompt,
                options,
                multi,
                selected: Vec::new(),
            },
        }
    }

    /// Dialog heading
    pub fn title(&self) -> String {
        match self {
            PromptModal::Text { prompt, .. } => prompt.clone(),
            PromptModal::Select { prompt, .. } => {
                format!("{prompt} (Press number to select, Press enter to confirm)")
            }
        }
    }

    /// Feed a key to the dialog. Returns the response once the dialog resolves.
    pub fn handle_key(&mut self, key: KeyEvent) -> Option<PromptResponse> {
        if key.code == KeyCode::Esc {
            return Some(PromptResponse::Cancelled);
        }
        match self {
            PromptModal::Text { value, .. } => match key.code {
                KeyCode::Enter => Some(PromptResponse::Text(value.trim().to_string())),
                KeyCode::Backspace => {
                    value.pop();
                    None
                }
                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    value.push(c);
                    None
                }
                _ => None,
            },
            PromptModal::Select {
                options,
                multi,
                selected,
                ..
            } => match key.code {
                KeyCode::Enter => Some(PromptResponse::Select(values_of(options, selected))),
                KeyCode::Char(c) => {
                    let number = c.to_digit(10)? as usize;
                    if number == 0 || number > options.len().min(MAX_BOUND_OPTIONS) {
                        return None;
                    }
                    if let Some(pos) = selected.iter().position(|n| *n == number) {
                        selected.remove(pos);
                    } else {
                        selected.push(number);
                    }
                    if *multi {
                        None
                    } else {
                        Some(PromptResponse::Select(values_of(options, selected)))
                    }
                }
                _ => None,
            },
        }
    }

    /// Option rows as displayed: `[X] 1. Label` in multi mode, `1. Label` otherwise
    pub fn option_lines(&self) -> Vec<String> {
        match self {
            PromptModal::Text { .. } => Vec::new(),
            PromptModal::Select {
                options,
                multi,
                selected,
                ..
            } => options
                .iter()
                .enumerate()
                .map(|(i, option)| {
                    let number = i + 1;
                    let prefix = if !*multi {
                        ""
                    } else if selected.contains(&number) {
                        "[X] "
                    } else {
                        "[ ] "
                    };
                    format!("{prefix}{number}. {}", option.label)
                })
                .collect(),
        }
    }

    /// Current contents of a text dialog
    pub fn text_value(&self) -> Option<&str> {
        match self {
            PromptModal::Text { value, .. } => Some(value),
            PromptModal::Select { .. } => None,
        }
    }
}

fn values_of(options: &[SelectOption], selected: &[usize]) -> Vec<String> {
    selected
        .iter()
        .filter_map(|number| options.get(number - 1))
        .map(|option| option.value.clone())
        .collect()
}
