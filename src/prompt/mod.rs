//! Modal prompts that suspend a running action until the user answers

mod modal;
mod request;
mod service;

pub use modal::PromptModal;
pub use request::{PromptRequest, PromptResponse, SelectOption};
pub use service::{prompt_channel, PromptError, PromptExchange, PromptReceiver, Prompter};
