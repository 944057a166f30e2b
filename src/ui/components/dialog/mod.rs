//! Dialog components for TUI

mod base;
mod prompt_dialog;

pub use prompt_dialog::render_prompt_dialog;
