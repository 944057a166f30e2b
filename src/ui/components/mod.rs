//! Reusable UI components

mod dialog;

pub use dialog::render_prompt_dialog;
