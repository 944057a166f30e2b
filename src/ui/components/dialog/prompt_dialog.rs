//! Prompt dialog component

use super::base::{render_dialog, DialogConfig};
use crate::prompt::PromptModal;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    Frame,
};

fn key_hint(key: &str) -> Span<'_> {
    Span::styled(
        key,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )
}

/// Render the open prompt centered on the screen
pub fn render_prompt_dialog(frame: &mut Frame, modal: &PromptModal) {
    let title = modal.title();
    let body = match modal.text_value() {
        Some(value) => vec![Line::from(vec![
            Span::raw(value.to_string()),
            Span::styled("_", Style::default().add_modifier(Modifier::SLOW_BLINK)),
        ])],
        None => modal.option_lines().into_iter().map(Line::from).collect(),
    };

    let hint = vec![
        key_hint("Enter"),
        Span::raw(" to confirm, "),
        key_hint("Esc"),
        Span::raw(" to cancel"),
    ];

    render_dialog(
        frame,
        DialogConfig {
            title: &title,
            title_color: Color::Yellow,
            border_color: Color::Yellow,
            body,
            hint: Some(hint),
            max_width: 70,
        },
    );
}
