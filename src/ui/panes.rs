//! Navigation, display and input panes

use crate::app::App;
use crate::state::FocusRegion;
use ratatui::{
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

fn pane_block(title: &str, focused: bool) -> Block<'_> {
    let border = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(title)
}

/// Draw the menu pane: heading, a spacer row, then the items
pub fn draw_navigation(frame: &mut Frame, area: Rect, app: &App) {
    let nav = app.navigation();
    let focused = app.focus().is_focused(FocusRegion::Navigation);
    let block = pane_block("", focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let heading = Paragraph::new(Line::from(Span::styled(
        nav.current_title(),
        Style::default().add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(heading, Rect { height: 1.min(inner.height), ..inner });

    // MENU_LIST_OFFSET: border + heading + spacer
    let list_area = Rect {
        y: inner.y + 2,
        height: inner.height.saturating_sub(2),
        ..inner
    };
    let items: Vec<ListItem> = nav
        .current_labels()
        .into_iter()
        .map(|label| ListItem::new(label.to_string()))
        .collect();
    let highlight = if focused {
        Style::default().fg(Color::Black).bg(Color::Cyan)
    } else {
        Style::default().add_modifier(Modifier::REVERSED)
    };
    let list = List::new(items).highlight_style(highlight);
    // start from the offset pointer hit-testing uses
    let mut list_state = ListState::default()
        .with_selected(Some(nav.selected_index()))
        .with_offset(app.menu_offset());
    frame.render_stateful_widget(list, list_area, &mut list_state);
}

/// Draw the output pane, keeping the newest lines in view
pub fn draw_display(frame: &mut Frame, area: Rect, app: &App) {
    let block = pane_block(" Output ", false);
    let visible = block.inner(area).height as usize;
    let lines = &app.state.display;
    let start = lines.len().saturating_sub(visible);
    let content: Vec<Line> = lines[start..]
        .iter()
        .map(|line| Line::from(line.as_str()))
        .collect();
    frame.render_widget(Paragraph::new(content).block(block), area);
}

/// Draw the single-line input
pub fn draw_input(frame: &mut Frame, area: Rect, app: &App) {
    let focused = app.focus().is_focused(FocusRegion::Input);
    let block = pane_block(" Input ", focused);
    let inner = block.inner(area);
    frame.render_widget(Paragraph::new(app.state.input.as_str()).block(block), area);

    if focused && !app.state.has_prompt() {
        let offset = app.state.input.chars().count() as u16;
        frame.set_cursor_position(Position::new(
            (inner.x + offset).min(inner.right().saturating_sub(1)),
            inner.y,
        ));
    }
}
