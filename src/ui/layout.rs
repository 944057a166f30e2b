//! Layout components (header, status bar)

use crate::app::App;
use crate::state::{FocusRegion, HEADER_HEIGHT, INPUT_HEIGHT, NAV_WIDTH, STATUS_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Screen regions for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DashLayout {
    pub header: Rect,
    /// Absent when no menu is mounted
    pub navigation: Option<Rect>,
    pub display: Rect,
    pub input: Rect,
    pub status: Rect,
}

/// Split the screen the same way `UiArea` hit-tests it
pub fn create_layout(area: Rect, menu_enabled: bool) -> DashLayout {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(INPUT_HEIGHT),
            Constraint::Length(STATUS_HEIGHT),
        ])
        .split(area);

    let (navigation, display) = if menu_enabled {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(NAV_WIDTH), Constraint::Min(0)])
            .split(rows[1]);
        (Some(columns[0]), columns[1])
    } else {
        (None, rows[1])
    };

    DashLayout {
        header: rows[0],
        navigation,
        display,
        input: rows[2],
        status: rows[3],
    }
}

/// Draw the title header
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let header = Paragraph::new(Line::from(Span::styled(
        app.title.to_uppercase(),
        Style::default()
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD),
    )))
    .centered()
    .style(Style::default().bg(Color::Cyan));
    frame.render_widget(header, area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![Span::styled(
        format!(" {} ", app.workdir().display()),
        Style::default().fg(Color::Blue),
    )];

    spans.push(Span::styled(
        view_hints(app),
        Style::default().fg(Color::Gray),
    ));

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);
}

/// Keyboard hints for whatever currently owns input
fn view_hints(app: &App) -> &'static str {
    if let Some(prompt) = &app.state.prompt {
        return match prompt.modal.text_value() {
            Some(_) => "type:answer  Enter:confirm  Esc:cancel",
            None => "1-9:select  Enter:confirm  Esc:cancel",
        };
    }
    if app.is_busy() {
        return "working...  ^C:quit";
    }
    match app.focus().focused() {
        FocusRegion::Navigation => {
            "↑/↓:move  Enter:open  Backspace:back  Tab:input  q:quit"
        }
        FocusRegion::Input if app.menu_enabled() => "Enter:send  Tab:menu  ^C:quit",
        FocusRegion::Input => "Enter:send  ^C:quit",
    }
}
