//! UI module for rendering the TUI

mod components;
mod layout;
mod panes;

use crate::app::App;
use components::render_prompt_dialog;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let layout = layout::create_layout(frame.area(), app.menu_enabled());

    layout::draw_header(frame, layout.header, app);
    if let Some(area) = layout.navigation {
        panes::draw_navigation(frame, area, app);
    }
    panes::draw_display(frame, layout.display, app);
    panes::draw_input(frame, layout.input, app);
    layout::draw_status_bar(frame, layout.status, app);

    // Modal goes on top of everything
    if let Some(prompt) = &app.state.prompt {
        render_prompt_dialog(frame, &prompt.modal);
    }
}
