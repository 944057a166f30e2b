//! UI area positioning for mouse event handling
//!
//! The layout is fixed, so pointer hit-testing is plain arithmetic on these
//! constants. `ui::layout` builds its ratatui constraints from the same values.
//!
//! ```text
//! Row 0:        Header (title)
//! Rows 1..h-4:  Navigation pane (20 cols, when a menu is mounted) | Display pane
//! Rows h-4..h-1: Input line (3 rows with borders)
//! Row h-1:      Status bar
//! ```

/// Height of the title header
pub const HEADER_HEIGHT: u16 = 1;
/// Height of the input line (with borders)
pub const INPUT_HEIGHT: u16 = 3;
/// Height of the status bar
pub const STATUS_HEIGHT: u16 = 1;
/// Width of the navigation pane
pub const NAV_WIDTH: u16 = 20;
/// Rows inside the navigation pane before the first menu row (border, title, blank)
pub const MENU_LIST_OFFSET: u16 = 3;

/// Screen region under the pointer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiArea {
    Header,
    Navigation,
    Display,
    Input,
    StatusBar,
}

impl UiArea {
    /// Locate the region containing `(col, row)` on a `width`×`height` screen
    pub fn at(col: u16, row: u16, width: u16, height: u16, menu_enabled: bool) -> Option<UiArea> {
        if col >= width || row >= height {
            return None;
        }
        let status_top = height.saturating_sub(STATUS_HEIGHT);
        let input_top = status_top.saturating_sub(INPUT_HEIGHT);
        Some(if row < HEADER_HEIGHT {
            UiArea::Header
        } else if row >= status_top {
            UiArea::StatusBar
        } else if row >= input_top {
            UiArea::Input
        } else if menu_enabled && col < NAV_WIDTH {
            UiArea::Navigation
        } else {
            UiArea::Display
        })
    }

    /// Menu rows that fit between the list top and the pane's bottom border
    pub fn menu_visible_rows(height: u16) -> u16 {
        let input_top = height.saturating_sub(STATUS_HEIGHT + INPUT_HEIGHT);
        input_top
            .saturating_sub(1)
            .saturating_sub(HEADER_HEIGHT + MENU_LIST_OFFSET)
    }

    /// Scroll `offset` just enough to keep `selected` among `visible_rows`
    /// rows, the same rule ratatui's `List` applies while rendering
    pub fn menu_scroll_offset(offset: usize, selected: usize, visible_rows: u16) -> usize {
        let visible = usize::from(visible_rows.max(1));
        if selected < offset {
            selected
        } else if selected >= offset + visible {
            selected + 1 - visible
        } else {
            offset
        }
    }

    /// Menu item index under the pointer for a click inside the navigation
    /// pane of a `height`-row screen whose list starts at item `offset`
    pub fn menu_item_at(row: u16, height: u16, offset: usize) -> Option<usize> {
        let line = row.checked_sub(HEADER_HEIGHT + MENU_LIST_OFFSET)?;
        if line >= Self::menu_visible_rows(height) {
            return None;
        }
        Some(offset + usize::from(line))
    }
}
