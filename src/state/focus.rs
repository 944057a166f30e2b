//! Keyboard focus across the dashboard's input regions

/// Regions that can hold keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusRegion {
    /// Menu navigation pane
    Navigation,
    /// Free-text input line
    Input,
}

/// Outcome of a focus transfer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusChange {
    pub from: FocusRegion,
    pub to: FocusRegion,
    /// Uncommitted text in the input line must be thrown away
    pub discard_input: bool,
}

/// Ordered focus group; exactly one member is focused at any time
#[derive(Debug, Clone)]
pub struct FocusManager {
    members: Vec<FocusRegion>,
    current: usize,
}

impl FocusManager {
    /// Navigation then input when a menu is shown, input alone otherwise
    pub fn new(menu_enabled: bool) -> Self {
        let members = if menu_enabled {
            vec![FocusRegion::Navigation, FocusRegion::Input]
        } else {
            vec![FocusRegion::Input]
        };
        Self {
            members,
            current: 0,
        }
    }

    /// Rebuild the group after a menu was mounted or removed; focus returns to the first member
    pub fn set_menu_enabled(&mut self, menu_enabled: bool) {
        *self = Self::new(menu_enabled);
    }

    #[allow(dead_code)] // inspected by tests; the app only asks for the focused member
    pub fn members(&self) -> &[FocusRegion] {
        &self.members
    }

    pub fn focused(&self) -> FocusRegion {
        self.members[self.current]
    }

    pub fn is_focused(&self, region: FocusRegion) -> bool {
        self.focused() == region
    }

    /// Advance to the next member, wrapping after the last. Always discards
    /// pending input.
    pub fn tab_next(&mut self) -> FocusChange {
        let from = self.focused();
        self.current = (self.current + 1) % self.members.len();
        FocusChange {
            from,
            to: self.focused(),
            discard_input: true,
        }
    }

    /// Focus a member directly (pointer click). `None` if the region is not in the group.
    pub fn focus(&mut self, region: FocusRegion) -> Option<FocusChange> {
        let index = self.members.iter().position(|m| *m == region)?;
        let from = self.focused();
        self.current = index;
        Some(FocusChange {
            from,
            to: region,
            discard_input: region != FocusRegion::Input,
        })
    }
}
