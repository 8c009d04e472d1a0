//! Operating system picker.

use ratatui::widgets::ListState;

use crate::platform::OsKind;

/// Selection over the supported operating systems.
#[derive(Debug, Clone)]
pub struct Picker {
    list_state: ListState,
}

impl Default for Picker {
    fn default() -> Self {
        Self {
            list_state: ListState::default().with_selected(Some(0)),
        }
    }
}

impl Picker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options in display order.
    pub fn options(&self) -> &'static [OsKind] {
        &OsKind::ALL
    }

    /// Selection state for rendering the option list.
    pub fn list_state(&self) -> &ListState {
        &self.list_state
    }

    /// Move up, wrapping to the bottom.
    pub fn select_previous(&mut self) {
        let i = match self.list_state.selected() {
            Some(0) | None => self.options().len() - 1,
            Some(i) => i - 1,
        };
        self.list_state.select(Some(i));
    }

    /// Move down, wrapping to the top.
    pub fn select_next(&mut self) {
        let i = match self.list_state.selected() {
            Some(i) if i + 1 < self.options().len() => i + 1,
            _ => 0,
        };
        self.list_state.select(Some(i));
    }

    pub fn selected(&self) -> OsKind {
        let i = self.list_state.selected().unwrap_or(0);
        self.options()[i.min(self.options().len() - 1)]
    }
}
