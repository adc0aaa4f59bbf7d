//! Navigation state: which [`Tab`] the bottom bar has selected.
//!
//! Tabs are flat: selecting one replaces the current view, there is no back
//! stack. `next`/`previous` wrap around so a two-button device can cycle.

use crate::tab::Tab;

/// Bottom nav-bar selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TabBar {
    active: Tab,
}

impl TabBar {
    /// Create a tab bar with [`Tab::Scan`] selected.
    pub const fn new() -> Self {
        TabBar { active: Tab::Scan }
    }

    /// The selected tab.
    #[must_use]
    pub fn active(&self) -> Tab {
        self.active
    }

    /// Select `tab`. Returns `true` if the selection changed.
    pub fn select(&mut self, tab: Tab) -> bool {
        let changed = self.active != tab;
        self.active = tab;
        changed
    }

    /// Select the tab to the right, wrapping to the first.
    pub fn next(&mut self) -> Tab {
        let i = self.active.index().wrapping_add(1) % Tab::ALL.len();
        self.active = Tab::ALL.get(i).copied().unwrap_or_default();
        self.active
    }

    /// Select the tab to the left, wrapping to the last.
    pub fn previous(&mut self) -> Tab {
        let len = Tab::ALL.len();
        let i = self.active.index().wrapping_add(len).wrapping_sub(1) % len;
        self.active = Tab::ALL.get(i).copied().unwrap_or_default();
        self.active
    }
}
