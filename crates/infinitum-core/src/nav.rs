//! Bottom navigation tabs and the active-tab selection.

use std::fmt;
use std::str::FromStr;

use crate::error::ProfileError;

/// Identifier of a bottom navigation tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TabId {
    #[default]
    Home,
    Search,
    /// Raised center action. Never shows a label or an active indicator.
    Magic,
    Content,
    Profile,
}

impl TabId {
    pub fn as_str(self) -> &'static str {
        match self {
            TabId::Home => "home",
            TabId::Search => "search",
            TabId::Magic => "magic",
            TabId::Content => "content",
            TabId::Profile => "profile",
        }
    }

    pub fn is_center_action(self) -> bool {
        self == TabId::Magic
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TabId {
    type Err = ProfileError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "home" => Ok(TabId::Home),
            "search" => Ok(TabId::Search),
            "magic" => Ok(TabId::Magic),
            "content" => Ok(TabId::Content),
            "profile" => Ok(TabId::Profile),
            other => Err(ProfileError::UnknownTab(other.to_string())),
        }
    }
}

/// A tab as drawn in the bottom bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavTab {
    pub id: TabId,
    pub icon: &'static str,
    pub label: &'static str,
}

/// Bottom bar, left to right.
pub const NAV_TABS: [NavTab; 5] = [
    NavTab {
        id: TabId::Home,
        icon: "🏠",
        label: "Дом",
    },
    NavTab {
        id: TabId::Search,
        icon: "🔍",
        label: "Поиск",
    },
    NavTab {
        id: TabId::Magic,
        icon: "✨",
        label: "Магия",
    },
    NavTab {
        id: TabId::Content,
        icon: "📚",
        label: "Контент",
    },
    NavTab {
        id: TabId::Profile,
        icon: "👤",
        label: "Я",
    },
];

/// Which tab is currently active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TabSelection {
    active: TabId,
}

impl TabSelection {
    pub fn new(active: TabId) -> Self {
        Self { active }
    }

    pub fn active(&self) -> TabId {
        self.active
    }

    /// Make `id` the active tab. Returns whether the selection changed.
    pub fn select(&mut self, id: TabId) -> bool {
        let changed = self.active != id;
        if changed {
            tracing::debug!(from = %self.active, to = %id, "Tab changed");
        }
        self.active = id;
        changed
    }

    pub fn is_active(&self, id: TabId) -> bool {
        self.active == id
    }

    /// Whether the tab is drawn with active styling. The center action never is.
    pub fn is_highlighted(&self, id: TabId) -> bool {
        self.is_active(id) && !id.is_center_action()
    }

    pub fn button_class(&self, id: TabId) -> &'static str {
        if id.is_center_action() {
            "nav-item nav-item--magic"
        } else if self.is_active(id) {
            "nav-item active"
        } else {
            "nav-item"
        }
    }

    pub fn icon_class(&self, id: TabId) -> &'static str {
        if id.is_center_action() {
            "nav-icon nav-icon--magic"
        } else if self.is_active(id) {
            "nav-icon active"
        } else {
            "nav-icon"
        }
    }

    pub fn label_class(&self, id: TabId) -> &'static str {
        if self.is_active(id) {
            "nav-label active"
        } else {
            "nav-label"
        }
    }

    pub fn shows_label(&self, id: TabId) -> bool {
        !id.is_center_action()
    }

    pub fn shows_indicator(&self, id: TabId) -> bool {
        self.is_highlighted(id)
    }
}
