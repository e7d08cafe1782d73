//! Small value types shared by the state, event and UI layers.

/// Which pane currently has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// The search text input.
    Search,
    /// The category filter buttons.
    Filters,
    /// The active-filter chip row.
    Chips,
    /// The project grid.
    #[default]
    Gallery,
}

/// Focus panes in Tab order.
pub const FOCUS_ORDER: [Focus; 4] = [Focus::Search, Focus::Filters, Focus::Chips, Focus::Gallery];

impl Focus {
    /// Section id used by the footer dots and the menu links.
    #[must_use]
    pub const fn section_id(self) -> &'static str {
        match self {
            Self::Search => "search",
            Self::Filters => "filters",
            Self::Chips => "chips",
            Self::Gallery => "gallery",
        }
    }

    /// Human label for menus.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Search => "Search",
            Self::Filters => "Categories",
            Self::Chips => "Active filters",
            Self::Gallery => "Projects",
        }
    }

    /// Inverse of [`Focus::section_id`].
    #[must_use]
    pub fn from_section(id: &str) -> Option<Self> {
        FOCUS_ORDER.into_iter().find(|f| f.section_id() == id)
    }

    /// Next pane in Tab order, wrapping.
    #[must_use]
    pub fn next(self) -> Self {
        let i = FOCUS_ORDER.iter().position(|f| *f == self).unwrap_or(0);
        FOCUS_ORDER[(i + 1) % FOCUS_ORDER.len()]
    }

    /// Previous pane in Tab order, wrapping.
    #[must_use]
    pub fn prev(self) -> Self {
        let i = FOCUS_ORDER.iter().position(|f| *f == self).unwrap_or(0);
        FOCUS_ORDER[(i + FOCUS_ORDER.len() - 1) % FOCUS_ORDER.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Tab order wraps both ways and section ids round-trip
    ///
    /// - Input: Every focus variant
    /// - Output: next/prev inverse; from_section(section_id) identity
    fn focus_cycle_and_sections() {
        assert_eq!(Focus::Gallery.next(), Focus::Search);
        assert_eq!(Focus::Search.prev(), Focus::Gallery);
        for f in FOCUS_ORDER {
            assert_eq!(f.next().prev(), f);
            assert_eq!(Focus::from_section(f.section_id()), Some(f));
        }
        assert_eq!(Focus::from_section("footer"), None);
    }
}
