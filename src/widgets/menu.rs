/// Collapsible navigation menu (the hamburger toggle).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavMenu {
    open: bool,
}

impl NavMenu {
    /// Whether the menu is expanded.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Flip the menu; returns the new open state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// A link inside the menu was activated.
    pub fn link_activated(&mut self) {
        self.open = false;
    }

    /// Escape closes the menu regardless of focus.
    pub fn escape(&mut self) {
        self.open = false;
    }

    /// Value of the toggle's `aria-expanded` attribute.
    #[must_use]
    pub const fn aria_expanded(&self) -> &'static str {
        if self.open { "true" } else { "false" }
    }

    /// Accessible label of the toggle button.
    #[must_use]
    pub const fn toggle_label(&self) -> &'static str {
        if self.open { "Close menu" } else { "Open menu" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    /// What: Toggle flips state and labels; links and Escape close
    ///
    /// - Input: toggle, link, toggle, escape
    /// - Output: open/closed transitions with matching labels
    fn toggle_and_close() {
        let mut m = NavMenu::default();
        assert!(m.toggle());
        assert_eq!(m.aria_expanded(), "true");
        assert_eq!(m.toggle_label(), "Close menu");
        m.link_activated();
        assert!(!m.is_open());
        m.toggle();
        m.escape();
        assert!(!m.is_open());
        assert_eq!(m.toggle_label(), "Open menu");
    }
}
