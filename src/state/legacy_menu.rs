//! Legacy dropdown menu used by the single-column layout.
//!
//! No focus trap and no overlay: the toggle flips `aria-expanded` and the
//! panel's `hidden` attribute, and any link inside the panel resets both.

#[cfg(test)]
#[path = "legacy_menu_test.rs"]
mod legacy_menu_test;

/// What the DOM should show after a transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuView {
    pub expanded: bool,
    pub hidden: bool,
}

impl MenuView {
    /// Attribute value for `aria-expanded`.
    #[must_use]
    pub fn aria_expanded(self) -> &'static str {
        if self.expanded { "true" } else { "false" }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LegacyMenu {
    expanded: bool,
}

impl LegacyMenu {
    /// Rebuild state from the toggle's current `aria-expanded` attribute.
    #[must_use]
    pub fn from_aria(value: Option<&str>) -> Self {
        Self { expanded: value == Some("true") }
    }

    #[must_use]
    pub fn is_expanded(self) -> bool {
        self.expanded
    }

    pub fn toggle(&mut self) -> MenuView {
        self.expanded = !self.expanded;
        self.view()
    }

    pub fn reset(&mut self) -> MenuView {
        self.expanded = false;
        self.view()
    }

    fn view(self) -> MenuView {
        MenuView { expanded: self.expanded, hidden: !self.expanded }
    }
}
