//! Accessible slide-in navigation: a two-state machine with a focus trap.
//!
//! DESIGN
//! ======
//! The machine owns the open/closed flag and the focusable snapshot taken on
//! open; every DOM effect goes through [`NavSurface`]. Because installing and
//! removing the key interceptor only happens on a state change, at most one
//! interceptor exists at any time and repeated open/close calls are no-ops.

#[cfg(test)]
#[path = "mobile_nav_test.rs"]
mod mobile_nav_test;

/// DOM effects the nav machine needs. Implemented over web-sys in
/// `behaviors::mobile_nav` and by a recording fake in tests.
pub trait NavSurface {
    /// Handle to a focusable element inside the nav container.
    type Focusable: PartialEq;

    /// Whether the container currently carries the `expanded` class.
    fn is_container_expanded(&self) -> bool;
    fn scroll_y(&self) -> f64;
    fn scroll_to_y(&self, y: f64);
    /// Container `expanded` class plus the body marker class.
    fn set_container_expanded(&self, expanded: bool);
    /// Marker class on the `<main>` element.
    fn set_main_marker(&self, active: bool);
    fn set_overlay_active(&self, active: bool);
    /// `aria-expanded` on the toggle button.
    fn set_toggle_expanded(&self, expanded: bool);
    /// Focusable descendants of the container in document order.
    fn collect_focusables(&self) -> Vec<Self::Focusable>;
    fn focus(&self, target: &Self::Focusable);
    fn focus_toggle(&self);
    fn install_key_trap(&mut self);
    fn remove_key_trap(&mut self);
}

/// Behavior switches that differed between page variants.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavOptions {
    pub restore_scroll: bool,
    pub toggle_main: bool,
}

impl Default for NavOptions {
    fn default() -> Self {
        Self { restore_scroll: true, toggle_main: false }
    }
}

/// Key press as seen by the trap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavKey {
    Tab { shift: bool },
    Escape,
    Other,
}

impl NavKey {
    /// Map a `KeyboardEvent.key` value.
    #[must_use]
    pub fn from_key(key: &str, shift: bool) -> Self {
        match key {
            "Tab" => Self::Tab { shift },
            "Escape" | "Esc" => Self::Escape,
            _ => Self::Other,
        }
    }
}

/// Result of routing a key press through the trap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Let the browser handle the key.
    Ignored,
    /// Focus was wrapped; the default tab move must be suppressed.
    Wrapped,
    /// The nav closed.
    Closed,
}

pub struct MobileNav<S: NavSurface> {
    surface: S,
    options: NavOptions,
    open: bool,
    focusables: Vec<S::Focusable>,
}

impl<S: NavSurface> MobileNav<S> {
    /// Build a nav in the state the container's class already shows and
    /// publish it on the toggle. Markup that ships expanded starts open,
    /// with its key trap installed.
    pub fn new(mut surface: S, options: NavOptions) -> Self {
        let open = surface.is_container_expanded();
        surface.set_toggle_expanded(open);
        let focusables = if open {
            surface.install_key_trap();
            surface.collect_focusables()
        } else {
            Vec::new()
        };
        Self { surface, options, open, focusables }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open();
        }
    }

    /// Open the nav. Returns `false` if it was already open.
    pub fn open(&mut self) -> bool {
        if self.open {
            return false;
        }
        let scroll_y = self.surface.scroll_y();
        self.surface.set_container_expanded(true);
        if self.options.toggle_main {
            self.surface.set_main_marker(true);
        }
        self.surface.set_overlay_active(true);
        self.surface.set_toggle_expanded(true);
        if self.options.restore_scroll {
            self.surface.scroll_to_y(scroll_y);
        }

        self.focusables = self.surface.collect_focusables();
        if let Some(first) = self.focusables.first() {
            self.surface.focus(first);
        }
        self.surface.install_key_trap();
        self.open = true;
        true
    }

    /// Close the nav. Returns `false` if it was already closed.
    pub fn close(&mut self) -> bool {
        if !self.open {
            return false;
        }
        self.surface.set_container_expanded(false);
        if self.options.toggle_main {
            self.surface.set_main_marker(false);
        }
        self.surface.set_overlay_active(false);
        self.surface.set_toggle_expanded(false);
        self.surface.focus_toggle();
        self.surface.remove_key_trap();
        self.focusables.clear();
        self.open = false;
        true
    }

    /// Route a key press received by the container while `active` has focus.
    pub fn on_key(&mut self, key: NavKey, active: Option<&S::Focusable>) -> KeyOutcome {
        if !self.open {
            return KeyOutcome::Ignored;
        }
        match key {
            NavKey::Escape => {
                self.close();
                KeyOutcome::Closed
            }
            NavKey::Tab { shift } => {
                let (Some(first), Some(last)) = (self.focusables.first(), self.focusables.last()) else {
                    return KeyOutcome::Ignored;
                };
                if shift && active == Some(first) {
                    self.surface.focus(last);
                    KeyOutcome::Wrapped
                } else if !shift && active == Some(last) {
                    self.surface.focus(first);
                    KeyOutcome::Wrapped
                } else {
                    KeyOutcome::Ignored
                }
            }
            NavKey::Other => KeyOutcome::Ignored,
        }
    }
}
