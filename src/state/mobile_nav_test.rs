#![allow(clippy::float_cmp)]

use std::cell::{Cell, RefCell};

use super::*;

// =============================================================
// Recording surface
// =============================================================

#[derive(Default)]
struct FakeSurface {
    scroll: Cell<f64>,
    scroll_writes: RefCell<Vec<f64>>,
    expanded: Cell<bool>,
    main_marker: Cell<bool>,
    main_writes: Cell<u32>,
    overlay: Cell<bool>,
    toggle_aria: Cell<Option<bool>>,
    focusables: Vec<u32>,
    focused: Cell<Option<u32>>,
    toggle_focused: Cell<bool>,
    traps: u32,
    max_traps: u32,
}

impl FakeSurface {
    fn with_focusables(ids: &[u32]) -> Self {
        Self { focusables: ids.to_vec(), ..Self::default() }
    }
}

impl NavSurface for FakeSurface {
    type Focusable = u32;

    fn is_container_expanded(&self) -> bool {
        self.expanded.get()
    }

    fn scroll_y(&self) -> f64 {
        self.scroll.get()
    }

    fn scroll_to_y(&self, y: f64) {
        self.scroll_writes.borrow_mut().push(y);
        self.scroll.set(y);
    }

    fn set_container_expanded(&self, expanded: bool) {
        // Mutating classes can make the page jump.
        self.scroll.set(0.0);
        self.expanded.set(expanded);
    }

    fn set_main_marker(&self, active: bool) {
        self.main_marker.set(active);
        self.main_writes.set(self.main_writes.get() + 1);
    }

    fn set_overlay_active(&self, active: bool) {
        self.overlay.set(active);
    }

    fn set_toggle_expanded(&self, expanded: bool) {
        self.toggle_aria.set(Some(expanded));
    }

    fn collect_focusables(&self) -> Vec<u32> {
        self.focusables.clone()
    }

    fn focus(&self, target: &u32) {
        self.toggle_focused.set(false);
        self.focused.set(Some(*target));
    }

    fn focus_toggle(&self) {
        self.focused.set(None);
        self.toggle_focused.set(true);
    }

    fn install_key_trap(&mut self) {
        self.traps += 1;
        self.max_traps = self.max_traps.max(self.traps);
    }

    fn remove_key_trap(&mut self) {
        self.traps -= 1;
    }
}

fn nav(ids: &[u32]) -> MobileNav<FakeSurface> {
    MobileNav::new(FakeSurface::with_focusables(ids), NavOptions::default())
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn new_nav_is_closed_and_publishes_aria_false() {
    let nav = nav(&[1, 2]);
    assert!(!nav.is_open());
    assert_eq!(nav.surface().toggle_aria.get(), Some(false));
    assert_eq!(nav.surface().traps, 0);
}

#[test]
fn nav_expanded_in_markup_starts_open() {
    let surface = FakeSurface::with_focusables(&[1, 2]);
    surface.expanded.set(true);
    let mut nav = MobileNav::new(surface, NavOptions::default());
    assert!(nav.is_open());
    assert_eq!(nav.surface().toggle_aria.get(), Some(true));
    assert_eq!(nav.surface().traps, 1);

    nav.toggle();
    assert!(!nav.is_open());
    assert!(!nav.surface().expanded.get());
    assert_eq!(nav.surface().traps, 0);
    assert_eq!(nav.surface().max_traps, 1);
}

#[test]
fn escape_closes_nav_that_started_expanded() {
    let surface = FakeSurface::with_focusables(&[1, 2]);
    surface.expanded.set(true);
    let mut nav = MobileNav::new(surface, NavOptions::default());
    assert_eq!(nav.on_key(NavKey::Escape, None), KeyOutcome::Closed);
    assert!(!nav.is_open());
    assert!(nav.surface().toggle_focused.get());
    assert_eq!(nav.surface().traps, 0);
}

#[test]
fn open_applies_every_side_effect() {
    let mut nav = nav(&[1, 2, 3]);
    assert!(nav.open());
    let s = nav.surface();
    assert!(nav.is_open());
    assert!(s.expanded.get());
    assert!(s.overlay.get());
    assert_eq!(s.toggle_aria.get(), Some(true));
    assert_eq!(s.focused.get(), Some(1));
    assert_eq!(s.traps, 1);
}

#[test]
fn close_reverts_side_effects_and_returns_focus() {
    let mut nav = nav(&[1, 2]);
    nav.open();
    assert!(nav.close());
    let s = nav.surface();
    assert!(!s.expanded.get());
    assert!(!s.overlay.get());
    assert_eq!(s.toggle_aria.get(), Some(false));
    assert!(s.toggle_focused.get());
    assert_eq!(s.traps, 0);
}

#[test]
fn open_close_open_keeps_a_single_trap() {
    let mut nav = nav(&[1, 2]);
    nav.open();
    nav.close();
    nav.open();
    assert_eq!(nav.surface().traps, 1);
    assert_eq!(nav.surface().max_traps, 1);
}

#[test]
fn repeated_open_and_close_are_noops() {
    let mut nav = nav(&[1]);
    assert!(nav.open());
    assert!(!nav.open());
    assert_eq!(nav.surface().traps, 1);

    assert!(nav.close());
    assert!(!nav.close());
    assert_eq!(nav.surface().traps, 0);
    assert_eq!(nav.surface().max_traps, 1);
}

#[test]
fn toggle_alternates_states() {
    let mut nav = nav(&[1]);
    nav.toggle();
    assert!(nav.is_open());
    nav.toggle();
    assert!(!nav.is_open());
}

#[test]
fn open_restores_scroll_offset_when_enabled() {
    let surface = FakeSurface::with_focusables(&[1]);
    surface.scroll.set(640.0);
    let mut nav = MobileNav::new(surface, NavOptions::default());
    nav.open();
    assert_eq!(*nav.surface().scroll_writes.borrow(), vec![640.0]);
    assert_eq!(nav.surface().scroll.get(), 640.0);
}

#[test]
fn open_skips_scroll_restore_when_disabled() {
    let surface = FakeSurface::with_focusables(&[1]);
    surface.scroll.set(640.0);
    let options = NavOptions { restore_scroll: false, ..NavOptions::default() };
    let mut nav = MobileNav::new(surface, options);
    nav.open();
    assert!(nav.surface().scroll_writes.borrow().is_empty());
}

#[test]
fn main_marker_follows_flag() {
    let mut plain = nav(&[1]);
    plain.open();
    plain.close();
    assert_eq!(plain.surface().main_writes.get(), 0);

    let options = NavOptions { toggle_main: true, ..NavOptions::default() };
    let mut flagged = MobileNav::new(FakeSurface::with_focusables(&[1]), options);
    flagged.open();
    assert!(flagged.surface().main_marker.get());
    flagged.close();
    assert!(!flagged.surface().main_marker.get());
}

#[test]
fn open_without_focusables_still_traps_escape() {
    let mut nav = nav(&[]);
    nav.open();
    assert_eq!(nav.surface().focused.get(), None);
    assert_eq!(nav.on_key(NavKey::Tab { shift: false }, None), KeyOutcome::Ignored);
    assert_eq!(nav.on_key(NavKey::Escape, None), KeyOutcome::Closed);
    assert!(!nav.is_open());
}

// =============================================================
// Focus trap
// =============================================================

#[test]
fn shift_tab_from_first_wraps_to_last() {
    let mut nav = nav(&[1, 2, 3]);
    nav.open();
    assert_eq!(nav.on_key(NavKey::Tab { shift: true }, Some(&1)), KeyOutcome::Wrapped);
    assert_eq!(nav.surface().focused.get(), Some(3));
}

#[test]
fn tab_from_last_wraps_to_first() {
    let mut nav = nav(&[1, 2, 3]);
    nav.open();
    assert_eq!(nav.on_key(NavKey::Tab { shift: false }, Some(&3)), KeyOutcome::Wrapped);
    assert_eq!(nav.surface().focused.get(), Some(1));
}

#[test]
fn tab_in_the_middle_is_left_to_the_browser() {
    let mut nav = nav(&[1, 2, 3]);
    nav.open();
    assert_eq!(nav.on_key(NavKey::Tab { shift: false }, Some(&2)), KeyOutcome::Ignored);
    assert_eq!(nav.on_key(NavKey::Tab { shift: true }, Some(&2)), KeyOutcome::Ignored);
    assert_eq!(nav.on_key(NavKey::Other, Some(&3)), KeyOutcome::Ignored);
}

#[test]
fn escape_while_open_always_closes() {
    let mut nav = nav(&[1, 2]);
    nav.open();
    assert_eq!(nav.on_key(NavKey::Escape, Some(&2)), KeyOutcome::Closed);
    assert!(!nav.is_open());
    assert_eq!(nav.surface().traps, 0);
}

#[test]
fn keys_are_ignored_while_closed() {
    let mut nav = nav(&[1, 2]);
    assert_eq!(nav.on_key(NavKey::Escape, None), KeyOutcome::Ignored);
    assert_eq!(nav.on_key(NavKey::Tab { shift: true }, Some(&1)), KeyOutcome::Ignored);
}

#[test]
fn nav_key_maps_dom_key_names() {
    assert_eq!(NavKey::from_key("Tab", true), NavKey::Tab { shift: true });
    assert_eq!(NavKey::from_key("Escape", false), NavKey::Escape);
    assert_eq!(NavKey::from_key("Esc", false), NavKey::Escape);
    assert_eq!(NavKey::from_key("Enter", false), NavKey::Other);
}
