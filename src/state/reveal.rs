//! Scroll-reveal decisions.
//!
//! Reveal is one-way: once an element carries the visible marker nothing in
//! this crate removes it. Observation is the primary trigger; the
//! force-reveal pass exists for environments where the observer never fires.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use crate::consts::FORCE_REVEAL_VIEWPORT_RATIO;

/// An element that can be revealed.
pub trait RevealTarget {
    fn is_revealed(&self) -> bool;
    fn mark_revealed(&self);
    /// Top and bottom edge relative to the viewport, in CSS pixels.
    fn vertical_span(&self) -> (f64, f64);
}

/// How the reveal feature starts up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealPlan {
    /// Reduced motion, or nothing to animate: reveal everything now.
    RevealAll,
    /// Observe intersections, optionally with the force-reveal fallback.
    Observe { force_fallback: bool },
}

#[must_use]
pub fn plan(target_count: usize, reduced_motion: bool, force_fallback: bool) -> RevealPlan {
    if target_count == 0 || reduced_motion {
        RevealPlan::RevealAll
    } else {
        RevealPlan::Observe { force_fallback }
    }
}

/// Reveal `target` unless it already is. Returns whether anything changed.
pub fn reveal<T: RevealTarget + ?Sized>(target: &T) -> bool {
    if target.is_revealed() {
        return false;
    }
    target.mark_revealed();
    true
}

/// Reveal every target. Returns how many changed.
pub fn reveal_all<T: RevealTarget>(targets: &[T]) -> usize {
    targets.iter().filter(|t| reveal(*t)).count()
}

/// Handle one observer entry. Returns `true` when the target should no
/// longer be observed.
pub fn on_intersection<T: RevealTarget + ?Sized>(target: &T, is_intersecting: bool) -> bool {
    if !is_intersecting {
        return false;
    }
    reveal(target);
    true
}

/// Whether a box spanning `top..bottom` is inside the expanded viewport bound.
#[must_use]
pub fn in_expanded_view(top: f64, bottom: f64, viewport_height: f64) -> bool {
    top < viewport_height * FORCE_REVEAL_VIEWPORT_RATIO && bottom > 0.0
}

/// Force-reveal pass: reveal every hidden target currently in view.
pub fn force_reveal_in_view<T: RevealTarget>(targets: &[T], viewport_height: f64) -> usize {
    targets
        .iter()
        .filter(|t| {
            let (top, bottom) = t.vertical_span();
            in_expanded_view(top, bottom, viewport_height)
        })
        .filter(|t| reveal(*t))
        .count()
}
