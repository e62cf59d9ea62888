//! Sticky navigation predicate.

#[cfg(test)]
#[path = "sticky_nav_test.rs"]
mod sticky_nav_test;

use crate::consts::STICKY_SCROLL_OFFSET_PX;

/// Whether the nav should be in sticky mode at `scroll_y`. No hysteresis.
#[must_use]
pub fn is_sticky(scroll_y: f64) -> bool {
    scroll_y > STICKY_SCROLL_OFFSET_PX
}
