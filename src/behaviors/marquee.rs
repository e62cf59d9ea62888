//! Marquee: the scroll itself is pure CSS; only reduced motion needs code.

use web_sys::HtmlElement;

use crate::dom::ignore;

/// Stop the track animation when the visitor prefers reduced motion.
pub fn install(track: &HtmlElement, reduced_motion: bool) {
    if reduced_motion {
        ignore("marquee animation", track.style().set_property("animation", "none"));
    }
}
