//! Browser-independent cores for each page behavior.
//!
//! DESIGN
//! ======
//! Every module here is plain Rust: the decisions (when to reveal, when the
//! nav is sticky, where focus goes, how far a layer moves) live here and are
//! unit-tested natively. `behaviors` only translates DOM events into calls on
//! these types and writes the results back to the page.

pub mod legacy_menu;
pub mod mobile_nav;
pub mod parallax;
pub mod preloader;
pub mod reveal;
pub mod sticky_nav;
