//! Browser installers, one per page feature.
//!
//! Each installer takes the elements it needs (already looked up by
//! [`crate::controller`]), wires listeners around a pure core from
//! [`crate::state`] or [`crate::contact`], and returns the cleanup handles.
//! An installer never looks for its own elements, so a missing element is a
//! decision the controller makes once and logs.

pub mod contact_form;
pub mod legacy_menu;
pub mod marquee;
pub mod mobile_nav;
pub mod parallax;
pub mod preloader;
pub mod reveal;
pub mod sticky_nav;
pub mod typewriter;
pub mod year;
