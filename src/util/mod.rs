//! Text helpers shared by the behaviors.
//!
//! SYSTEM CONTEXT
//! ==============
//! String parsing and URL building are kept free of web-sys so they can be
//! tested natively and reused by both the typewriter and contact features.

pub mod links;
pub mod phrases;
