//! Networking for the contact backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the JSON wire schema; `api` performs the POST in the
//! browser and stubs it out elsewhere.

pub mod api;
pub mod types;
