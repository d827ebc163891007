//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`auth`, `composer`, `query`, `toast`) so
//! components depend on small focused models. Each model is plain data with
//! a thin signal-backed service on top where the page needs one.

pub mod auth;
pub mod composer;
pub mod query;
pub mod toast;
