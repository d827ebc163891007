//! Networking modules for the posts API and identity service.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs browser HTTP calls, `trpc` owns the procedure envelope, and
//! `types` defines the shared wire schema.

pub mod api;
pub mod trpc;
pub mod types;
