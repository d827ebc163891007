//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the feed, the composer, and page chrome while reading
//! shared services (identity, query cache, toasts) from Leptos context.

pub mod create_post_wizard;
pub mod feed;
pub mod layout;
pub mod loading;
pub mod post_view;
pub mod sign_in_button;
pub mod toaster;
