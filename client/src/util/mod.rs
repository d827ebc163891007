//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate formatting and routing conventions from page and
//! component logic to improve reuse and testability.

pub mod paths;
pub mod relative_time;
