//! Post composer draft and submission rules.
//!
//! DESIGN
//! ======
//! `ComposerState` owns the draft and the in-flight flag. Submission entry
//! points return the request to send (if any) and `finish` returns the single
//! side effect the view must apply, keeping the wizard component a thin
//! adapter over these rules.

#[cfg(test)]
#[path = "composer_test.rs"]
mod composer_test;

use crate::net::trpc::ApiError;
use crate::net::types::{CreatePostInput, Post};

/// Shown when a failed create carries no usable message.
pub const CREATE_FALLBACK_MESSAGE: &str = "🫠 Failed to post! Please try again later.";

/// Validated input field whose messages are surfaced to the author.
const CONTENT_FIELD: &str = "content";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ComposerState {
    pub draft: String,
    pub posting: bool,
}

/// Follow-up the view applies once a create request settles.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ComposerEffect {
    /// The post was stored: the feed must be re-fetched.
    InvalidateFeed,
    /// The post was rejected: show this message.
    Notify(String),
}

impl ComposerState {
    pub fn set_draft(&mut self, value: String) {
        self.draft = value;
    }

    /// The submit button is only offered for a non-empty draft with nothing
    /// in flight.
    pub fn can_submit(&self) -> bool {
        !self.draft.is_empty() && !self.posting
    }

    /// Claim a submission of the current draft.
    pub fn begin_submit(&mut self) -> Option<CreatePostInput> {
        if !self.can_submit() {
            return None;
        }
        self.posting = true;
        Some(CreatePostInput { content: self.draft.clone() })
    }

    /// Keyboard entry point: only Enter submits.
    pub fn on_key(&mut self, key: &str) -> Option<CreatePostInput> {
        if key == "Enter" { self.begin_submit() } else { None }
    }

    pub fn finish(&mut self, result: &Result<Post, ApiError>) -> ComposerEffect {
        self.posting = false;
        match result {
            Ok(_) => {
                self.draft.clear();
                ComposerEffect::InvalidateFeed
            }
            Err(err) => ComposerEffect::Notify(create_error_message(err)),
        }
    }
}

/// Pick the toast text for a failed create: the first `content` validation
/// message, else the server message, else the fallback.
pub fn create_error_message(err: &ApiError) -> String {
    if let Some(first) = err.field_errors(CONTENT_FIELD).first().filter(|m| !m.is_empty()) {
        return first.clone();
    }
    if let Some(message) = err.server_message() {
        return message.to_owned();
    }
    CREATE_FALLBACK_MESSAGE.to_owned()
}
