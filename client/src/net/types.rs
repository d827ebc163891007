//! Shared wire DTOs for the posts API and identity service.
//!
//! DESIGN
//! ======
//! Field names follow the upstream JSON (camelCase) so serde round-trips stay
//! lossless. Unknown upstream fields (e.g. `authorId`) are ignored.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// A published post as returned by the posts API.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    /// Opaque post identifier.
    pub id: String,
    /// Post body, rendered verbatim.
    pub content: String,
    /// Server-side creation time (RFC 3339 on the wire).
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// Public author fields embedded in each feed record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Author {
    /// Handle without the leading `@`. Absent for accounts without one.
    #[serde(default)]
    pub username: Option<String>,
    pub profile_image_url: String,
}

/// One `posts.getAll` record: the unit rendered by `PostView`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PostWithAuthor {
    pub post: Post,
    pub author: Author,
}

/// Input of the `posts.create` mutation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreatePostInput {
    pub content: String,
}

/// The signed-in user as returned by `/api/auth/me`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Identity-provider user identifier.
    pub id: String,
    /// Handle without the leading `@`, if the user picked one.
    #[serde(default)]
    pub username: Option<String>,
    pub profile_image_url: String,
}
