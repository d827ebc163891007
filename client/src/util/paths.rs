//! Link targets and labels for users and posts.
//!
//! A missing username renders as an empty name segment (`@`, `/@`) rather
//! than being rejected; author records are displayed as received.

#[cfg(test)]
#[path = "paths_test.rs"]
mod paths_test;

/// Public handle, e.g. `@ferris`.
pub fn handle(username: Option<&str>) -> String {
    format!("@{}", username.unwrap_or_default())
}

/// Author profile route: `/@{username}`.
pub fn profile_path(username: Option<&str>) -> String {
    format!("/{}", handle(username))
}

/// Post permalink route: `/post/{id}`.
pub fn post_path(id: &str) -> String {
    format!("/post/{id}")
}

/// Alt text for an author avatar.
pub fn avatar_alt(username: Option<&str>) -> String {
    format!("{}'s profile picture", handle(username))
}
