//! HTTP helpers for the posts API and the identity endpoint.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Procedure calls return [`ApiError`] so the composer can pick a toast
//! message; identity lookups degrade to `None` (signed out) instead of failing.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::trpc::ApiError;
use super::types::{CreatePostInput, Post, User};

/// Base path of the tRPC endpoint, forwarded upstream by the host server.
pub const TRPC_BASE: &str = "/api/trpc";

/// Identity endpoint returning the signed-in [`User`].
pub const CURRENT_USER_ENDPOINT: &str = "/api/auth/me";

/// Identity-provider sign-in page.
pub const SIGN_IN_PATH: &str = "/sign-in";

/// Sign-in URL that returns the user to `return_to` afterwards.
pub fn sign_in_url(return_to: &str) -> String {
    format!("{SIGN_IN_PATH}?redirect_url={}", urlencoding::encode(return_to))
}

#[cfg(any(test, feature = "hydrate"))]
fn procedure_failed_message(procedure: &str, error: &str) -> String {
    format!("{procedure} request failed: {error}")
}

/// Run a query procedure (e.g. `posts.getAll`) and return its raw output for
/// the query cache.
///
/// # Errors
///
/// Returns [`ApiError`] when the request fails or the server answers with an
/// error envelope.
pub async fn query_procedure(procedure: &str) -> Result<serde_json::Value, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = super::trpc::procedure_url(TRPC_BASE, procedure);
        let resp = gloo_net::http::Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Transport(procedure_failed_message(procedure, &e.to_string())))?;
        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| ApiError::Transport(procedure_failed_message(procedure, &e.to_string())))?;
        super::trpc::decode_http_response(status, &body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = procedure;
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

/// `posts.create`: publish a post with the given content.
///
/// # Errors
///
/// Returns [`ApiError::Server`] for validation and server failures and
/// [`ApiError::Transport`] when the request itself fails.
pub async fn create_post(input: &CreatePostInput) -> Result<Post, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let url = super::trpc::procedure_url(TRPC_BASE, "posts.create");
        let payload = super::trpc::encode_input(input);
        let resp = gloo_net::http::Request::post(&url)
            .json(&payload)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(procedure_failed_message("posts.create", &e.to_string())))?;
        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| ApiError::Transport(procedure_failed_message("posts.create", &e.to_string())))?;
        super::trpc::decode_http_response(status, &body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = input;
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

/// Fetch the currently signed-in user from `/api/auth/me`.
/// Returns `None` if not signed in or on the server.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(CURRENT_USER_ENDPOINT)
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<User>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
