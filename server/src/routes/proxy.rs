//! Forwarding of API and sign-in traffic to the upstream service.
//!
//! SYSTEM CONTEXT
//! ==============
//! The browser only talks to this host. Posts procedures (`/api/trpc/*`),
//! session lookups (`/api/auth/*`) and the sign-in page are relayed verbatim
//! to the configured upstream, minus hop-by-hop headers.
//!
//! ERROR HANDLING
//! ==============
//! Unreadable request bodies map to `400`; any upstream failure (connect,
//! timeout, truncated body) maps to `502` and is logged.

#[cfg(test)]
#[path = "proxy_test.rs"]
mod proxy_test;

use axum::body::Body;
use axum::extract::{Request, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::state::AppState;

/// Largest request body relayed upstream.
pub const MAX_FORWARD_BODY_BYTES: usize = 1024 * 1024;

/// Headers that describe a single connection and must not be relayed.
const HOP_BY_HOP: [&str; 10] = [
    "connection",
    "keep-alive",
    "proxy-authenticate",
    "proxy-authorization",
    "te",
    "trailer",
    "transfer-encoding",
    "upgrade",
    "host",
    "content-length",
];

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("request body unreadable: {0}")]
    Body(String),
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl ProxyError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Body(_) => StatusCode::BAD_REQUEST,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::warn!(error = %self, %status, "forward failed");
        (status, status.canonical_reason().unwrap_or("error")).into_response()
    }
}

pub fn is_hop_by_hop(name: &str) -> bool {
    HOP_BY_HOP.iter().any(|h| h.eq_ignore_ascii_case(name))
}

/// Copy of `headers` without hop-by-hop entries.
pub fn forwardable_headers(headers: &HeaderMap) -> HeaderMap {
    headers
        .iter()
        .filter(|(name, _)| !is_hop_by_hop(name.as_str()))
        .map(|(name, value)| (name.clone(), value.clone()))
        .collect()
}

/// Upstream URL for an incoming path (query string included).
pub fn upstream_url(upstream: &str, path_and_query: &str) -> String {
    format!("{}{path_and_query}", upstream.trim_end_matches('/'))
}

/// Relay the request to the upstream and stream back status, headers, body.
pub async fn forward(State(state): State<AppState>, req: Request) -> Result<Response, ProxyError> {
    let (parts, body) = req.into_parts();
    let path_and_query = parts.uri.path_and_query().map_or_else(|| parts.uri.path(), |pq| pq.as_str());
    let url = upstream_url(&state.config.upstream, path_and_query);

    let body = axum::body::to_bytes(body, MAX_FORWARD_BODY_BYTES)
        .await
        .map_err(|e| ProxyError::Body(e.to_string()))?;

    let upstream = state
        .http
        .request(parts.method.clone(), &url)
        .headers(forwardable_headers(&parts.headers))
        .body(body)
        .send()
        .await?;

    let status = upstream.status();
    let headers = forwardable_headers(upstream.headers());
    let bytes = upstream.bytes().await?;
    tracing::debug!(method = %parts.method, %url, %status, "forwarded");

    let mut response = Response::new(Body::from(bytes));
    *response.status_mut() = status;
    *response.headers_mut() = headers;
    Ok(response)
}
