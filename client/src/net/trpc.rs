//! tRPC-over-HTTP envelope encoding and decoding.
//!
//! DESIGN
//! ======
//! The posts API speaks tRPC with the superjson transformer: inputs travel as
//! `{"json": input}`, successes as `{"result":{"data":{"json": output}}}` and
//! failures as `{"error":{"json": shape}}`. Everything here is transport
//! agnostic so the browser client and tests share one decoder.

#[cfg(test)]
#[path = "trpc_test.rs"]
mod trpc_test;

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// Superjson payload wrapper. The `meta` side-channel is ignored: dates are
/// read straight from their ISO strings.
#[derive(Debug, Deserialize)]
pub struct Superjson<T> {
    pub json: T,
}

#[derive(Debug, Deserialize)]
struct ResultBody<T> {
    data: Superjson<T>,
}

#[derive(Debug, Deserialize)]
enum Envelope<T> {
    #[serde(rename = "result")]
    Success(ResultBody<T>),
    #[serde(rename = "error")]
    Failure(Superjson<TrpcError>),
}

/// Error shape produced by the tRPC server's error formatter.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct TrpcError {
    pub message: String,
    /// JSON-RPC style numeric code (e.g. `-32600` for `BAD_REQUEST`).
    pub code: i64,
    pub data: Option<TrpcErrorData>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TrpcErrorData {
    pub code: Option<String>,
    pub http_status: Option<u16>,
    pub path: Option<String>,
    /// Flattened input-validation failure, present for `BAD_REQUEST`s raised
    /// by the input parser.
    pub zod_error: Option<ValidationErrors>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ValidationErrors {
    pub form_errors: Vec<String>,
    pub field_errors: HashMap<String, Vec<String>>,
}

/// Failure of a procedure call.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a decodable tRPC envelope.
    #[error("request failed: {0}")]
    Transport(String),
    /// The server answered with a tRPC error envelope.
    #[error("server error: {}", .0.message)]
    Server(TrpcError),
}

impl ApiError {
    /// Validation messages attached to `field`, in server order.
    pub fn field_errors(&self, field: &str) -> &[String] {
        match self {
            Self::Server(err) => err
                .data
                .as_ref()
                .and_then(|data| data.zod_error.as_ref())
                .and_then(|zod| zod.field_errors.get(field))
                .map(Vec::as_slice)
                .unwrap_or_default(),
            Self::Transport(_) => &[],
        }
    }

    /// The server-provided message, if any and non-empty.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Server(err) if !err.message.is_empty() => Some(err.message.as_str()),
            _ => None,
        }
    }
}

/// Join an API base path and a dotted procedure path.
pub fn procedure_url(base: &str, procedure: &str) -> String {
    format!("{}/{procedure}", base.trim_end_matches('/'))
}

/// Wrap a mutation input in the superjson envelope.
pub fn encode_input<T: Serialize>(input: &T) -> serde_json::Value {
    serde_json::json!({ "json": input })
}

/// Decode a response body into the procedure output.
///
/// # Errors
///
/// Returns [`ApiError::Server`] for error envelopes and
/// [`ApiError::Transport`] when the body is not a tRPC envelope of the
/// expected shape.
pub fn decode_response<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    let envelope: Envelope<T> =
        serde_json::from_str(body).map_err(|e| ApiError::Transport(format!("invalid response body: {e}")))?;
    match envelope {
        Envelope::Success(result) => Ok(result.data.json),
        Envelope::Failure(error) => Err(ApiError::Server(error.json)),
    }
}

/// Decode a response body, falling back to an HTTP status error when the body
/// is not a tRPC envelope (e.g. a proxy error page).
///
/// # Errors
///
/// See [`decode_response`].
pub fn decode_http_response<T: DeserializeOwned>(status: u16, body: &str) -> Result<T, ApiError> {
    match decode_response(body) {
        Err(ApiError::Transport(_)) if !(200..300).contains(&status) => {
            Err(ApiError::Transport(format!("unexpected HTTP status {status}")))
        }
        other => other,
    }
}
