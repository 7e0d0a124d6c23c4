//! Error types for the jrpc client

use thiserror::Error;

/// Errors that can occur when invoking a remote operation.
///
/// Transport failures and server-reported failures are distinct variants, so
/// callers never have to inspect message text to tell them apart.
#[derive(Debug, Error)]
pub enum RpcError {
    /// HTTP request failed (connection refused, timeout, body read failure)
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Endpoint returned a non-success status
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// Response body was not a valid `{result, error}` envelope
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Server-reported failure; the message is carried verbatim
    #[error("{0}")]
    Remote(String),

    /// Result did not match the operation's declared output shape
    #[error("Result for '{operation}' did not match its declared shape: {detail}")]
    SchemaMismatch {
        operation: &'static str,
        detail: String,
    },

    /// Argument could not be serialized to JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for jrpc client operations
pub type Result<T> = std::result::Result<T, RpcError>;
