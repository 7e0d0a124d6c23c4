//! Client library for a JSON-RPC-style envelope endpoint
//!
//! Every call is a single HTTP POST carrying a `{name, arg}` JSON body; the
//! response is a `{result, error}` envelope. A truthy `error` is surfaced as
//! [`RpcError::Remote`] with the server's message verbatim; everything else
//! unwraps to the raw `result`.
//!
//! Two layers are exposed:
//! - [`RpcClient::invoke`] - dynamic, takes any operation name and JSON
//!   argument, returns the raw result value.
//! - [`RpcClient::call`] - typed, keyed by an [`Operation`] definition and
//!   validated against its declared result shape.

mod client;
mod config;
mod error;

pub use client::RpcClient;
pub use config::{ClientConfig, ClientConfigBuilder};
pub use error::{Result, RpcError};

pub use jrpc_protocol::{
    Addition, BinaryArgs, CallRequest, CallResponse, Division, Operation, Uppercase,
    DEFAULT_ENDPOINT,
};
