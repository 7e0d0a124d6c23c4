//! HTTP client for the jrpc envelope endpoint

use crate::{
    config::ClientConfig,
    error::{Result, RpcError},
};
use jrpc_protocol::{Addition, BinaryArgs, CallRequest, CallResponse, Division, Operation, Uppercase};
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, warn};

/// Client for invoking remote operations through the shared envelope.
///
/// Holds no state across calls beyond the underlying connection pool, so a
/// single client may be cloned and used from concurrent tasks; each call is
/// one independent request/response exchange.
#[derive(Debug, Clone)]
pub struct RpcClient {
    client: Client,
    endpoint: String,
}

impl RpcClient {
    /// Create a client against the default local endpoint
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a client against a custom endpoint URL
    pub fn with_endpoint(endpoint: impl Into<String>) -> Result<Self> {
        let config = ClientConfig::builder().endpoint(endpoint).build();
        Self::with_config(config)
    }

    /// Create a client with custom configuration
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let mut builder = Client::builder().pool_max_idle_per_host(config.max_idle_per_host);
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(RpcError::Transport)?;

        Ok(Self {
            client,
            endpoint: config.endpoint,
        })
    }

    /// The endpoint URL this client posts to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Invoke a remote operation by name with a raw JSON argument.
    ///
    /// Returns the envelope's `result` value unchanged; no shape checking is
    /// applied at this layer. A truthy `error` field becomes
    /// [`RpcError::Remote`] carrying the server's message as-is.
    pub async fn invoke(&self, name: &str, arg: impl Into<Value>) -> Result<Value> {
        let request = CallRequest::new(name, arg);
        debug!("Invoking remote operation: {}", request.name);

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            warn!("Endpoint returned HTTP {}: {}", status, message);
            return Err(RpcError::Http {
                status: status.as_u16(),
                message,
            });
        }

        let envelope: CallResponse = response.json().await.map_err(|e| {
            warn!("Failed to parse response envelope: {}", e);
            RpcError::InvalidResponse(e.to_string())
        })?;

        envelope.into_result().map_err(RpcError::Remote)
    }

    /// Invoke a declared operation and validate the result against its
    /// declared output shape.
    ///
    /// A result that does not deserialize into `O::Output` surfaces as
    /// [`RpcError::SchemaMismatch`], never as a server-reported error.
    pub async fn call<O: Operation>(&self, args: O::Args) -> Result<O::Output> {
        let arg = serde_json::to_value(args)?;
        let result = self.invoke(O::NAME, arg).await?;
        serde_json::from_value(result).map_err(|e| RpcError::SchemaMismatch {
            operation: O::NAME,
            detail: e.to_string(),
        })
    }

    // ===== Declared operations =====

    /// Adds two numbers
    pub async fn addition(&self, a: f64, b: f64) -> Result<f64> {
        self.call::<Addition>(BinaryArgs { a, b }).await
    }

    /// Converts a string to uppercase
    pub async fn uppercase(&self, s: impl Into<String>) -> Result<String> {
        self.call::<Uppercase>(s.into()).await
    }

    /// Divides two numbers; the endpoint reports an error when `b` is zero
    pub async fn division(&self, a: f64, b: f64) -> Result<f64> {
        self.call::<Division>(BinaryArgs { a, b }).await
    }
}

impl Default for RpcClient {
    fn default() -> Self {
        Self::new().expect("Failed to create default jrpc client")
    }
}
