//! The `RpcTransport` trait — how a request reaches a node.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::TransportError;
use crate::request::{JsonRpcRequest, JsonRpcResponse};

/// Moves a JSON-RPC payload to a node and hands back the raw response body.
///
/// Implementations own connection reuse, TLS and authentication, and must
/// surface non-success HTTP statuses as [`TransportError::Http`]. They must
/// be `Send + Sync`; the trait is object-safe and can be stored as
/// `Arc<dyn RpcTransport>`.
#[async_trait]
pub trait RpcTransport: Send + Sync + 'static {
    /// Send `payload` and return the response body unparsed.
    async fn send_request(&self, payload: &JsonRpcRequest) -> Result<String, TransportError>;

    /// Send `payload` and parse the body as a JSON-RPC response.
    async fn send(&self, payload: &JsonRpcRequest) -> Result<JsonRpcResponse, TransportError> {
        let body = self.send_request(payload).await?;
        JsonRpcResponse::from_body(&body)
    }

    /// Endpoint identifier, safe to log (no credentials).
    fn url(&self) -> &str;
}

#[async_trait]
impl<T: RpcTransport + ?Sized> RpcTransport for Arc<T> {
    async fn send_request(&self, payload: &JsonRpcRequest) -> Result<String, TransportError> {
        (**self).send_request(payload).await
    }

    fn url(&self) -> &str {
        (**self).url()
    }
}
