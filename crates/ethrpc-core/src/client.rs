//! Dispatch layer: validates method names, numbers requests and decodes
//! results on top of any [`RpcTransport`].

use std::sync::atomic::{AtomicU64, Ordering};

use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::sync::OnceCell;

use crate::api;
use crate::chain::ChainId;
use crate::error::{ClientError, TransportError};
use crate::request::JsonRpcRequest;
use crate::signature::{self, RecoveryId};
use crate::transport::RpcTransport;

/// JSON-RPC client bound to one transport.
///
/// ```rust,no_run
/// # async fn demo<T: ethrpc_core::RpcTransport>(transport: T) -> Result<(), ethrpc_core::ClientError> {
/// use ethrpc_core::Client;
///
/// let client = Client::new(transport);
/// let chain_id = client.chain_id().await?;
/// let v = client.to_v(1).await?;
/// # Ok(()) }
/// ```
pub struct Client<T> {
    transport: T,
    next_id: AtomicU64,
    chain_id: OnceCell<ChainId>,
}

impl<T: RpcTransport> Client<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            next_id: AtomicU64::new(1),
            chain_id: OnceCell::new(),
        }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Call `method` with positional `params` and deserialize the result.
    ///
    /// Names outside [`api::COMMANDS`] are rejected before anything is sent.
    pub async fn call<R: DeserializeOwned>(
        &self,
        method: &str,
        params: Vec<Value>,
    ) -> Result<R, ClientError> {
        if !api::is_command(method) {
            return Err(ClientError::UnknownMethod(method.to_string()));
        }

        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let req = JsonRpcRequest::new(id, method, params);
        tracing::debug!(id, method, url = %self.transport.url(), "sending request");

        let resp = self.transport.send(&req).await?;
        let result = resp.into_result().map_err(TransportError::Rpc)?;
        serde_json::from_value(result)
            .map_err(|e| ClientError::Transport(TransportError::Deserialization(e)))
    }

    /// `eth_chainId`, fetched from the node on first use and cached.
    pub async fn chain_id(&self) -> Result<ChainId, ClientError> {
        self.chain_id
            .get_or_try_init(|| async {
                let hex: String = self.call("eth_chainId", vec![]).await?;
                parse_quantity(&hex)
            })
            .await
            .copied()
    }

    /// `eth_blockNumber`.
    pub async fn block_number(&self) -> Result<u64, ClientError> {
        let hex: String = self.call("eth_blockNumber", vec![]).await?;
        parse_quantity(&hex)
    }

    /// Decode `v` against the node's chain id.
    pub async fn to_recovery_id(&self, v: i64) -> Result<RecoveryId, ClientError> {
        let chain_id = self.chain_id().await?;
        Ok(signature::to_recovery_id(v, Some(chain_id))?)
    }

    /// Encode `recovery_id` for the node's chain id.
    pub async fn to_v(&self, recovery_id: RecoveryId) -> Result<i64, ClientError> {
        let chain_id = self.chain_id().await?;
        Ok(signature::to_v(recovery_id, Some(chain_id))?)
    }
}

/// Decode a `0x`-prefixed hex quantity.
pub fn parse_quantity(hex: &str) -> Result<u64, ClientError> {
    let digits = hex
        .strip_prefix("0x")
        .or_else(|| hex.strip_prefix("0X"))
        .ok_or_else(|| ClientError::InvalidQuantity(hex.to_string()))?;
    u64::from_str_radix(digits, 16).map_err(|_| ClientError::InvalidQuantity(hex.to_string()))
}
