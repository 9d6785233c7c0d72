//! Error types for the signature codec, transports and the dispatch client.

use thiserror::Error;

use crate::chain::ChainId;
use crate::request::JsonRpcError;
use crate::signature::RecoveryId;

/// Errors raised while converting between recovery ids and `v` markers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignatureError {
    /// Recovery id outside `{0, 1}`.
    #[error("invalid recovery id {recovery_id}: expected 0 or 1")]
    InvalidRecoveryId { recovery_id: RecoveryId },

    /// Chain id of zero, or too large for its markers to fit in an `i64`.
    #[error("invalid chain id {chain_id}: expected 1..={}", crate::signature::MAX_CHAIN_ID)]
    InvalidChainId { chain_id: ChainId },

    /// `v` is negative or falls in the dead zone `[2, 26] ∪ [29, 34]`.
    #[error("invalid signature marker v = {v}")]
    InvalidSignatureMarker { v: i64 },

    /// `v` is a well-formed EIP-155 marker, but for another chain.
    #[error("invalid v {v} for chain id {expected}: marker encodes chain id {candidate}")]
    ChainIdMismatch {
        v: i64,
        expected: ChainId,
        candidate: ChainId,
    },
}

impl SignatureError {
    /// Returns `true` for caller-side argument errors (bad recovery id or chain id).
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::InvalidRecoveryId { .. } | Self::InvalidChainId { .. }
        )
    }

    /// Returns `true` if the `v` value itself was rejected.
    pub fn is_invalid_signature_marker(&self) -> bool {
        matches!(
            self,
            Self::InvalidSignatureMarker { .. } | Self::ChainIdMismatch { .. }
        )
    }

    /// The rejected `v`, when the error is about a marker.
    pub fn v(&self) -> Option<i64> {
        match self {
            Self::InvalidSignatureMarker { v } | Self::ChainIdMismatch { v, .. } => Some(*v),
            _ => None,
        }
    }
}

/// Errors that can occur while moving a request over a transport.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The endpoint answered with a non-success HTTP status.
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// Connecting, sending or reading the response failed.
    #[error("connection error: {0}")]
    Connection(String),

    /// No pooled connection became available in time.
    #[error("timed out after {ms}ms waiting for a pooled connection")]
    PoolTimeout { ms: u64 },

    /// The endpoint URI could not be used.
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),

    /// A configuration value could not be parsed or is out of range.
    #[error("invalid configuration {key}={value}")]
    InvalidConfig { key: String, value: String },

    /// JSON-RPC error object returned by the node.
    #[error("RPC error {}: {}", .0.code, .0.message)]
    Rpc(JsonRpcError),

    /// Response could not be deserialized.
    #[error("deserialization error: {0}")]
    Deserialization(#[from] serde_json::Error),

    #[error("{0}")]
    Other(String),
}

impl TransportError {
    /// Returns `true` if this is a node-side execution error.
    pub fn is_execution_error(&self) -> bool {
        matches!(self, Self::Rpc(_))
    }

    /// HTTP status code, if the endpoint returned one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Errors surfaced by [`Client`](crate::client::Client).
#[derive(Debug, Error)]
pub enum ClientError {
    /// The method name is not part of the command registry.
    #[error("unknown RPC method: {0}")]
    UnknownMethod(String),

    /// A hex quantity in a response could not be decoded.
    #[error("invalid hex quantity: {0}")]
    InvalidQuantity(String),

    #[error(transparent)]
    Signature(#[from] SignatureError),

    #[error(transparent)]
    Transport(#[from] TransportError),
}
