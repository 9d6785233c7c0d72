//! ethrpc-core — signature codec, chain registry and JSON-RPC plumbing.
//!
//! # Overview
//!
//! - [`signature`] — EIP-155 recovery-id codec: [`is_legacy`], [`to_v`],
//!   [`to_recovery_id`]
//! - [`chain`] — named chain-id constants ([`chain::ETHEREUM`], …)
//! - [`api`] — the registry of known RPC method names
//! - [`RpcTransport`] — the trait every transport implements
//! - [`Client`] — method-name validation and result decoding over a transport
//! - [`SignatureError`] / [`TransportError`] / [`ClientError`] — error types
//!
//! The codec and registry are pure and need no runtime; only [`Client`]
//! touches the network, and only through its transport.

pub mod api;
pub mod chain;
pub mod client;
pub mod error;
pub mod request;
pub mod signature;
pub mod transport;

pub use chain::ChainId;
pub use client::Client;
pub use error::{ClientError, SignatureError, TransportError};
pub use request::{JsonRpcError, JsonRpcRequest, JsonRpcResponse, RpcId};
pub use signature::{is_legacy, to_recovery_id, to_v, RecoveryId};
pub use transport::RpcTransport;
