//! ethrpc-http — pooled HTTP/S transport for ethrpc.
//!
//! ```rust,no_run
//! use ethrpc_core::Client;
//! use ethrpc_http::{HttpPoolConfig, HttpTransport};
//!
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! let transport = HttpTransport::new("http://127.0.0.1:8545", HttpPoolConfig::default())?;
//! let client = Client::new(transport);
//! let block = client.block_number().await?;
//! # Ok(()) }
//! ```

pub mod client;
pub mod config;

pub use client::HttpTransport;
pub use config::HttpPoolConfig;
