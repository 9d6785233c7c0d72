//! ethrpc CLI — EIP-155 signature markers and JSON-RPC node queries.
//!
//! # Commands
//! ```text
//! ethrpc chains
//! ethrpc to-v        <RECOVERY_ID> [--chain-id <N> | --chain <SLUG>]
//! ethrpc recovery-id <V>           [--chain-id <N> | --chain <SLUG>]
//! ethrpc is-legacy   <V>
//! ethrpc call        --url <URL> --method <NAME> [--params <JSON_ARRAY>]
//! ethrpc chain-id    --url <URL>
//! ```

use anyhow::{anyhow, bail, Context, Result};
use clap::{Args, Parser, Subcommand};
use serde_json::Value;

use ethrpc_core::chain::{self, ChainId};
use ethrpc_core::{signature, Client};
use ethrpc_http::{HttpPoolConfig, HttpTransport};

mod tracing_setup;

use tracing_setup::{init_tracing, LogConfig};

#[derive(Parser)]
#[command(
    name = "ethrpc",
    about = "Encode and decode EIP-155 signature markers, query JSON-RPC nodes",
    long_about = "
ethrpc: EIP-155 recovery-id codec and a small JSON-RPC client.

ENVIRONMENT VARIABLES:
  HTTP_MAX_CONNECTIONS             Max in-flight requests (default 10)
  HTTP_MAX_CONNECTIONS_PER_ORIGIN  Idle connections kept per origin (default 5)
  HTTP_POOL_TIMEOUT                Seconds to wait for a free connection (default 10)
  HTTP_KEEPALIVE_TIMEOUT           Keep-alive seconds; empty means 300
  RUST_LOG                         Log filter, overrides --log-level
",
    version
)]
struct Cli {
    /// Log filter directive
    #[arg(long, global = true, default_value = "warn")]
    log_level: String,

    /// Emit logs as JSON
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct ChainArg {
    /// Numeric EIP-155 chain id (default: 1, Ethereum mainnet)
    #[arg(long, conflicts_with = "chain")]
    chain_id: Option<ChainId>,

    /// Named chain, e.g. `classic` or `private-geth`
    #[arg(long)]
    chain: Option<String>,
}

impl ChainArg {
    fn resolve(&self) -> Result<Option<ChainId>> {
        match (&self.chain_id, &self.chain) {
            (Some(id), _) => Ok(Some(*id)),
            (None, Some(slug)) => chain::by_name(slug)
                .map(Some)
                .ok_or_else(|| anyhow!("unknown chain {slug:?}; run `ethrpc chains` for the list")),
            (None, None) => Ok(None),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// List the named chain ids
    Chains,

    /// Encode a recovery id as an EIP-155 `v`
    #[command(name = "to-v")]
    ToV {
        /// Recovery id, 0 or 1
        recovery_id: u8,
        #[command(flatten)]
        chain: ChainArg,
    },

    /// Decode a `v` marker into a recovery id
    #[command(name = "recovery-id")]
    RecoveryId {
        /// Signature marker
        #[arg(allow_hyphen_values = true)]
        v: i64,
        #[command(flatten)]
        chain: ChainArg,
    },

    /// Check whether `v` is a legacy (27/28) marker
    #[command(name = "is-legacy")]
    IsLegacy {
        #[arg(allow_hyphen_values = true)]
        v: i64,
    },

    /// Send a JSON-RPC call and print the result
    Call {
        /// HTTP/S endpoint, may include user:password@
        #[arg(long)]
        url: String,
        /// RPC method name
        #[arg(long)]
        method: String,
        /// Positional params as a JSON array
        #[arg(long, default_value = "[]")]
        params: String,
    },

    /// Ask a node for its chain id
    #[command(name = "chain-id")]
    ChainId {
        #[arg(long)]
        url: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&LogConfig {
        level: cli.log_level.clone(),
        json: cli.log_json,
    });

    match cli.command {
        Commands::Chains => cmd_chains(),
        Commands::ToV { recovery_id, chain } => cmd_to_v(recovery_id, chain.resolve()?),
        Commands::RecoveryId { v, chain } => cmd_recovery_id(v, chain.resolve()?),
        Commands::IsLegacy { v } => {
            println!("{}", signature::is_legacy(v));
            Ok(())
        }
        Commands::Call {
            url,
            method,
            params,
        } => cmd_call(&url, &method, &params).await,
        Commands::ChainId { url } => cmd_chain_id(&url).await,
    }
}

fn cmd_chains() -> Result<()> {
    for (slug, id) in chain::KNOWN_CHAINS {
        println!("{id:>8}  {slug}");
    }
    Ok(())
}

fn cmd_to_v(recovery_id: u8, chain_id: Option<ChainId>) -> Result<()> {
    let v = signature::to_v(recovery_id, chain_id)?;
    println!("{v}");
    Ok(())
}

fn cmd_recovery_id(v: i64, chain_id: Option<ChainId>) -> Result<()> {
    let recovery_id = signature::to_recovery_id(v, chain_id)?;
    println!("{recovery_id}");
    Ok(())
}

fn connect(url: &str) -> Result<Client<HttpTransport>> {
    let config = HttpPoolConfig::from_env().context("reading HTTP pool settings")?;
    let transport = HttpTransport::new(url, config).context("creating HTTP transport")?;
    tracing::debug!(uri = %transport.uri(), config = ?transport.config(), "using endpoint");
    Ok(Client::new(transport))
}

async fn cmd_call(url: &str, method: &str, params: &str) -> Result<()> {
    let params: Value = serde_json::from_str(params).context("--params is not valid JSON")?;
    let Value::Array(params) = params else {
        bail!("--params must be a JSON array");
    };

    let client = connect(url)?;
    let result: Value = client
        .call(method, params)
        .await
        .with_context(|| format!("{method} failed"))?;
    println!("{}", serde_json::to_string_pretty(&result)?);
    Ok(())
}

async fn cmd_chain_id(url: &str) -> Result<()> {
    let client = connect(url)?;
    let chain_id = client.chain_id().await.context("eth_chainId failed")?;
    match chain::name_of(chain_id) {
        Some(slug) => println!("{chain_id} ({slug})"),
        None => println!("{chain_id}"),
    }
    Ok(())
}
