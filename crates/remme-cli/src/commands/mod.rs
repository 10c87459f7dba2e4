//! Command dispatch
//!
//! Every command runs the same pipeline: validate its arguments, build a
//! client for the requested node, make one adapter call, format the payload.

use clap::{Args, Subcommand};
use remme_sdk::{Account as SigningAccount, NodeAddress, RemmeClient};
use serde_json::Value;

use crate::config::Config;
use crate::credentials::NodeKeySource;
use crate::output::Output;
use crate::validation::{fields, Schema};
use crate::CliError;

pub mod account;
pub mod atomic_swap;
pub mod batch;
pub mod block;
pub mod masternode;
pub mod node;
pub mod node_account;
pub mod public_key;
pub mod receipt;
pub mod state;
pub mod transaction;

/// Resource commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Token accounts
    #[command(subcommand)]
    Account(account::AccountCommand),
    /// Batches
    #[command(subcommand)]
    Batch(batch::BatchCommand),
    /// Blocks
    #[command(subcommand)]
    Block(block::BlockCommand),
    /// Transactions
    #[command(subcommand)]
    Transaction(transaction::TransactionCommand),
    /// Transaction receipts
    #[command(subcommand)]
    Receipt(receipt::ReceiptCommand),
    /// Global state
    #[command(subcommand)]
    State(state::StateCommand),
    /// Node information
    #[command(subcommand)]
    Node(node::NodeCommand),
    /// Node accounts
    #[command(subcommand)]
    NodeAccount(node_account::NodeAccountCommand),
    /// Public key registry
    #[command(subcommand)]
    PublicKey(public_key::PublicKeyCommand),
    /// Atomic swaps
    #[command(subcommand)]
    AtomicSwap(atomic_swap::AtomicSwapCommand),
    /// Masternode management
    #[command(subcommand)]
    Masternode(masternode::MasternodeCommand),
}

impl Commands {
    /// Run the command, producing the `result` payload
    pub async fn execute(self, ctx: &Context<'_>) -> Result<Value, CliError> {
        match self {
            Commands::Account(cmd) => cmd.execute(ctx).await,
            Commands::Batch(cmd) => cmd.execute(ctx).await,
            Commands::Block(cmd) => cmd.execute(ctx).await,
            Commands::Transaction(cmd) => cmd.execute(ctx).await,
            Commands::Receipt(cmd) => cmd.execute(ctx).await,
            Commands::State(cmd) => cmd.execute(ctx).await,
            Commands::Node(cmd) => cmd.execute(ctx).await,
            Commands::NodeAccount(cmd) => cmd.execute(ctx).await,
            Commands::PublicKey(cmd) => cmd.execute(ctx).await,
            Commands::AtomicSwap(cmd) => cmd.execute(ctx).await,
            Commands::Masternode(cmd) => cmd.execute(ctx).await,
        }
    }

    /// Run the command and format its output
    pub async fn run(self, ctx: &Context<'_>) -> Output {
        Output::from_outcome(self.execute(ctx).await)
    }
}

/// Builds node clients
pub trait Connector: Send + Sync {
    /// Client for the node at `address`
    fn connect(&self, address: &NodeAddress) -> RemmeClient;
}

/// Connects over HTTP JSON-RPC
#[derive(Debug, Clone, Copy, Default)]
pub struct HttpConnector;

impl Connector for HttpConnector {
    fn connect(&self, address: &NodeAddress) -> RemmeClient {
        RemmeClient::connect(address)
    }
}

/// Everything a command needs besides its arguments
pub struct Context<'a> {
    /// User configuration
    pub config: &'a Config,
    /// Node client factory
    pub connector: &'a dyn Connector,
    /// Node operator's key, for masternode commands
    pub node_keys: &'a dyn NodeKeySource,
}

impl Context<'_> {
    /// Fresh client for the node at `host`
    pub fn client(&self, host: &str) -> RemmeClient {
        self.connector.connect(&NodeAddress::new(host))
    }

    /// The node operator's signing account
    pub fn node_account(&self) -> Result<SigningAccount, CliError> {
        self.node_keys.node_account()
    }
}

/// `--node-url` option shared by every command
#[derive(Debug, Clone, Default, Args)]
pub struct NodeUrlArg {
    /// Node URL without protocol, e.g. `node-genesis-testnet.remme.io`
    #[arg(long)]
    pub node_url: Option<String>,
}

impl NodeUrlArg {
    /// Validate the node URL, falling back to the configured default
    pub fn validate(&self, schema: &mut Schema, config: &Config) -> Option<String> {
        let raw = self
            .node_url
            .as_deref()
            .unwrap_or_else(|| config.default_node_url());
        schema.required("node_url", fields::node_url(raw))
    }
}

/// Accept any integer literal; range checks belong to the schema
pub(crate) fn integer_literal(raw: &str) -> Result<String, String> {
    let digits = raw.strip_prefix('-').unwrap_or(raw);
    if !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()) {
        Ok(raw.to_string())
    } else {
        Err(format!("`{}` is not an integer", raw))
    }
}

/// Service failure as a command error
pub(crate) fn service_error(message: String) -> CliError {
    CliError::Service(message)
}
