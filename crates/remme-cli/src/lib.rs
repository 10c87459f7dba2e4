//! # remme-cli
//!
//! Command-line client for REMME nodes.
//!
//! ## Usage
//!
//! ```bash
//! # Accounts
//! remme account get-balance --address 1120...  --node-url node-genesis-testnet.remme.io
//! remme account transfer-tokens --private-key 1f1a... --address-to 1120... --amount 1000
//!
//! # Ledger
//! remme batch get-list --limit 10 --ids-only
//! remme receipt get --ids 7f2c...,98a1...
//!
//! # Node operator
//! remme masternode set-bet --bet max
//! ```
//!
//! Every command prints one JSON document, `{"result": ...}` on success or
//! `{"errors": ...}` on failure.

use clap::Parser;

pub mod commands;
pub mod config;
pub mod credentials;
pub mod error;
pub mod output;
pub mod services;
pub mod validation;

pub use commands::{Commands, Connector, Context, HttpConnector};
pub use config::Config;
pub use credentials::{NodeKeyFile, NodeKeySource};
pub use error::{CliError, ValidationError};
pub use output::Output;

/// REMME node CLI
#[derive(Parser, Debug)]
#[command(name = "remme")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Log filter used when `RUST_LOG` is unset
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Commands,
}
