//! Receipt commands

use clap::{Args, Subcommand};
use serde_json::Value;

use super::{service_error, Context, NodeUrlArg};
use crate::config::Config;
use crate::error::ValidationError;
use crate::services::{Receipt, ReceiptService};
use crate::validation::fields::{self, Delimiter, IdentifierKind};
use crate::validation::Schema;
use crate::CliError;

/// Receipt subcommands
#[derive(Debug, Subcommand)]
pub enum ReceiptCommand {
    /// Get receipts of transactions
    Get(GetArgs),
}

impl ReceiptCommand {
    pub async fn execute(self, ctx: &Context<'_>) -> Result<Value, CliError> {
        match self {
            ReceiptCommand::Get(args) => {
                let (ids, node_url) = args.validate(ctx.config)?;
                let client = ctx.client(&node_url);
                Receipt::new(&client).get(&ids).await.map_err(service_error)
            }
        }
    }
}

#[derive(Debug, Args)]
pub struct GetArgs {
    /// Comma-separated transaction identifiers
    #[arg(long)]
    pub ids: String,
    #[command(flatten)]
    pub node: NodeUrlArg,
}

impl GetArgs {
    fn validate(&self, config: &Config) -> Result<(Vec<String>, String), ValidationError> {
        let mut schema = Schema::new();
        let ids = schema.required(
            "ids",
            fields::identifiers(IdentifierKind::Transaction, Delimiter::Comma, &self.ids),
        );
        let node_url = self.node.validate(&mut schema, config);
        schema.finish(|| Some((ids?, node_url?)))
    }
}
