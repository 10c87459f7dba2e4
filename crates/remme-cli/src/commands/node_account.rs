//! Node account commands

use clap::{Args, Subcommand};
use serde_json::{json, Value};

use super::{integer_literal, service_error, Context, NodeUrlArg};
use crate::config::Config;
use crate::error::ValidationError;
use crate::services::{NodeAccount, NodeAccountService};
use crate::validation::{fields, Schema};
use crate::CliError;

/// Node account subcommands
#[derive(Debug, Subcommand)]
pub enum NodeAccountCommand {
    /// Get a node account
    Get(GetArgs),
    /// Move tokens of the node account from frozen to unfrozen
    TransferTokensFromFrozenToUnfrozen(AmountArgs),
}

impl NodeAccountCommand {
    pub async fn execute(self, ctx: &Context<'_>) -> Result<Value, CliError> {
        match self {
            NodeAccountCommand::Get(args) => {
                let (address, node_url) = args.validate(ctx.config)?;
                let client = ctx.client(&node_url);
                NodeAccount::new(&client)
                    .get(&address)
                    .await
                    .map_err(service_error)
            }
            NodeAccountCommand::TransferTokensFromFrozenToUnfrozen(args) => {
                let (amount, node_url) = args.validate(ctx.config)?;
                let signer = ctx.node_account()?;
                let client = ctx.client(&node_url);
                let batch_identifier = NodeAccount::new(&client)
                    .transfer_tokens_from_frozen_to_unfrozen(&signer, amount)
                    .await
                    .map_err(service_error)?;
                Ok(json!({ "batch_identifier": batch_identifier }))
            }
        }
    }
}

#[derive(Debug, Args)]
pub struct GetArgs {
    /// Node account address
    #[arg(long)]
    pub address: String,
    #[command(flatten)]
    pub node: NodeUrlArg,
}

impl GetArgs {
    fn validate(&self, config: &Config) -> Result<(String, String), ValidationError> {
        let mut schema = Schema::new();
        let address = schema.required("address", fields::address(&self.address));
        let node_url = self.node.validate(&mut schema, config);
        schema.finish(|| Some((address?, node_url?)))
    }
}

/// Options of commands that move a number of tokens
#[derive(Debug, Args)]
pub struct AmountArgs {
    /// Number of tokens
    #[arg(long, allow_negative_numbers = true, value_parser = integer_literal)]
    pub amount: String,
    #[command(flatten)]
    pub node: NodeUrlArg,
}

impl AmountArgs {
    pub(crate) fn validate(&self, config: &Config) -> Result<(u64, String), ValidationError> {
        let mut schema = Schema::new();
        let amount = schema.required("amount", fields::amount(&self.amount));
        let node_url = self.node.validate(&mut schema, config);
        schema.finish(|| Some((amount?, node_url?)))
    }
}
