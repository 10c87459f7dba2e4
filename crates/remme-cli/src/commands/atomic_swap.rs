//! Atomic swap commands

use clap::{Args, Subcommand};
use serde_json::{json, Value};

use super::node::NodeArgs;
use super::{service_error, Context, NodeUrlArg};
use crate::config::Config;
use crate::error::ValidationError;
use crate::services::{AtomicSwap, AtomicSwapService};
use crate::validation::{fields, Schema};
use crate::CliError;

/// Atomic swap subcommands
#[derive(Debug, Subcommand)]
pub enum AtomicSwapCommand {
    /// Get information about a swap
    GetInfo(GetInfoArgs),
    /// Get the public key used to encrypt swap secrets
    GetPublicKey(NodeArgs),
}

impl AtomicSwapCommand {
    pub async fn execute(self, ctx: &Context<'_>) -> Result<Value, CliError> {
        match self {
            AtomicSwapCommand::GetInfo(args) => {
                let (id, node_url) = args.validate(ctx.config)?;
                let client = ctx.client(&node_url);
                AtomicSwap::new(&client)
                    .get_info(&id)
                    .await
                    .map_err(service_error)
            }
            AtomicSwapCommand::GetPublicKey(args) => {
                let client = ctx.client(&args.validate(ctx.config)?);
                let public_key = AtomicSwap::new(&client)
                    .get_public_key()
                    .await
                    .map_err(service_error)?;
                Ok(json!({ "public_key": public_key }))
            }
        }
    }
}

#[derive(Debug, Args)]
pub struct GetInfoArgs {
    /// Swap identifier
    #[arg(long)]
    pub id: String,
    #[command(flatten)]
    pub node: NodeUrlArg,
}

impl GetInfoArgs {
    fn validate(&self, config: &Config) -> Result<(String, String), ValidationError> {
        let mut schema = Schema::new();
        let id = schema.required("id", fields::swap_id(&self.id));
        let node_url = self.node.validate(&mut schema, config);
        schema.finish(|| Some((id?, node_url?)))
    }
}
