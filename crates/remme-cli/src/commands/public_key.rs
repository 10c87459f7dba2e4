//! Public key commands

use clap::{Args, Subcommand};
use serde_json::{json, Value};

use super::{service_error, Context, NodeUrlArg};
use crate::config::Config;
use crate::error::ValidationError;
use crate::services::{PublicKey, PublicKeyService};
use crate::validation::{fields, Schema};
use crate::CliError;

/// Public key subcommands
#[derive(Debug, Subcommand)]
pub enum PublicKeyCommand {
    /// List the public key addresses registered by an account
    GetList(GetListArgs),
    /// Get information about a public key
    GetInfo(GetInfoArgs),
}

impl PublicKeyCommand {
    pub async fn execute(self, ctx: &Context<'_>) -> Result<Value, CliError> {
        match self {
            PublicKeyCommand::GetList(args) => {
                let (address, node_url) = args.validate(ctx.config)?;
                let client = ctx.client(&node_url);
                let addresses = PublicKey::new(&client)
                    .get_list(&address)
                    .await
                    .map_err(service_error)?;
                Ok(json!({ "addresses": addresses }))
            }
            PublicKeyCommand::GetInfo(args) => {
                let (public_key, node_url) = args.validate(ctx.config)?;
                let client = ctx.client(&node_url);
                PublicKey::new(&client)
                    .get_info(&public_key)
                    .await
                    .map_err(service_error)
            }
        }
    }
}

#[derive(Debug, Args)]
pub struct GetListArgs {
    /// Account address
    #[arg(long)]
    pub address: String,
    #[command(flatten)]
    pub node: NodeUrlArg,
}

impl GetListArgs {
    fn validate(&self, config: &Config) -> Result<(String, String), ValidationError> {
        let mut schema = Schema::new();
        let address = schema.required("address", fields::address(&self.address));
        let node_url = self.node.validate(&mut schema, config);
        schema.finish(|| Some((address?, node_url?)))
    }
}

#[derive(Debug, Args)]
pub struct GetInfoArgs {
    /// Public key in compressed hex form
    #[arg(long)]
    pub public_key: String,
    #[command(flatten)]
    pub node: NodeUrlArg,
}

impl GetInfoArgs {
    fn validate(&self, config: &Config) -> Result<(String, String), ValidationError> {
        let mut schema = Schema::new();
        let public_key = schema.required("public_key", fields::public_key(&self.public_key));
        let node_url = self.node.validate(&mut schema, config);
        schema.finish(|| Some((public_key?, node_url?)))
    }
}
