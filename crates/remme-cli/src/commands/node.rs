//! Node commands

use clap::{Args, Subcommand};
use serde_json::{json, Value};

use super::{service_error, Context, NodeUrlArg};
use crate::config::Config;
use crate::error::ValidationError;
use crate::services::{Node, NodeService};
use crate::validation::Schema;
use crate::CliError;

/// Node subcommands
#[derive(Debug, Subcommand)]
pub enum NodeCommand {
    /// Get the node configuration
    GetConfigs(NodeArgs),
    /// Get the peers of the node
    GetPeers(NodeArgs),
    /// Get information about the node
    GetInfo(NodeArgs),
}

impl NodeCommand {
    pub async fn execute(self, ctx: &Context<'_>) -> Result<Value, CliError> {
        match self {
            NodeCommand::GetConfigs(args) => {
                let client = ctx.client(&args.validate(ctx.config)?);
                let configurations = Node::new(&client)
                    .get_configs()
                    .await
                    .map_err(service_error)?;
                Ok(json!({ "configurations": configurations }))
            }
            NodeCommand::GetPeers(args) => {
                let client = ctx.client(&args.validate(ctx.config)?);
                let peers = Node::new(&client).get_peers().await.map_err(service_error)?;
                Ok(json!({ "peers": peers }))
            }
            NodeCommand::GetInfo(args) => {
                let client = ctx.client(&args.validate(ctx.config)?);
                Node::new(&client).get_info().await.map_err(service_error)
            }
        }
    }
}

/// Options of commands that take nothing but the node
#[derive(Debug, Args)]
pub struct NodeArgs {
    #[command(flatten)]
    pub node: NodeUrlArg,
}

impl NodeArgs {
    pub(crate) fn validate(&self, config: &Config) -> Result<String, ValidationError> {
        let mut schema = Schema::new();
        let node_url = self.node.validate(&mut schema, config);
        schema.finish(|| node_url)
    }
}
