//! Block commands

use clap::{Args, Subcommand};
use remme_sdk::ListQuery;
use serde_json::Value;

use super::{integer_literal, service_error, Context, NodeUrlArg};
use crate::config::Config;
use crate::error::ValidationError;
use crate::services::{Block, BlockService};
use crate::validation::fields::{self, Delimiter, IdentifierKind};
use crate::validation::Schema;
use crate::CliError;

/// Block subcommands
#[derive(Debug, Subcommand)]
pub enum BlockCommand {
    /// Get a block by its identifier
    Get(GetArgs),
    /// List blocks
    GetList(GetListArgs),
}

impl BlockCommand {
    pub async fn execute(self, ctx: &Context<'_>) -> Result<Value, CliError> {
        match self {
            BlockCommand::Get(args) => {
                let (id, node_url) = args.validate(ctx.config)?;
                let client = ctx.client(&node_url);
                Block::new(&client).get(&id).await.map_err(service_error)
            }
            BlockCommand::GetList(args) => {
                let (query, node_url) = args.validate(ctx.config)?;
                let client = ctx.client(&node_url);
                Block::new(&client)
                    .get_list(&query, args.ids_only)
                    .await
                    .map_err(service_error)
            }
        }
    }
}

#[derive(Debug, Args)]
pub struct GetArgs {
    /// Block identifier
    #[arg(long)]
    pub id: String,
    #[command(flatten)]
    pub node: NodeUrlArg,
}

impl GetArgs {
    fn validate(&self, config: &Config) -> Result<(String, String), ValidationError> {
        let mut schema = Schema::new();
        let id = schema.required("id", fields::identifier(IdentifierKind::Block, &self.id));
        let node_url = self.node.validate(&mut schema, config);
        schema.finish(|| Some((id?, node_url?)))
    }
}

#[derive(Debug, Args)]
pub struct GetListArgs {
    /// Whitespace-separated block identifiers
    #[arg(long)]
    pub ids: Option<String>,
    /// Maximum number of blocks
    #[arg(long, allow_negative_numbers = true, value_parser = integer_literal)]
    pub limit: Option<String>,
    /// Block identifier to list from instead of the chain head
    #[arg(long)]
    pub head: Option<String>,
    /// List oldest first
    #[arg(long)]
    pub reverse: bool,
    /// Print only block identifiers
    #[arg(long)]
    pub ids_only: bool,
    #[command(flatten)]
    pub node: NodeUrlArg,
}

impl GetListArgs {
    fn validate(&self, config: &Config) -> Result<(ListQuery, String), ValidationError> {
        let mut schema = Schema::new();
        let ids = schema.optional("ids", self.ids.as_deref(), |raw| {
            fields::identifiers(IdentifierKind::Block, Delimiter::Whitespace, raw)
        });
        let limit = schema.limit(self.limit.as_deref());
        let head = schema.optional("head", self.head.as_deref(), |raw| {
            fields::identifier(IdentifierKind::Block, raw)
        });
        let node_url = self.node.validate(&mut schema, config);
        schema.finish(|| {
            let query = ListQuery {
                ids: ids?,
                limit: limit?,
                head: head?,
                reverse: self.reverse,
                ..Default::default()
            };
            Some((query, node_url?))
        })
    }
}
