//! Batch commands

use clap::{Args, Subcommand};
use remme_sdk::ListQuery;
use serde_json::Value;

use super::{integer_literal, service_error, Context, NodeUrlArg};
use crate::config::Config;
use crate::error::ValidationError;
use crate::services::{Batch, BatchService};
use crate::validation::fields::{self, Delimiter, IdentifierKind};
use crate::validation::Schema;
use crate::CliError;

/// Batch subcommands
#[derive(Debug, Subcommand)]
pub enum BatchCommand {
    /// Get a batch by its identifier
    Get(BatchIdArgs),
    /// List batches
    GetList(GetListArgs),
    /// Get the processing status of a batch
    GetStatus(BatchIdArgs),
}

impl BatchCommand {
    pub async fn execute(self, ctx: &Context<'_>) -> Result<Value, CliError> {
        match self {
            BatchCommand::Get(args) => {
                let request = args.validate(ctx.config)?;
                let client = ctx.client(&request.node_url);
                Batch::new(&client)
                    .get(&request.id)
                    .await
                    .map_err(service_error)
            }
            BatchCommand::GetList(args) => {
                let request = args.validate(ctx.config)?;
                let client = ctx.client(&request.node_url);
                Batch::new(&client)
                    .get_list(&request.query, request.ids_only)
                    .await
                    .map_err(service_error)
            }
            BatchCommand::GetStatus(args) => {
                let request = args.validate(ctx.config)?;
                let client = ctx.client(&request.node_url);
                Batch::new(&client)
                    .get_status(&request.id)
                    .await
                    .map_err(service_error)
            }
        }
    }
}

#[derive(Debug, Args)]
pub struct BatchIdArgs {
    /// Batch identifier
    #[arg(long)]
    pub id: String,
    #[command(flatten)]
    pub node: NodeUrlArg,
}

struct BatchId {
    id: String,
    node_url: String,
}

impl BatchIdArgs {
    fn validate(&self, config: &Config) -> Result<BatchId, ValidationError> {
        let mut schema = Schema::new();
        let id = schema.required("id", fields::identifier(IdentifierKind::Batch, &self.id));
        let node_url = self.node.validate(&mut schema, config);
        schema.finish(|| {
            Some(BatchId {
                id: id?,
                node_url: node_url?,
            })
        })
    }
}

#[derive(Debug, Args)]
pub struct GetListArgs {
    /// Whitespace-separated batch identifiers
    #[arg(long)]
    pub ids: Option<String>,
    /// Batch identifier to start listing from
    #[arg(long)]
    pub start: Option<String>,
    /// Maximum number of batches
    #[arg(long, allow_negative_numbers = true, value_parser = integer_literal)]
    pub limit: Option<String>,
    /// Block identifier to list from instead of the chain head
    #[arg(long)]
    pub head: Option<String>,
    /// List oldest first
    #[arg(long)]
    pub reverse: bool,
    /// Print only batch identifiers
    #[arg(long)]
    pub ids_only: bool,
    #[command(flatten)]
    pub node: NodeUrlArg,
}

#[derive(Debug)]
struct GetList {
    query: ListQuery,
    ids_only: bool,
    node_url: String,
}

impl GetListArgs {
    fn validate(&self, config: &Config) -> Result<GetList, ValidationError> {
        let mut schema = Schema::new();
        let ids = schema.optional("ids", self.ids.as_deref(), |raw| {
            fields::identifiers(IdentifierKind::Batch, Delimiter::Whitespace, raw)
        });
        let start = schema.optional("start", self.start.as_deref(), |raw| {
            fields::identifier(IdentifierKind::Batch, raw)
        });
        let limit = schema.limit(self.limit.as_deref());
        let head = schema.optional("head", self.head.as_deref(), |raw| {
            fields::identifier(IdentifierKind::Block, raw)
        });
        let node_url = self.node.validate(&mut schema, config);
        schema.finish(|| {
            Some(GetList {
                query: ListQuery {
                    ids: ids?,
                    start: start?,
                    limit: limit?,
                    head: head?,
                    reverse: self.reverse,
                    ..Default::default()
                },
                ids_only: self.ids_only,
                node_url: node_url?,
            })
        })
    }
}
