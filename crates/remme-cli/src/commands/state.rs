//! State commands

use clap::{Args, Subcommand};
use remme_sdk::ListQuery;
use serde_json::Value;

use super::{integer_literal, service_error, Context, NodeUrlArg};
use crate::config::Config;
use crate::error::ValidationError;
use crate::services::{State, StateService};
use crate::validation::fields::{self, IdentifierKind};
use crate::validation::Schema;
use crate::CliError;

/// State subcommands
#[derive(Debug, Subcommand)]
pub enum StateCommand {
    /// Get the state entry at an address
    Get(GetArgs),
    /// List state entries
    GetList(GetListArgs),
}

impl StateCommand {
    pub async fn execute(self, ctx: &Context<'_>) -> Result<Value, CliError> {
        match self {
            StateCommand::Get(args) => {
                let (address, node_url) = args.validate(ctx.config)?;
                let client = ctx.client(&node_url);
                State::new(&client)
                    .get(&address)
                    .await
                    .map_err(service_error)
            }
            StateCommand::GetList(args) => {
                let (query, node_url) = args.validate(ctx.config)?;
                let client = ctx.client(&node_url);
                State::new(&client)
                    .get_list(&query)
                    .await
                    .map_err(service_error)
            }
        }
    }
}

#[derive(Debug, Args)]
pub struct GetArgs {
    /// State address
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

#[derive(Debug, Args)]
pub struct GetListArgs {
    /// Only entries under this address
    #[arg(long)]
    pub address: Option<String>,
    /// Address to start listing from
    #[arg(long)]
    pub start: Option<String>,
    /// Maximum number of entries
    #[arg(long, allow_negative_numbers = true, value_parser = integer_literal)]
    pub limit: Option<String>,
    /// Block identifier to read state at
    #[arg(long)]
    pub head: Option<String>,
    /// List in reverse address order
    #[arg(long)]
    pub reverse: bool,
    #[command(flatten)]
    pub node: NodeUrlArg,
}

impl GetListArgs {
    fn validate(&self, config: &Config) -> Result<(ListQuery, String), ValidationError> {
        let mut schema = Schema::new();
        let address = schema.optional("address", self.address.as_deref(), fields::address);
        let start = schema.optional("start", self.start.as_deref(), fields::address);
        let limit = schema.limit(self.limit.as_deref());
        let head = schema.optional("head", self.head.as_deref(), |raw| {
            fields::identifier(IdentifierKind::Block, raw)
        });
        let node_url = self.node.validate(&mut schema, config);
        schema.finish(|| {
            let query = ListQuery {
                address: address?,
                start: start?,
                limit: limit?,
                head: head?,
                reverse: self.reverse,
                ..Default::default()
            };
            Some((query, node_url?))
        })
    }
}
