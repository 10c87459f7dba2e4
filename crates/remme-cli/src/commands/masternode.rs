//! Masternode commands, signed with the node operator's key

use clap::{Args, Subcommand};
use remme_sdk::Bet;
use serde_json::{json, Value};

use super::node::NodeArgs;
use super::node_account::AmountArgs;
use super::{service_error, Context, NodeUrlArg};
use crate::config::Config;
use crate::error::ValidationError;
use crate::services::{Masternode, MasternodeService};
use crate::validation::{fields, Schema};
use crate::CliError;

/// Masternode subcommands
#[derive(Debug, Subcommand)]
pub enum MasternodeCommand {
    /// Open a masternode with an initial stake
    Open(AmountArgs),
    /// Close the masternode
    Close(NodeArgs),
    /// Set the masternode betting behavior
    SetBet(SetBetArgs),
}

impl MasternodeCommand {
    pub async fn execute(self, ctx: &Context<'_>) -> Result<Value, CliError> {
        let batch_identifier = match self {
            MasternodeCommand::Open(args) => {
                let (amount, node_url) = args.validate(ctx.config)?;
                let signer = ctx.node_account()?;
                let client = ctx.client(&node_url);
                Masternode::new(&client).open(&signer, amount).await
            }
            MasternodeCommand::Close(args) => {
                let node_url = args.validate(ctx.config)?;
                let signer = ctx.node_account()?;
                let client = ctx.client(&node_url);
                Masternode::new(&client).close(&signer).await
            }
            MasternodeCommand::SetBet(args) => {
                let (bet, node_url) = args.validate(ctx.config)?;
                let signer = ctx.node_account()?;
                let client = ctx.client(&node_url);
                Masternode::new(&client).set_bet(&signer, bet).await
            }
        }
        .map_err(service_error)?;

        Ok(json!({ "batch_identifier": batch_identifier }))
    }
}

#[derive(Debug, Args)]
pub struct SetBetArgs {
    /// `min`, `max` or a fixed number of tokens
    #[arg(long, allow_negative_numbers = true)]
    pub bet: String,
    #[command(flatten)]
    pub node: NodeUrlArg,
}

impl SetBetArgs {
    fn validate(&self, config: &Config) -> Result<(Bet, String), ValidationError> {
        let mut schema = Schema::new();
        let bet = schema.required("bet", fields::bet(&self.bet));
        let node_url = self.node.validate(&mut schema, config);
        schema.finish(|| Some((bet?, node_url?)))
    }
}
