//! Account commands

use clap::{Args, Subcommand};
use remme_sdk::Account as SigningAccount;
use serde_json::{json, Value};

use super::{integer_literal, service_error, Context, NodeUrlArg};
use crate::config::Config;
use crate::error::ValidationError;
use crate::services::{Account, AccountService};
use crate::validation::{fields, Schema};
use crate::CliError;

/// Account subcommands
#[derive(Debug, Subcommand)]
pub enum AccountCommand {
    /// Get the token balance of an account
    GetBalance(GetBalanceArgs),
    /// Transfer tokens to another account
    TransferTokens(TransferTokensArgs),
}

impl AccountCommand {
    pub async fn execute(self, ctx: &Context<'_>) -> Result<Value, CliError> {
        match self {
            AccountCommand::GetBalance(args) => get_balance(ctx, args).await,
            AccountCommand::TransferTokens(args) => transfer_tokens(ctx, args).await,
        }
    }
}

#[derive(Debug, Args)]
pub struct GetBalanceArgs {
    /// Account address
    #[arg(long)]
    pub address: String,
    #[command(flatten)]
    pub node: NodeUrlArg,
}

struct GetBalance {
    address: String,
    node_url: String,
}

impl GetBalanceArgs {
    fn validate(&self, config: &Config) -> Result<GetBalance, ValidationError> {
        let mut schema = Schema::new();
        let address = schema.required("address", fields::address(&self.address));
        let node_url = self.node.validate(&mut schema, config);
        schema.finish(|| {
            Some(GetBalance {
                address: address?,
                node_url: node_url?,
            })
        })
    }
}

#[derive(Debug, Args)]
pub struct TransferTokensArgs {
    /// Private key of the sending account
    #[arg(long)]
    pub private_key: String,
    /// Address of the receiving account
    #[arg(long)]
    pub address_to: String,
    /// Number of tokens to send
    #[arg(long, allow_negative_numbers = true, value_parser = integer_literal)]
    pub amount: String,
    #[command(flatten)]
    pub node: NodeUrlArg,
}

struct TransferTokens {
    private_key: String,
    address_to: String,
    amount: u64,
    node_url: String,
}

impl TransferTokensArgs {
    fn validate(&self, config: &Config) -> Result<TransferTokens, ValidationError> {
        let mut schema = Schema::new();
        let private_key = schema.required("private_key", fields::private_key(&self.private_key));
        let address_to = schema.required("address_to", fields::address(&self.address_to));
        let amount = schema.required("amount", fields::amount(&self.amount));
        let node_url = self.node.validate(&mut schema, config);
        schema.finish(|| {
            Some(TransferTokens {
                private_key: private_key?,
                address_to: address_to?,
                amount: amount?,
                node_url: node_url?,
            })
        })
    }
}

async fn get_balance(ctx: &Context<'_>, args: GetBalanceArgs) -> Result<Value, CliError> {
    let request = args.validate(ctx.config)?;
    let client = ctx.client(&request.node_url);

    let balance = Account::new(&client)
        .get_balance(&request.address)
        .await
        .map_err(service_error)?;

    Ok(json!({ "balance": balance }))
}

async fn transfer_tokens(ctx: &Context<'_>, args: TransferTokensArgs) -> Result<Value, CliError> {
    let request = args.validate(ctx.config)?;
    let signer = SigningAccount::from_private_key_hex(&request.private_key)
        .map_err(|_| CliError::Precondition("The following private key is invalid.".to_string()))?;
    let client = ctx.client(&request.node_url);

    let batch_identifier = Account::new(&client)
        .transfer_tokens(&signer, &request.address_to, request.amount)
        .await
        .map_err(service_error)?;

    Ok(json!({ "batch_identifier": batch_identifier }))
}
