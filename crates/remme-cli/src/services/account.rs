//! Account adapter

use async_trait::async_trait;
use remme_sdk::{Account as SigningAccount, RemmeClient};

use super::{finish, ServiceResult};

/// Token account operations
#[async_trait]
pub trait AccountService {
    /// Token balance of `address`
    async fn get_balance(&self, address: &str) -> ServiceResult;

    /// Send `amount` tokens from `signer` to `address_to`; yields the batch identifier
    async fn transfer_tokens(
        &self,
        signer: &SigningAccount,
        address_to: &str,
        amount: u64,
    ) -> ServiceResult;
}

/// Account adapter over a node client
pub struct Account<'a> {
    client: &'a RemmeClient,
}

impl<'a> Account<'a> {
    /// Create the adapter
    pub fn new(client: &'a RemmeClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AccountService for Account<'_> {
    async fn get_balance(&self, address: &str) -> ServiceResult {
        finish(self.client.get_balance(address).await)
    }

    async fn transfer_tokens(
        &self,
        signer: &SigningAccount,
        address_to: &str,
        amount: u64,
    ) -> ServiceResult {
        finish(self.client.transfer_tokens(signer, address_to, amount).await)
    }
}
