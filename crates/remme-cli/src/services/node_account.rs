//! Node account adapter

use async_trait::async_trait;
use remme_sdk::{Account as SigningAccount, RemmeClient};

use super::{finish, ServiceResult};

/// Node account operations
#[async_trait]
pub trait NodeAccountService {
    /// Node account at `address`
    async fn get(&self, address: &str) -> ServiceResult;

    /// Unfreeze `amount` tokens of the node account; yields the batch identifier
    async fn transfer_tokens_from_frozen_to_unfrozen(
        &self,
        signer: &SigningAccount,
        amount: u64,
    ) -> ServiceResult;
}

/// Node account adapter over a node client
pub struct NodeAccount<'a> {
    client: &'a RemmeClient,
}

impl<'a> NodeAccount<'a> {
    /// Create the adapter
    pub fn new(client: &'a RemmeClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl NodeAccountService for NodeAccount<'_> {
    async fn get(&self, address: &str) -> ServiceResult {
        finish(self.client.get_node_account(address).await)
    }

    async fn transfer_tokens_from_frozen_to_unfrozen(
        &self,
        signer: &SigningAccount,
        amount: u64,
    ) -> ServiceResult {
        finish(self.client.transfer_from_frozen_to_unfrozen(signer, amount).await)
    }
}
