//! Masternode adapter

use async_trait::async_trait;
use remme_sdk::{Account as SigningAccount, Bet, RemmeClient};

use super::{finish, ServiceResult};

/// Masternode operations; each yields the batch identifier
#[async_trait]
pub trait MasternodeService {
    /// Open a masternode staking `amount`
    async fn open(&self, signer: &SigningAccount, amount: u64) -> ServiceResult;

    /// Close the masternode
    async fn close(&self, signer: &SigningAccount) -> ServiceResult;

    /// Change the betting behavior
    async fn set_bet(&self, signer: &SigningAccount, bet: Bet) -> ServiceResult;
}

/// Masternode adapter over a node client
pub struct Masternode<'a> {
    client: &'a RemmeClient,
}

impl<'a> Masternode<'a> {
    /// Create the adapter
    pub fn new(client: &'a RemmeClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl MasternodeService for Masternode<'_> {
    async fn open(&self, signer: &SigningAccount, amount: u64) -> ServiceResult {
        finish(self.client.open_masternode(signer, amount).await)
    }

    async fn close(&self, signer: &SigningAccount) -> ServiceResult {
        finish(self.client.close_masternode(signer).await)
    }

    async fn set_bet(&self, signer: &SigningAccount, bet: Bet) -> ServiceResult {
        finish(self.client.set_bet(signer, bet).await)
    }
}
