//! Public key adapter

use async_trait::async_trait;
use remme_sdk::RemmeClient;

use super::{finish, ServiceResult};

/// Public key registry operations
#[async_trait]
pub trait PublicKeyService {
    /// Public key addresses registered by the account at `address`
    async fn get_list(&self, address: &str) -> ServiceResult;

    /// Registration info of `public_key`
    async fn get_info(&self, public_key: &str) -> ServiceResult;
}

/// Public key adapter over a node client
pub struct PublicKey<'a> {
    client: &'a RemmeClient,
}

impl<'a> PublicKey<'a> {
    /// Create the adapter
    pub fn new(client: &'a RemmeClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PublicKeyService for PublicKey<'_> {
    async fn get_list(&self, address: &str) -> ServiceResult {
        finish(self.client.get_public_keys_list(address).await)
    }

    async fn get_info(&self, public_key: &str) -> ServiceResult {
        finish(self.client.get_public_key_info(public_key).await)
    }
}
