//! Atomic swap adapter

use async_trait::async_trait;
use remme_sdk::RemmeClient;

use super::{finish, ServiceResult};

/// Atomic swap operations
#[async_trait]
pub trait AtomicSwapService {
    /// Info of the swap `swap_id`
    async fn get_info(&self, swap_id: &str) -> ServiceResult;

    /// Public key used to encrypt swap secrets
    async fn get_public_key(&self) -> ServiceResult;
}

/// Atomic swap adapter over a node client
pub struct AtomicSwap<'a> {
    client: &'a RemmeClient,
}

impl<'a> AtomicSwap<'a> {
    /// Create the adapter
    pub fn new(client: &'a RemmeClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl AtomicSwapService for AtomicSwap<'_> {
    async fn get_info(&self, swap_id: &str) -> ServiceResult {
        finish(self.client.get_atomic_swap_info(swap_id).await)
    }

    async fn get_public_key(&self) -> ServiceResult {
        finish(self.client.get_atomic_swap_public_key().await)
    }
}
