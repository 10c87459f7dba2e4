//! Receipt adapter

use async_trait::async_trait;
use remme_sdk::RemmeClient;

use super::{finish, unwrap_data, ServiceResult};

/// Transaction receipt operations
#[async_trait]
pub trait ReceiptService {
    /// Receipts of the given transactions
    async fn get(&self, ids: &[String]) -> ServiceResult;
}

/// Receipt adapter over a node client
pub struct Receipt<'a> {
    client: &'a RemmeClient,
}

impl<'a> Receipt<'a> {
    /// Create the adapter
    pub fn new(client: &'a RemmeClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ReceiptService for Receipt<'_> {
    async fn get(&self, ids: &[String]) -> ServiceResult {
        finish(self.client.list_receipts(ids).await).map(unwrap_data)
    }
}
