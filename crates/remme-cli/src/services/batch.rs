//! Batch adapter

use async_trait::async_trait;
use remme_sdk::{ListQuery, RemmeClient};

use super::{finish, listing, unwrap_data, ServiceResult};

/// Batch operations
#[async_trait]
pub trait BatchService {
    /// Batch by identifier
    async fn get(&self, id: &str) -> ServiceResult;

    /// Batches matching `query`, or only their identifiers
    async fn get_list(&self, query: &ListQuery, ids_only: bool) -> ServiceResult;

    /// Processing status of a batch
    async fn get_status(&self, id: &str) -> ServiceResult;
}

/// Batch adapter over a node client
pub struct Batch<'a> {
    client: &'a RemmeClient,
}

impl<'a> Batch<'a> {
    /// Create the adapter
    pub fn new(client: &'a RemmeClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl BatchService for Batch<'_> {
    async fn get(&self, id: &str) -> ServiceResult {
        finish(self.client.fetch_batch(id).await).map(unwrap_data)
    }

    async fn get_list(&self, query: &ListQuery, ids_only: bool) -> ServiceResult {
        finish(self.client.list_batches(query).await).map(|payload| listing(payload, ids_only))
    }

    async fn get_status(&self, id: &str) -> ServiceResult {
        finish(self.client.get_batch_status(id).await)
    }
}
