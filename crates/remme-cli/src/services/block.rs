//! Block adapter

use async_trait::async_trait;
use remme_sdk::{ListQuery, RemmeClient};

use super::{finish, listing, unwrap_data, ServiceResult};

/// Block operations
#[async_trait]
pub trait BlockService {
    /// Block by identifier
    async fn get(&self, id: &str) -> ServiceResult;

    /// Blocks matching `query`, or only their identifiers
    async fn get_list(&self, query: &ListQuery, ids_only: bool) -> ServiceResult;
}

/// Block adapter over a node client
pub struct Block<'a> {
    client: &'a RemmeClient,
}

impl<'a> Block<'a> {
    /// Create the adapter
    pub fn new(client: &'a RemmeClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl BlockService for Block<'_> {
    async fn get(&self, id: &str) -> ServiceResult {
        finish(self.client.fetch_block(id).await).map(unwrap_data)
    }

    async fn get_list(&self, query: &ListQuery, ids_only: bool) -> ServiceResult {
        finish(self.client.list_blocks(query).await).map(|payload| listing(payload, ids_only))
    }
}
