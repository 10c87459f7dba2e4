//! State adapter

use async_trait::async_trait;
use remme_sdk::{ListQuery, RemmeClient};

use super::{finish, unwrap_data, ServiceResult};

/// Global state operations
#[async_trait]
pub trait StateService {
    /// State entry at `address`
    async fn get(&self, address: &str) -> ServiceResult;

    /// State entries matching `query`
    async fn get_list(&self, query: &ListQuery) -> ServiceResult;
}

/// State adapter over a node client
pub struct State<'a> {
    client: &'a RemmeClient,
}

impl<'a> State<'a> {
    /// Create the adapter
    pub fn new(client: &'a RemmeClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl StateService for State<'_> {
    async fn get(&self, address: &str) -> ServiceResult {
        finish(self.client.fetch_state(address).await).map(unwrap_data)
    }

    async fn get_list(&self, query: &ListQuery) -> ServiceResult {
        finish(self.client.list_state(query).await).map(unwrap_data)
    }
}
