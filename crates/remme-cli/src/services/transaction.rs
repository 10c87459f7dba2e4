//! Transaction adapter

use async_trait::async_trait;
use remme_sdk::{ListQuery, RemmeClient};

use super::{finish, listing, unwrap_data, ServiceResult};

/// Transaction operations
#[async_trait]
pub trait TransactionService {
    /// Transaction by identifier
    async fn get(&self, id: &str) -> ServiceResult;

    /// Transactions matching `query`, or only their identifiers
    async fn get_list(&self, query: &ListQuery, ids_only: bool) -> ServiceResult;
}

/// Transaction adapter over a node client
pub struct Transaction<'a> {
    client: &'a RemmeClient,
}

impl<'a> Transaction<'a> {
    /// Create the adapter
    pub fn new(client: &'a RemmeClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl TransactionService for Transaction<'_> {
    async fn get(&self, id: &str) -> ServiceResult {
        finish(self.client.fetch_transaction(id).await).map(unwrap_data)
    }

    async fn get_list(&self, query: &ListQuery, ids_only: bool) -> ServiceResult {
        finish(self.client.list_transactions(query).await)
            .map(|payload| listing(payload, ids_only))
    }
}
