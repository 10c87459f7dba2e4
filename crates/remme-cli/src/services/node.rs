//! Node adapter

use async_trait::async_trait;
use remme_sdk::RemmeClient;

use super::{finish, unwrap_data, ServiceResult};

/// Node introspection operations
#[async_trait]
pub trait NodeService {
    /// Node configuration
    async fn get_configs(&self) -> ServiceResult;

    /// Peers of the node
    async fn get_peers(&self) -> ServiceResult;

    /// Synchronization info
    async fn get_info(&self) -> ServiceResult;
}

/// Node adapter over a node client
pub struct Node<'a> {
    client: &'a RemmeClient,
}

impl<'a> Node<'a> {
    /// Create the adapter
    pub fn new(client: &'a RemmeClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl NodeService for Node<'_> {
    async fn get_configs(&self) -> ServiceResult {
        finish(self.client.get_node_config().await)
    }

    async fn get_peers(&self) -> ServiceResult {
        finish(self.client.fetch_peers().await).map(unwrap_data)
    }

    async fn get_info(&self) -> ServiceResult {
        finish(self.client.get_node_info().await)
    }
}
