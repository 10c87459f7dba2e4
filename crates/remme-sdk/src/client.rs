//! RemmeClient - main RPC client

use serde_json::{json, Value};

use crate::transaction::TxBuilder;
use crate::transport::{deserialize_response, MockTransport, Transport};
use crate::types::{family, make_address, Bet, ListQuery, NodeAddress};
use crate::{Account, SdkError};

#[cfg(feature = "http")]
use crate::transport::HttpTransport;

/// Client for a single node's JSON-RPC interface
pub struct RemmeClient {
    transport: Box<dyn Transport>,
}

impl RemmeClient {
    /// Create a new client with HTTP transport
    ///
    /// No connection is made until the first request.
    #[cfg(feature = "http")]
    pub fn connect(address: &NodeAddress) -> Self {
        tracing::debug!(node = %address, "creating node client");
        Self {
            transport: Box::new(HttpTransport::new(&address.url())),
        }
    }

    /// Create a new client with mock transport (for testing)
    pub fn new_mock() -> Self {
        Self::with_transport(MockTransport::new())
    }

    /// Create a client with a custom transport
    pub fn with_transport(transport: impl Transport + 'static) -> Self {
        Self {
            transport: Box::new(transport),
        }
    }

    /// Helper method to make RPC request and deserialize
    async fn request<T: serde::de::DeserializeOwned>(
        &self,
        method: &str,
        params: Value,
    ) -> Result<T, SdkError> {
        let value = self.transport.request_json(method, params).await?;
        deserialize_response(value)
    }

    async fn submit(&self, builder: TxBuilder, account: &Account) -> Result<String, SdkError> {
        let transaction = builder.sign(account)?;
        tracing::debug!(
            family = %transaction.header.family_name,
            signature = %transaction.header_signature,
            "submitting transaction"
        );
        self.request(
            "send_raw_transaction",
            json!({ "data": transaction.encode()? }),
        )
        .await
    }

    // ==================== Accounts ====================

    /// Get the token balance of an account
    pub async fn get_balance(&self, address: &str) -> Result<u64, SdkError> {
        self.request("get_balance", json!({ "public_key_address": address }))
            .await
    }

    /// Transfer tokens from `account` to `address_to`, returning the batch identifier
    pub async fn transfer_tokens(
        &self,
        account: &Account,
        address_to: &str,
        amount: u64,
    ) -> Result<String, SdkError> {
        let builder = TxBuilder::new(family::ACCOUNT, "transfer")
            .data(json!({ "address_to": address_to, "value": amount }))
            .touch(address_to);
        self.submit(builder, account).await
    }

    // ==================== Batches ====================

    /// Fetch a batch by identifier
    pub async fn fetch_batch(&self, id: &str) -> Result<Value, SdkError> {
        self.request("fetch_batch", json!({ "id": id })).await
    }

    /// List batches
    pub async fn list_batches(&self, query: &ListQuery) -> Result<Value, SdkError> {
        self.request("list_batches", serde_json::to_value(query)?)
            .await
    }

    /// Get the processing status of a batch
    pub async fn get_batch_status(&self, id: &str) -> Result<String, SdkError> {
        self.request("get_batch_status", json!({ "id": id })).await
    }

    // ==================== Blocks ====================

    /// Fetch a block by identifier
    pub async fn fetch_block(&self, id: &str) -> Result<Value, SdkError> {
        self.request("fetch_block", json!({ "id": id })).await
    }

    /// List blocks
    pub async fn list_blocks(&self, query: &ListQuery) -> Result<Value, SdkError> {
        self.request("list_blocks", serde_json::to_value(query)?)
            .await
    }

    // ==================== Transactions ====================

    /// Fetch a transaction by identifier
    pub async fn fetch_transaction(&self, id: &str) -> Result<Value, SdkError> {
        self.request("fetch_transaction", json!({ "id": id })).await
    }

    /// List transactions
    pub async fn list_transactions(&self, query: &ListQuery) -> Result<Value, SdkError> {
        self.request("list_transactions", serde_json::to_value(query)?)
            .await
    }

    // ==================== Receipts ====================

    /// List receipts of the given transactions
    pub async fn list_receipts(&self, ids: &[String]) -> Result<Value, SdkError> {
        self.request("list_receipts", json!({ "ids": ids })).await
    }

    // ==================== State ====================

    /// Fetch the state entry at an address
    pub async fn fetch_state(&self, address: &str) -> Result<Value, SdkError> {
        self.request("fetch_state", json!({ "address": address }))
            .await
    }

    /// List state entries
    pub async fn list_state(&self, query: &ListQuery) -> Result<Value, SdkError> {
        self.request("list_state", serde_json::to_value(query)?)
            .await
    }

    // ==================== Node ====================

    /// Get the node's configuration
    pub async fn get_node_config(&self) -> Result<Value, SdkError> {
        self.request("get_node_config", json!({})).await
    }

    /// Get the node's peers
    pub async fn fetch_peers(&self) -> Result<Value, SdkError> {
        self.request("fetch_peers", json!({})).await
    }

    /// Get the node's synchronization info
    pub async fn get_node_info(&self) -> Result<Value, SdkError> {
        self.request("get_node_info", json!({})).await
    }

    // ==================== Node accounts ====================

    /// Get a node account
    pub async fn get_node_account(&self, address: &str) -> Result<Value, SdkError> {
        self.request("get_node_account", json!({ "node_account_address": address }))
            .await
    }

    /// Move frozen tokens of the node account to its unfrozen balance
    pub async fn transfer_from_frozen_to_unfrozen(
        &self,
        account: &Account,
        amount: u64,
    ) -> Result<String, SdkError> {
        let builder = TxBuilder::new(family::NODE_ACCOUNT, "transfer_from_frozen_to_unfrozen")
            .data(json!({ "value": amount }));
        self.submit(builder, account).await
    }

    // ==================== Masternodes ====================

    /// Open a masternode staking `amount` tokens
    pub async fn open_masternode(&self, account: &Account, amount: u64) -> Result<String, SdkError> {
        let builder = TxBuilder::new(family::NODE_ACCOUNT, "initialize_masternode")
            .data(json!({ "value": amount }));
        self.submit(builder, account).await
    }

    /// Close the node's masternode
    pub async fn close_masternode(&self, account: &Account) -> Result<String, SdkError> {
        self.submit(TxBuilder::new(family::NODE_ACCOUNT, "close_masternode"), account)
            .await
    }

    /// Set the masternode's betting behavior
    pub async fn set_bet(&self, account: &Account, bet: Bet) -> Result<String, SdkError> {
        let builder =
            TxBuilder::new(family::NODE_ACCOUNT, "set_bet").data(json!({ "bet": bet }));
        self.submit(builder, account).await
    }

    // ==================== Public keys ====================

    /// List the public key addresses registered by an account
    pub async fn get_public_keys_list(&self, address: &str) -> Result<Vec<String>, SdkError> {
        self.request("get_public_keys_list", json!({ "public_key_address": address }))
            .await
    }

    /// Get registration info of a public key
    pub async fn get_public_key_info(&self, public_key: &str) -> Result<Value, SdkError> {
        let address = make_address(family::PUBLIC_KEY, public_key);
        self.request("get_public_key_info", json!({ "public_key_address": address }))
            .await
    }

    // ==================== Atomic swaps ====================

    /// Get info of an atomic swap
    pub async fn get_atomic_swap_info(&self, swap_id: &str) -> Result<Value, SdkError> {
        self.request("get_atomic_swap_info", json!({ "swap_id": swap_id }))
            .await
    }

    /// Get the public key used to encrypt atomic swap secrets
    pub async fn get_atomic_swap_public_key(&self) -> Result<String, SdkError> {
        self.request("get_atomic_swap_public_key", json!({})).await
    }
}
