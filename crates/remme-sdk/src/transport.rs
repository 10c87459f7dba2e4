//! Transport layer for RPC communication

use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::SdkError;

/// Transport trait for RPC communication (object-safe)
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send an RPC request with named parameters and get the JSON result
    async fn request_json(&self, method: &str, params: Value) -> Result<Value, SdkError>;
}

/// Helper to deserialize response
pub fn deserialize_response<T: serde::de::DeserializeOwned>(value: Value) -> Result<T, SdkError> {
    serde_json::from_value(value).map_err(|e| SdkError::Serialization(e.to_string()))
}

/// Canned reply of the mock transport
#[derive(Debug, Clone)]
enum MockReply {
    Result(Value),
    Rpc { code: i64, message: String },
    Transport(String),
}

impl MockReply {
    fn into_result(self) -> Result<Value, SdkError> {
        match self {
            MockReply::Result(value) => Ok(value),
            MockReply::Rpc { code, message } => Err(SdkError::Rpc { code, message }),
            MockReply::Transport(reason) => Err(SdkError::Transport(reason)),
        }
    }
}

/// Mock transport for testing
///
/// Clones share the same replies and request log, so a test can keep one
/// handle while a client owns another.
#[derive(Clone)]
pub struct MockTransport {
    replies: Arc<Mutex<HashMap<String, MockReply>>>,
    default_replies: Arc<HashMap<String, MockReply>>,
    requests: Arc<Mutex<Vec<(String, Value)>>>,
}

impl MockTransport {
    /// Create a new mock transport
    pub fn new() -> Self {
        let mut defaults = HashMap::new();

        defaults.insert("get_balance".to_string(), MockReply::Result(json!(0)));
        defaults.insert(
            "get_node_info".to_string(),
            MockReply::Result(json!({ "is_synced": true, "peer_count": 1 })),
        );
        defaults.insert(
            "fetch_peers".to_string(),
            MockReply::Result(json!({ "data": [] })),
        );
        defaults.insert(
            "get_batch_status".to_string(),
            MockReply::Result(json!("COMMITTED")),
        );
        defaults.insert(
            "send_raw_transaction".to_string(),
            MockReply::Result(Value::String("0".repeat(128))),
        );

        Self {
            replies: Arc::new(Mutex::new(HashMap::new())),
            default_replies: Arc::new(defaults),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Set a mock response for a specific method
    ///
    /// # Panics
    ///
    /// Panics if the mutex is poisoned (only possible if another thread panicked while holding the lock).
    pub fn set_response(&self, method: &str, response: Value) {
        self.insert(method, MockReply::Result(response));
    }

    /// Make a method fail the way a node reports a semantic error
    ///
    /// # Panics
    ///
    /// Panics if the mutex is poisoned.
    pub fn set_rpc_error(&self, method: &str, code: i64, message: &str) {
        self.insert(
            method,
            MockReply::Rpc {
                code,
                message: message.to_string(),
            },
        );
    }

    /// Make a method fail as if the node could not be reached
    ///
    /// # Panics
    ///
    /// Panics if the mutex is poisoned.
    pub fn set_transport_error(&self, method: &str, reason: &str) {
        self.insert(method, MockReply::Transport(reason.to_string()));
    }

    /// Requests seen so far, in order, as `(method, params)`
    ///
    /// # Panics
    ///
    /// Panics if the mutex is poisoned.
    pub fn requests(&self) -> Vec<(String, Value)> {
        self.requests
            .lock()
            .expect("MockTransport mutex poisoned")
            .clone()
    }

    fn insert(&self, method: &str, reply: MockReply) {
        // Mutex poisoning indicates a panicking test; surface it loudly
        self.replies
            .lock()
            .expect("MockTransport mutex poisoned")
            .insert(method.to_string(), reply);
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn request_json(&self, method: &str, params: Value) -> Result<Value, SdkError> {
        self.requests
            .lock()
            .map_err(|_| SdkError::Transport("MockTransport mutex poisoned".to_string()))?
            .push((method.to_string(), params));

        let custom = self
            .replies
            .lock()
            .map_err(|_| SdkError::Transport("MockTransport mutex poisoned".to_string()))?
            .get(method)
            .cloned();

        if let Some(reply) = custom.or_else(|| self.default_replies.get(method).cloned()) {
            return reply.into_result();
        }

        Err(SdkError::Rpc {
            code: -32601,
            message: format!("Method not found: {}", method),
        })
    }
}

/// HTTP transport for real RPC communication
#[cfg(feature = "http")]
pub struct HttpTransport {
    client: reqwest::Client,
    url: String,
    request_id: std::sync::atomic::AtomicU64,
}

#[cfg(feature = "http")]
impl HttpTransport {
    /// Create a new HTTP transport
    pub fn new(url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: url.to_string(),
            request_id: std::sync::atomic::AtomicU64::new(1),
        }
    }

    fn next_id(&self) -> u64 {
        self.request_id
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst)
    }

    fn unreachable(&self, reason: impl std::fmt::Display) -> SdkError {
        SdkError::Transport(format!(
            "Please check if your node running at {}. {}",
            self.url, reason
        ))
    }
}

#[cfg(feature = "http")]
#[async_trait]
impl Transport for HttpTransport {
    async fn request_json(&self, method: &str, params: Value) -> Result<Value, SdkError> {
        let id = self.next_id();
        let request = json!({
            "jsonrpc": "2.0",
            "id": id,
            "method": method,
            "params": params,
        });

        tracing::debug!(url = %self.url, method, id, "sending JSON-RPC request");

        let response = self
            .client
            .post(&self.url)
            .json(&request)
            .send()
            .await
            .map_err(|e| self.unreachable(e))?;

        let response: JsonRpcResponse = response
            .json()
            .await
            .map_err(|e| SdkError::Transport(e.to_string()))?;

        if let Some(error) = response.error {
            tracing::debug!(method, code = error.code, "node reported an error");
            return Err(SdkError::Rpc {
                code: error.code,
                message: error.message,
            });
        }

        response.result.ok_or_else(|| SdkError::Rpc {
            code: -32603,
            message: "No result in response".to_string(),
        })
    }
}

#[cfg(feature = "http")]
#[derive(serde::Deserialize)]
struct JsonRpcResponse {
    result: Option<Value>,
    error: Option<JsonRpcError>,
}

#[cfg(feature = "http")]
#[derive(serde::Deserialize)]
struct JsonRpcError {
    code: i64,
    message: String,
}
