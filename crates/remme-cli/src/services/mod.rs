//! Service adapters
//!
//! One adapter per node resource. Each operation makes exactly one call
//! through the SDK and reduces the outcome to a [`ServiceResult`].

use remme_sdk::SdkError;
use serde_json::Value;

pub mod account;
pub mod atomic_swap;
pub mod batch;
pub mod block;
pub mod masternode;
pub mod node;
pub mod node_account;
pub mod public_key;
pub mod receipt;
pub mod state;
pub mod transaction;

pub use account::{Account, AccountService};
pub use atomic_swap::{AtomicSwap, AtomicSwapService};
pub use batch::{Batch, BatchService};
pub use block::{Block, BlockService};
pub use masternode::{Masternode, MasternodeService};
pub use node::{Node, NodeService};
pub use node_account::{NodeAccount, NodeAccountService};
pub use public_key::{PublicKey, PublicKeyService};
pub use receipt::{Receipt, ReceiptService};
pub use state::{State, StateService};
pub use transaction::{Transaction, TransactionService};

/// Payload returned by the node, or the message describing why the call failed
pub type ServiceResult = Result<Value, String>;

/// Message shown for a failed SDK call
///
/// Errors reported by the node keep their own message.
pub(crate) fn error_message(error: SdkError) -> String {
    match error {
        SdkError::Rpc { message, .. } => message,
        other => other.to_string(),
    }
}

/// Convert an SDK outcome into a service result
pub(crate) fn finish<T: Into<Value>>(outcome: Result<T, SdkError>) -> ServiceResult {
    outcome.map(Into::into).map_err(error_message)
}

/// Take the `data` field out of a response envelope, if there is one
pub(crate) fn unwrap_data(payload: Value) -> Value {
    match payload {
        Value::Object(mut map) if map.contains_key("data") => {
            map.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    }
}

/// Reduce a list of ledger objects to their header signatures
pub(crate) fn header_signatures(items: Value) -> Value {
    match items {
        Value::Array(items) => Value::Array(
            items
                .into_iter()
                .filter_map(|item| item.get("header_signature").cloned())
                .collect(),
        ),
        other => other,
    }
}

/// Unwrap a listing and optionally reduce it to identifiers
pub(crate) fn listing(payload: Value, ids_only: bool) -> Value {
    let items = unwrap_data(payload);
    if ids_only {
        header_signatures(items)
    } else {
        items
    }
}
