//! SDK types

use serde::Serialize;
use sha2::{Digest, Sha512};
use std::fmt;

/// Host used when the caller does not name a node
pub const DEFAULT_NODE_HOST: &str = "localhost";

/// JSON-RPC port every node listens on
pub const NODE_RPC_PORT: u16 = 8080;

/// Location of a node's JSON-RPC endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeAddress {
    host: String,
    port: u16,
}

impl NodeAddress {
    /// Address of the node on `host`, at the well-known RPC port
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: NODE_RPC_PORT,
        }
    }

    /// Node host name
    pub fn host(&self) -> &str {
        &self.host
    }

    /// Node RPC port
    pub fn port(&self) -> u16 {
        self.port
    }

    /// HTTP URL of the JSON-RPC endpoint
    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }
}

impl Default for NodeAddress {
    fn default() -> Self {
        Self::new(DEFAULT_NODE_HOST)
    }
}

impl fmt::Display for NodeAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

/// Filters and paging for the `list_*` RPC methods
///
/// Unset fields are left out of the request entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ListQuery {
    /// Only these identifiers
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ids: Option<Vec<String>>,
    /// State address prefix
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Identifier to start paging from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
    /// Page size
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
    /// Block to read from instead of the chain head
    #[serde(skip_serializing_if = "Option::is_none")]
    pub head: Option<String>,
    /// Oldest first
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub reverse: bool,
    /// Transaction family filter
    #[serde(skip_serializing_if = "Option::is_none")]
    pub family_name: Option<String>,
}

/// Masternode betting behavior
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bet {
    /// Bet the minimum allowed
    Min,
    /// Bet the maximum allowed
    Max,
    /// Bet a fixed amount of tokens
    Fixed(u64),
}

impl Serialize for Bet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Bet::Min => serializer.serialize_str("MIN"),
            Bet::Max => serializer.serialize_str("MAX"),
            Bet::Fixed(amount) => serializer.serialize_u64(*amount),
        }
    }
}

/// Transaction families known to the node
pub mod family {
    /// Token accounts
    pub const ACCOUNT: &str = "account";
    /// Node accounts and masternodes
    pub const NODE_ACCOUNT: &str = "node_account";
    /// Public key registry
    pub const PUBLIC_KEY: &str = "pub_key";
    /// Atomic swaps
    pub const ATOMIC_SWAP: &str = "AtomicSwap";
    /// Consensus accounts
    pub const CONSENSUS_ACCOUNT: &str = "consensus_account";
    /// Block info
    pub const BLOCK_INFO: &str = "block_info";

    /// Every family a transaction list can be filtered by
    pub const ALL: [&str; 6] = [
        ACCOUNT,
        NODE_ACCOUNT,
        PUBLIC_KEY,
        ATOMIC_SWAP,
        CONSENSUS_ACCOUNT,
        BLOCK_INFO,
    ];
}

/// State address of `data` within `family`: a 6 hex character family
/// prefix followed by 64 hex characters of the data hash
pub fn make_address(family: &str, data: &str) -> String {
    let prefix = hex::encode(Sha512::digest(family.as_bytes()));
    let body = hex::encode(Sha512::digest(data.as_bytes()));
    format!("{}{}", &prefix[..6], &body[..64])
}
