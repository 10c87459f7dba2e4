//! # remme-sdk
//!
//! Rust SDK for REMME nodes.
//!
//! ## Features
//!
//! - **RemmeClient**: JSON-RPC client for a single node
//! - **Account**: private key handling and transaction signing
//! - **TxBuilder**: Fluent API for building signed transactions
//! - **Transport**: pluggable request transport (HTTP or mock)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use remme_sdk::{NodeAddress, RemmeClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = RemmeClient::connect(&NodeAddress::new("localhost"));
//!
//!     let address = "112007d71fa7e120c60fb392a64fd69de891a60c667d9ea9e5d9d9d617263be6c20202";
//!     let balance = client.get_balance(address).await?;
//!     println!("Balance: {}", balance);
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod account;
mod client;
mod error;
pub mod transaction;
mod transport;
pub mod types;

// Re-export main types
pub use account::Account;
pub use client::RemmeClient;
pub use error::SdkError;
pub use transport::MockTransport;

/// Re-export Transport trait for custom implementations
pub use transport::Transport;
pub use transaction::TxBuilder;
pub use types::{Bet, ListQuery, NodeAddress};

#[cfg(feature = "http")]
pub use transport::HttpTransport;
