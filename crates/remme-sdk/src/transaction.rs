//! Transaction builder

use rand::RngCore;
use serde::Serialize;
use serde_json::{json, Value};
use sha2::{Digest, Sha512};

use crate::{Account, SdkError};

/// Header of a transaction; its signature identifies the transaction
#[derive(Debug, Clone, Serialize)]
pub struct TransactionHeader {
    /// Family processing the transaction
    pub family_name: String,
    /// Family version
    pub family_version: String,
    /// State addresses the transaction reads
    pub inputs: Vec<String>,
    /// State addresses the transaction writes
    pub outputs: Vec<String>,
    /// Signer's compressed public key
    pub signer_public_key: String,
    /// Batcher's compressed public key
    pub batcher_public_key: String,
    /// Random nonce
    pub nonce: String,
    /// SHA-512 of the payload
    pub payload_sha512: String,
}

/// Signed transaction, ready to be sent to a node
#[derive(Debug, Clone, Serialize)]
pub struct SignedTransaction {
    /// Header
    pub header: TransactionHeader,
    /// Signature over the serialized header
    pub header_signature: String,
    /// Hex-encoded payload
    pub payload: String,
}

impl SignedTransaction {
    /// Wire form accepted by `send_raw_transaction`
    pub fn encode(&self) -> Result<String, SdkError> {
        Ok(hex::encode(serde_json::to_vec(self)?))
    }
}

/// Transaction builder with fluent API
#[derive(Debug, Clone)]
pub struct TxBuilder {
    family_name: String,
    family_version: String,
    method: String,
    data: Value,
    inputs: Vec<String>,
    outputs: Vec<String>,
}

impl TxBuilder {
    /// Create a builder calling `method` of `family_name`
    pub fn new(family_name: &str, method: &str) -> Self {
        Self {
            family_name: family_name.to_string(),
            family_version: "0.1".to_string(),
            method: method.to_string(),
            data: json!({}),
            inputs: Vec::new(),
            outputs: Vec::new(),
        }
    }

    /// Set the method arguments
    pub fn data(mut self, data: Value) -> Self {
        self.data = data;
        self
    }

    /// Add a state address the transaction both reads and writes
    pub fn touch(mut self, address: impl Into<String>) -> Self {
        let address = address.into();
        self.inputs.push(address.clone());
        self.outputs.push(address);
        self
    }

    /// Sign the transaction with `account` as both signer and batcher
    pub fn sign(self, account: &Account) -> Result<SignedTransaction, SdkError> {
        let payload = serde_json::to_vec(&json!({
            "method": self.method,
            "data": self.data,
        }))?;

        let mut nonce = [0u8; 16];
        rand::thread_rng().fill_bytes(&mut nonce);

        let mut inputs = self.inputs;
        let mut outputs = self.outputs;
        inputs.push(account.address().to_string());
        outputs.push(account.address().to_string());

        let header = TransactionHeader {
            family_name: self.family_name,
            family_version: self.family_version,
            inputs,
            outputs,
            signer_public_key: account.public_key().to_string(),
            batcher_public_key: account.public_key().to_string(),
            nonce: hex::encode(nonce),
            payload_sha512: hex::encode(Sha512::digest(&payload)),
        };

        let header_signature = account.sign(&serde_json::to_vec(&header)?)?;

        Ok(SignedTransaction {
            header,
            header_signature,
            payload: hex::encode(payload),
        })
    }
}
