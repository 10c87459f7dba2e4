//! Signing account

use k256::ecdsa::{signature::Signer, Signature, SigningKey};
use k256::elliptic_curve::sec1::ToEncodedPoint;
use zeroize::Zeroize;

use crate::types::{family, make_address};
use crate::SdkError;

/// Account holding a private key, used to sign transactions
///
/// Note: Clone is intentionally not implemented to prevent accidental key duplication.
pub struct Account {
    private_key: SigningKey,
    public_key: String,
    address: String,
}

impl Account {
    /// Create an account from a 32-byte private key
    pub fn from_private_key(key: &[u8; 32]) -> Result<Self, SdkError> {
        let private_key = SigningKey::from_slice(key)
            .map_err(|e| SdkError::InvalidPrivateKey(e.to_string()))?;
        let point = k256::PublicKey::from(private_key.verifying_key()).to_encoded_point(true);
        let public_key = hex::encode(point.as_bytes());
        let address = make_address(family::ACCOUNT, &public_key);

        Ok(Self {
            private_key,
            public_key,
            address,
        })
    }

    /// Create an account from a hex-encoded private key
    pub fn from_private_key_hex(hex: &str) -> Result<Self, SdkError> {
        let mut bytes = hex::decode(hex.trim())?;
        if bytes.len() != 32 {
            let len = bytes.len();
            bytes.zeroize();
            return Err(SdkError::InvalidPrivateKey(format!(
                "Expected 32 bytes, got {}",
                len
            )));
        }

        let mut key = [0u8; 32];
        key.copy_from_slice(&bytes);
        bytes.zeroize();

        let result = Self::from_private_key(&key);
        key.zeroize();
        result
    }

    /// Compressed public key, 66 hex characters
    pub fn public_key(&self) -> &str {
        &self.public_key
    }

    /// Account address, 70 hex characters
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Sign `message`, returning the 128 hex character signature
    pub fn sign(&self, message: &[u8]) -> Result<String, SdkError> {
        let signature: Signature = self
            .private_key
            .try_sign(message)
            .map_err(|e| SdkError::SigningFailed(e.to_string()))?;
        Ok(hex::encode(signature.to_bytes()))
    }
}

impl std::fmt::Debug for Account {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Account")
            .field("address", &self.address)
            .finish_non_exhaustive()
    }
}
