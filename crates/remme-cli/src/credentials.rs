//! Node private key retrieval for commands signed by the node operator

use std::path::{Path, PathBuf};

use remme_sdk::Account;

use crate::config::Config;
use crate::validation::fields;
use crate::CliError;

/// Where the validator keeps its private key on Linux hosts
pub const LINUX_NODE_PRIVATE_KEY_FILE: &str =
    "/var/lib/docker/volumes/remme_validator_keys/_data/validator.priv";

/// Source of the node operator's signing account
pub trait NodeKeySource: Send + Sync {
    /// Load the node account
    fn node_account(&self) -> Result<Account, CliError>;
}

/// Reads the node private key from a file
#[derive(Debug, Clone)]
pub struct NodeKeyFile {
    path: Option<PathBuf>,
}

impl NodeKeyFile {
    /// Read from `path`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// The configured file, else the platform default
    pub fn from_config(config: &Config) -> Self {
        Self {
            path: config
                .node_private_key_file
                .clone()
                .or_else(platform_default),
        }
    }

    fn read(path: &Path) -> Result<Account, CliError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            CliError::Precondition(format!(
                "Unable to read the node private key file `{}`: {}.",
                path.display(),
                e
            ))
        })?;

        let key = fields::private_key(content.trim()).map_err(|_| {
            CliError::Precondition(format!(
                "The node private key file `{}` does not contain a valid private key.",
                path.display()
            ))
        })?;

        Account::from_private_key_hex(&key).map_err(|e| CliError::Precondition(e.to_string()))
    }
}

impl NodeKeySource for NodeKeyFile {
    fn node_account(&self) -> Result<Account, CliError> {
        match &self.path {
            Some(path) => {
                tracing::debug!(path = %path.display(), "reading node private key");
                Self::read(path)
            }
            None => Err(CliError::Precondition(format!(
                "Getting the node private key is not supported on `{}`, only on Linux.",
                std::env::consts::OS
            ))),
        }
    }
}

fn platform_default() -> Option<PathBuf> {
    if cfg!(target_os = "linux") {
        Some(PathBuf::from(LINUX_NODE_PRIVATE_KEY_FILE))
    } else {
        None
    }
}
