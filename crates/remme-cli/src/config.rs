//! CLI configuration

use serde::Deserialize;
use std::path::{Path, PathBuf};

use remme_sdk::types::DEFAULT_NODE_HOST;

/// CLI configuration, read from `~/.remme/config.toml` when present
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    /// Node used when a command gets no `--node-url`
    #[serde(default)]
    pub node_url: Option<String>,
    /// Node private key file used by masternode commands
    #[serde(default)]
    pub node_private_key_file: Option<PathBuf>,
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".remme"))
    }

    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|d| d.join("config.toml"))
    }

    /// Load config from the default location, or defaults
    pub fn load() -> Self {
        Self::config_path()
            .map(|path| Self::load_from(&path))
            .unwrap_or_default()
    }

    /// Load config from `path`; a missing or malformed file yields defaults
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        let parsed = std::fs::read_to_string(path)
            .map_err(|e| e.to_string())
            .and_then(|content| toml::from_str(&content).map_err(|e| e.to_string()));

        match parsed {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable config file");
                Self::default()
            }
        }
    }

    /// Node URL to use when the command line names none
    pub fn default_node_url(&self) -> &str {
        self.node_url.as_deref().unwrap_or(DEFAULT_NODE_HOST)
    }
}
