use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use pubgate_util::errors::PubgateError;
use pubgate_util::fs::{expand_home, home_dir};

/// Global user configuration loaded from `~/.pubgate/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalConfig {
    #[serde(default)]
    pub publish: PublishConfig,
}

/// Publication settings from `[publish]`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PublishConfig {
    #[serde(default = "default_local_repository", rename = "local-repository")]
    pub local_repository: String,
    #[serde(default = "default_timeout_secs", rename = "timeout-secs")]
    pub timeout_secs: u64,
    /// Total attempts per request: `1` never retries, `0` counts as `1`.
    #[serde(default = "default_retries")]
    pub retries: u32,
}

impl Default for PublishConfig {
    fn default() -> Self {
        Self {
            local_repository: default_local_repository(),
            timeout_secs: default_timeout_secs(),
            retries: default_retries(),
        }
    }
}

fn default_local_repository() -> String {
    "~/.m2/repository".to_string()
}

fn default_timeout_secs() -> u64 {
    120
}

fn default_retries() -> u32 {
    3
}

impl PublishConfig {
    /// The local Maven repository with `~` expanded.
    pub fn local_repository_path(&self) -> PathBuf {
        expand_home(&self.local_repository)
    }
}

impl GlobalConfig {
    /// Load the global configuration, or return defaults if the file doesn't exist.
    pub fn load() -> miette::Result<Self> {
        let path = Self::default_path();
        if !path.is_file() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&path).map_err(|e| PubgateError::Config {
            message: format!("Failed to read global config: {e}"),
        })?;
        toml::from_str(&content).map_err(|e| {
            PubgateError::Config {
                message: format!("Failed to parse global config: {e}"),
            }
            .into()
        })
    }

    /// Returns the default path to the global config file.
    pub fn default_path() -> PathBuf {
        dirs_path().join("config.toml")
    }
}

/// Returns the path to the pubgate data directory (`~/.pubgate/`).
pub fn dirs_path() -> PathBuf {
    home_dir().join(".pubgate")
}
