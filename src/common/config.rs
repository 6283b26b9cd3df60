//! # Configuration Utilities
//!
//! Configuration structures and TOML parsing used by the secret client and
//! its command-line front end.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;

/// Base URL used when no configuration is supplied.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Load a TOML configuration file and deserialize it into the specified type.
///
/// # Arguments
/// - `path`: Path to the TOML configuration file
///
/// # Returns
/// - `Ok(T)`: Successfully loaded and parsed configuration
/// - `Err`: File I/O or parsing error
///
/// # Example
/// ```ignore
/// let config: ClientConfig = load_config("config/client.toml")?;
/// ```
pub fn load_config<T>(path: &str) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
{
    let content = fs::read_to_string(path)?;
    let config: T = toml::from_str(&content)?;
    Ok(config)
}

/// Secret client configuration loaded from a TOML file.
///
/// # Example TOML
///
/// ```toml
/// [client]
/// base_url = "http://localhost:8000"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Connection settings for the secrets server
    #[serde(default)]
    pub client: ClientInfo,
}

/// Where the secrets server lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientInfo {
    /// Base URL of the secrets server (e.g., "http://localhost:8000").
    /// The `secrets` collection is resolved relative to it.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for ClientInfo {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl ClientConfig {
    /// Builds a configuration pointing at `base_url`.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: ClientInfo {
                base_url: base_url.into(),
            },
        }
    }

    /// Loads client configuration from a TOML file.
    ///
    /// Missing keys fall back to their defaults, so an empty file yields
    /// [`DEFAULT_BASE_URL`].
    pub fn from_file(path: &str) -> Result<Self> {
        load_config(path)
    }
}
