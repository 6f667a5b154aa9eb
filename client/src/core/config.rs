//! # Client Configuration
//!
//! Runtime configuration sourced from environment variables with compiled
//! defaults. Nothing here is hot-reloaded; the config is read once at
//! startup and passed by reference to the components that need it.

use std::path::PathBuf;

/// Default backend base URL when `CARTLINK_API_URL` is unset.
const DEFAULT_API_URL: &str = "http://127.0.0.1:3000";

/// Default local data directory when `CARTLINK_DATA_DIR` is unset.
const DEFAULT_DATA_DIR: &str = "./.cartlink";

/// Client runtime configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the backend API, without a trailing slash.
    pub api_base_url: String,
    /// Directory holding the persisted session vault.
    pub data_dir: PathBuf,
}

impl ClientConfig {
    /// Build a configuration from environment variables, falling back to
    /// compiled defaults.
    ///
    /// - `CARTLINK_API_URL` - backend base URL
    /// - `CARTLINK_DATA_DIR` - local data directory
    pub fn from_env() -> Self {
        let api_base_url = std::env::var("CARTLINK_API_URL")
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let data_dir = std::env::var("CARTLINK_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_DIR));

        Self {
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            data_dir,
        }
    }

    /// Explicit constructor, mainly for tests.
    pub fn new(api_base_url: impl Into<String>, data_dir: impl Into<PathBuf>) -> Self {
        let api_base_url: String = api_base_url.into();
        Self {
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            data_dir: data_dir.into(),
        }
    }

    /// Path of the persisted session vault document.
    pub fn vault_path(&self) -> PathBuf {
        self.data_dir.join("session.json")
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL, DEFAULT_DATA_DIR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_stripped() {
        let config = ClientConfig::new("http://api.example.com/", "/tmp/cartlink");
        assert_eq!(config.api_base_url, "http://api.example.com");
    }

    #[test]
    fn test_vault_path_is_under_data_dir() {
        let config = ClientConfig::new("http://api.example.com", "/tmp/cartlink");
        assert_eq!(
            config.vault_path(),
            PathBuf::from("/tmp/cartlink/session.json")
        );
    }
}
