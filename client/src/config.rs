use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Connection settings for the WordPress/WooCommerce backend.
///
/// `api_base` is the wp-json root (for example
/// `https://shop.example.com/wp-json`); the newsletter endpoint lives on the
/// site root derived from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    pub api_base: String,
    #[serde(default)]
    pub consumer_key: String,
    #[serde(default)]
    pub consumer_secret: String,
    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    30
}

impl ClientConfig {
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
            consumer_key: String::new(),
            consumer_secret: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }

    /// Loads a toml config file. Credentials may come from the
    /// `WOOCOMMERCE_CONSUMER_KEY` / `WOOCOMMERCE_CONSUMER_SECRET`
    /// environment variables instead, so keys stay out of checked-in files.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        let mut config: Self = toml::from_str(&raw)?;
        if let Ok(key) = std::env::var("WOOCOMMERCE_CONSUMER_KEY") {
            config.consumer_key = key;
        }
        if let Ok(secret) = std::env::var("WOOCOMMERCE_CONSUMER_SECRET") {
            config.consumer_secret = secret;
        }
        Ok(config)
    }

    /// Joins a path under the wp-json root.
    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.api_base.trim_end_matches('/'), path)
    }

    /// Site root for non-API endpoints (the newsletter form post).
    pub fn site_base(&self) -> String {
        let base = self.api_base.trim_end_matches('/');
        base.strip_suffix("/wp-json").unwrap_or(base).to_string()
    }
}
