//! Client configuration
//!
//! Settings are layered: built-in defaults, then an optional TOML file, then
//! the `ASSET_BRAIN_URL` environment variable, then command-line flags (applied
//! by the caller).
//!
//! ```toml
//! base_url = "http://localhost:8000"
//! default_property_id = "12_elm_street"
//! request_timeout_secs = 30
//! query_ordering = "latest_issued"
//! ```

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::query::QueryOrdering;

/// Environment variable that overrides the backend origin
pub const BASE_URL_ENV: &str = "ASSET_BRAIN_URL";

/// Dashboard client configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Backend origin; every endpoint path is appended to it
    pub base_url: String,
    /// Property that uploads are filed under unless one is given explicitly
    pub default_property_id: String,
    /// Client-wide request timeout. Unset means the transport default.
    pub request_timeout_secs: Option<u64>,
    /// How overlapping query responses are reconciled
    pub query_ordering: QueryOrdering,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            default_property_id: default_property_id(),
            request_timeout_secs: None,
            query_ordering: QueryOrdering::default(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_property_id() -> String {
    "12_elm_street".to_string()
}

impl ClientConfig {
    /// Load configuration from a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the TOML is malformed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::from_str(&content)
    }

    /// Parse configuration from a TOML string. Missing keys take defaults.
    pub fn from_str(s: &str) -> anyhow::Result<Self> {
        toml::from_str(s).context("Failed to parse TOML configuration")
    }

    /// Apply the `ASSET_BRAIN_URL` override from the process environment
    pub fn with_env_overrides(self) -> Self {
        self.with_base_url(std::env::var(BASE_URL_ENV).ok())
    }

    /// Replace the base URL when `base_url` is a non-blank value
    pub fn with_base_url(mut self, base_url: Option<String>) -> Self {
        if let Some(url) = base_url.filter(|u| !u.trim().is_empty()) {
            self.base_url = url.trim().to_string();
        }
        self
    }

    /// Base URL without trailing slashes, ready for path concatenation
    pub fn normalized_base_url(&self) -> String {
        self.base_url.trim_end_matches('/').to_string()
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}
