//! Bootstrap data the host hands to API clients: where the API lives, the
//! caller's nonce, and site identity.

use serde::{Deserialize, Serialize};

/// API root used when no context is provided
pub const DEFAULT_API_URL: &str = "http://localhost:8080/wp-json/semantix/v1/";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClientContext {
    pub api_url: String,
    pub nonce: String,
    pub site_url: String,
    pub site_name: String,
    pub admin_url: String,
    pub plugin_url: String,
}

impl ClientContext {
    /// Context pointing at `api_url` with the given nonce
    pub fn new(api_url: impl Into<String>, nonce: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            nonce: nonce.into(),
            ..Default::default()
        }
    }

    /// Read the context from `SEMANTIX_*` environment variables.
    pub fn from_env() -> Self {
        let var = |name: &str| std::env::var(name).unwrap_or_default();
        Self {
            api_url: var("SEMANTIX_API_URL"),
            nonce: var("SEMANTIX_NONCE"),
            site_url: var("SEMANTIX_SITE_URL"),
            site_name: var("SEMANTIX_SITE_NAME"),
            admin_url: var("SEMANTIX_ADMIN_URL"),
            plugin_url: var("SEMANTIX_PLUGIN_URL"),
        }
    }

    /// Look up a value by its camelCase key; empty values read as absent.
    pub fn get(&self, key: &str) -> Option<&str> {
        let value = match key {
            "apiUrl" => &self.api_url,
            "nonce" => &self.nonce,
            "siteUrl" => &self.site_url,
            "siteName" => &self.site_name,
            "adminUrl" => &self.admin_url,
            "pluginUrl" => &self.plugin_url,
            _ => return None,
        };
        Some(value.as_str()).filter(|v| !v.is_empty())
    }

    /// API root, falling back to [`DEFAULT_API_URL`]
    pub fn api_url(&self) -> &str {
        self.get("apiUrl").unwrap_or(DEFAULT_API_URL)
    }

    /// Nonce to attach to requests; empty when none was provided
    pub fn nonce(&self) -> &str {
        self.get("nonce").unwrap_or("")
    }
}
