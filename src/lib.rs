//! Semantix SEO
//!
//! Semantic SEO analysis service:
//! - JSON API for projects, analysis activities and content entities
//! - Topic-cluster generation with a positioned render walk
//! - Bearer-token + nonce protected admin routes
//! - HTTP client and terminal views for the API

pub mod api;
pub mod auth;
pub mod client;
pub mod cluster;
pub mod schema;
pub mod seo;

#[cfg(test)]
pub(crate) mod test_helpers;

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;
use std::sync::Arc;

/// Path prefix of every API route
pub const API_BASE_PATH: &str = "/wp-json/semantix/v1";

// ============================================================================
// YAML config structs (deserialization targets)
// ============================================================================

/// Top-level YAML configuration file structure
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct YamlConfig {
    pub server: ServerYamlConfig,
    pub site: SiteYamlConfig,
    /// Auth section; if absent, auth_config will be None and all API calls are denied
    pub auth: Option<AuthConfig>,
}

/// Server configuration section
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerYamlConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerYamlConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 8080,
        }
    }
}

/// Site identity published to the admin page
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteYamlConfig {
    pub name: String,
    pub url: String,
}

impl Default for SiteYamlConfig {
    fn default() -> Self {
        Self {
            name: "Semantix".into(),
            url: "http://localhost:8080".into(),
        }
    }
}

/// Authentication configuration.
///
/// Bearer tokens are HS256 JWTs signed with `jwt_secret`. Nonces are signed
/// with `nonce_secret`, falling back to `jwt_secret` when unset.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// JWT signing secret (HS256, minimum 32 characters)
    pub jwt_secret: String,
    /// JWT token lifetime in seconds (default: 28800 = 8h)
    #[serde(default = "default_jwt_expiry")]
    pub jwt_expiry_secs: u64,
    /// Separate nonce signing secret
    #[serde(default)]
    pub nonce_secret: Option<String>,
    /// Nonce lifetime in seconds (default: 86400 = 24h)
    #[serde(default = "default_nonce_lifetime")]
    pub nonce_lifetime_secs: u64,
}

fn default_jwt_expiry() -> u64 {
    28800 // 8 hours
}

fn default_nonce_lifetime() -> u64 {
    86400
}

impl AuthConfig {
    pub fn new(jwt_secret: impl Into<String>) -> Self {
        Self {
            jwt_secret: jwt_secret.into(),
            jwt_expiry_secs: default_jwt_expiry(),
            nonce_secret: None,
            nonce_lifetime_secs: default_nonce_lifetime(),
        }
    }

    pub fn nonce_secret(&self) -> &str {
        self.nonce_secret.as_deref().unwrap_or(&self.jwt_secret)
    }
}

// ============================================================================
// Runtime config (what the application actually uses)
// ============================================================================

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub server_host: String,
    pub server_port: u16,
    pub site_name: String,
    pub site_url: String,
    /// None when the YAML has no auth section and no secret is in the environment
    pub auth_config: Option<AuthConfig>,
}

impl Config {
    /// Load configuration from environment variables only.
    /// Equivalent to from_yaml_and_env(None).
    pub fn from_env() -> Result<Self> {
        Self::from_yaml_and_env(None)
    }

    /// Load configuration from an optional YAML file, then override with env vars.
    ///
    /// Priority: env var > YAML > default
    ///
    /// If `yaml_path` is None, tries "config.yaml" in CWD. If the file doesn't
    /// exist, falls back to pure env var / defaults.
    pub fn from_yaml_and_env(yaml_path: Option<&Path>) -> Result<Self> {
        let yaml = Self::load_yaml(yaml_path);

        let mut auth_config = yaml.auth;
        if let Ok(secret) = std::env::var("SEMANTIX_JWT_SECRET") {
            match auth_config.as_mut() {
                Some(auth) => auth.jwt_secret = secret,
                None => auth_config = Some(AuthConfig::new(secret)),
            }
        }

        Ok(Self {
            server_host: std::env::var("SERVER_HOST").unwrap_or(yaml.server.host),
            server_port: std::env::var("SERVER_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(yaml.server.port),
            site_name: std::env::var("SEMANTIX_SITE_NAME").unwrap_or(yaml.site.name),
            site_url: std::env::var("SEMANTIX_SITE_URL").unwrap_or(yaml.site.url),
            auth_config,
        })
    }

    /// Try to load and parse a YAML config file. Returns defaults on any failure.
    fn load_yaml(yaml_path: Option<&Path>) -> YamlConfig {
        let default_path = Path::new("config.yaml");
        let path = yaml_path.unwrap_or(default_path);

        match std::fs::read_to_string(path) {
            Ok(contents) => match serde_yaml::from_str(&contents) {
                Ok(config) => {
                    tracing::info!("Loaded config from {}", path.display());
                    config
                }
                Err(e) => {
                    tracing::warn!("Failed to parse {}: {}. Using defaults.", path.display(), e);
                    YamlConfig::default()
                }
            },
            Err(_) => {
                tracing::debug!(
                    "No config file at {}, using env vars / defaults",
                    path.display()
                );
                YamlConfig::default()
            }
        }
    }

    /// Public URL of the API root, with a trailing slash
    pub fn api_url(&self) -> String {
        format!("{}{}/", self.site_url.trim_end_matches('/'), API_BASE_PATH)
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn seo::SeoStore>,
    pub config: Arc<Config>,
}

impl AppState {
    /// Create application state backed by the fixture store
    pub fn new(config: Config) -> Self {
        Self::with_store(config, Arc::new(seo::FixtureStore::new()))
    }

    pub fn with_store(config: Config, store: Arc<dyn seo::SeoStore>) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }
}

// ============================================================================
// Server
// ============================================================================

/// Bind the configured address and serve the API until shutdown.
pub async fn start_server(config: Config) -> Result<()> {
    let addr = format!("{}:{}", config.server_host, config.server_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    serve(listener, AppState::new(config)).await
}

/// Serve the API on an already-bound listener.
pub async fn serve(listener: tokio::net::TcpListener, state: AppState) -> Result<()> {
    if state.config.auth_config.is_none() {
        tracing::warn!("No auth section configured; every API request will be denied");
    }

    let router = api::create_router(Arc::new(api::handlers::ServerState::from(state)));
    let local_addr = listener.local_addr()?;

    tracing::info!("Server listening on http://{}", local_addr);
    tracing::info!("API available under http://{}{}", local_addr, API_BASE_PATH);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

// ============================================================================
// Tests
// ============================================================================
