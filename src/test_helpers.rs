//! Test helper factories and mock state builders
//!
//! Provides convenience functions for creating test objects with sensible defaults,
//! and helpers for minting credentials accepted by the auth middleware.
#![allow(dead_code)]

use crate::api::handlers::{ApiState, ServerState};
use crate::auth::jwt::{encode_jwt, TokenSubject, MANAGE_OPTIONS};
use crate::auth::nonce::{create_nonce, REST_ACTION};
use crate::auth::AuthUser;
use crate::{AppState, AuthConfig, Config};
use std::sync::Arc;

/// Signing secret shared by every test credential
pub const TEST_SECRET: &str = "test-secret-key-minimum-32-chars!!";

// ============================================================================
// Mock state builders
// ============================================================================

pub fn test_auth_config() -> AuthConfig {
    AuthConfig::new(TEST_SECRET)
}

/// Config with defaults and an ephemeral port
pub fn test_config(auth_config: Option<AuthConfig>) -> Config {
    Config {
        server_host: "127.0.0.1".to_string(),
        server_port: 0,
        site_name: "Semantix".to_string(),
        site_url: "http://localhost:8080".to_string(),
        auth_config,
    }
}

/// Server state backed by the fixture store
pub fn server_state(auth_config: Option<AuthConfig>) -> ApiState {
    Arc::new(ServerState::from(AppState::new(test_config(auth_config))))
}

// ============================================================================
// Credentials
// ============================================================================

/// Bearer token for an administrator
pub fn admin_token(user_id: u64) -> String {
    let capabilities = vec![MANAGE_OPTIONS.to_string()];
    let subject = TokenSubject {
        user_id,
        email: "admin@semantix.test",
        name: "Admin",
        capabilities: &capabilities,
    };
    encode_jwt(&subject, TEST_SECRET, 3600).expect("test token")
}

/// REST nonce for `user_id`, valid right now
pub fn nonce_for(user_id: u64) -> String {
    create_nonce(
        TEST_SECRET,
        REST_ACTION,
        &user_id.to_string(),
        chrono::Utc::now().timestamp(),
        86400,
    )
}

pub fn admin_user() -> AuthUser {
    AuthUser {
        user_id: 1,
        email: "admin@semantix.test".to_string(),
        name: "Admin".to_string(),
        capabilities: vec![MANAGE_OPTIONS.to_string()],
    }
}

// ============================================================================
// Response helpers
// ============================================================================

/// Read a response body as JSON
pub async fn body_json(resp: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .expect("read body");
    serde_json::from_slice(&bytes).expect("json body")
}
