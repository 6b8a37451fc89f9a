//! Auth middleware for Axum routes.
//!
//! Validates the JWT Bearer token, the anti-forgery nonce and the caller's
//! capability, then injects Claims into request extensions.
//! Implements deny-by-default: if `auth_config` is None, all requests are rejected.

use crate::api::handlers::{ApiState, AppError, ServerState, FORBIDDEN_MESSAGE};
use crate::auth::jwt::{decode_jwt, Claims, MANAGE_OPTIONS};
use crate::auth::nonce::{verify_nonce, NonceAge, NONCE_HEADER, REST_ACTION};
use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use tracing::debug;

/// Middleware guarding the analysis API.
///
/// # Behavior
/// 1. If `auth_config` is `None` → 403 (deny-by-default)
/// 2. Missing or invalid `Authorization: Bearer <token>` → 401
/// 3. Missing `X-WP-Nonce` → 401; nonce not valid for this user → 403
/// 4. Token lacks the `manage_options` capability → 403
/// 5. Inject `Claims` into request extensions for downstream handlers
pub async fn require_admin(
    State(state): State<ApiState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let claims = authenticate(&state, req.headers(), true)?;
    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}

/// Same as [`require_admin`] without the nonce check.
///
/// Used by the admin page, which is where callers obtain their nonce.
pub async fn require_admin_session(
    State(state): State<ApiState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let claims = authenticate(&state, req.headers(), false)?;
    req.extensions_mut().insert(claims);
    Ok(next.run(req).await)
}

fn authenticate(
    state: &ServerState,
    headers: &HeaderMap,
    check_nonce: bool,
) -> Result<Claims, AppError> {
    // 1. Deny-by-default if no auth config
    let auth_config = state.auth_config.as_ref().ok_or_else(|| {
        debug!("Auth not configured, denying request");
        AppError::forbidden()
    })?;

    // 2. Bearer token
    let token = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .ok_or_else(|| {
            debug!("Missing or malformed Authorization header");
            AppError::Unauthorized(FORBIDDEN_MESSAGE.to_string())
        })?;

    let claims = decode_jwt(token, &auth_config.jwt_secret).map_err(|e| {
        debug!("Rejected bearer token: {:#}", e);
        AppError::Unauthorized(FORBIDDEN_MESSAGE.to_string())
    })?;

    // 3. Nonce
    if check_nonce {
        let nonce = headers
            .get(NONCE_HEADER)
            .and_then(|v| v.to_str().ok())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| {
                debug!("Missing nonce for user {}", claims.sub);
                AppError::Unauthorized(FORBIDDEN_MESSAGE.to_string())
            })?;

        let age = verify_nonce(
            auth_config.nonce_secret(),
            nonce,
            REST_ACTION,
            &claims.sub,
            chrono::Utc::now().timestamp(),
            auth_config.nonce_lifetime_secs,
        )
        .ok_or_else(|| {
            debug!("Invalid nonce for user {}", claims.sub);
            AppError::Forbidden {
                code: "rest_cookie_invalid_nonce",
                message: "Cookie check failed".to_string(),
            }
        })?;

        if age == NonceAge::Aging {
            debug!("Nonce for user {} is in its last tick", claims.sub);
        }
    }

    // 4. Capability
    if !claims.can(MANAGE_OPTIONS) {
        debug!("User {} lacks {}", claims.sub, MANAGE_OPTIONS);
        return Err(AppError::forbidden());
    }

    Ok(claims)
}

// ============================================================================
// Tests
// ============================================================================
