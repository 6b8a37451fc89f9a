//! AuthUser extractor for Axum handlers.
//!
//! Extracts the authenticated user's identity from request extensions
//! (populated by the `require_admin` middleware).

use crate::api::handlers::{ApiState, AppError};
use crate::auth::jwt::Claims;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;

/// Authenticated user identity extracted from JWT claims.
///
/// ```rust,ignore
/// async fn my_handler(user: AuthUser) -> impl IntoResponse {
///     format!("Hello, {}!", user.name)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: u64,
    pub email: String,
    pub name: String,
    pub capabilities: Vec<String>,
}

impl AuthUser {
    /// Create from JWT claims
    pub(crate) fn from_claims(claims: &Claims) -> Result<Self, AppError> {
        let user_id: u64 = claims
            .sub
            .parse()
            .map_err(|_| AppError::Unauthorized("Invalid user ID in token".to_string()))?;

        Ok(Self {
            user_id,
            email: claims.email.clone(),
            name: claims.name.clone(),
            capabilities: claims.capabilities.clone(),
        })
    }
}

impl FromRequestParts<ApiState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &ApiState,
    ) -> Result<Self, Self::Rejection> {
        let claims = parts.extensions.get::<Claims>().ok_or_else(|| {
            AppError::Unauthorized("Authentication required: no claims in request".to_string())
        })?;

        Self::from_claims(claims)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn claims(sub: &str) -> Claims {
        Claims {
            sub: sub.to_string(),
            email: "alice@semantix.test".to_string(),
            name: "Alice".to_string(),
            capabilities: vec!["manage_options".to_string()],
            iat: 0,
            exp: 0,
        }
    }

    #[test]
    fn test_auth_user_from_valid_claims() {
        let user = AuthUser::from_claims(&claims("42")).unwrap();
        assert_eq!(user.user_id, 42);
        assert_eq!(user.email, "alice@semantix.test");
        assert_eq!(user.name, "Alice");
        assert_eq!(user.capabilities, vec!["manage_options".to_string()]);
    }

    #[test]
    fn test_auth_user_from_invalid_id() {
        assert!(AuthUser::from_claims(&claims("not-a-number")).is_err());
    }
}
