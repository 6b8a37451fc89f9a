//! API request handlers shared by all routes: state, errors, body parsing,
//! health, and the read-only listings.

use crate::seo::{Activity, Entity, SeoStore};
use crate::{AppState, AuthConfig};
use axum::{
    body::Bytes,
    extract::{FromRequest, Request, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use serde_json::{Map, Value};
use std::sync::Arc;

/// Shared server state
pub struct ServerState {
    pub store: Arc<dyn SeoStore>,
    /// `None` denies every request
    pub auth_config: Option<AuthConfig>,
    pub site_name: String,
    pub site_url: String,
    /// Public URL of the API root, published to the admin page
    pub api_url: String,
}

/// Shared API state
pub type ApiState = Arc<ServerState>;

impl From<AppState> for ServerState {
    fn from(state: AppState) -> Self {
        Self {
            store: state.store,
            auth_config: state.config.auth_config.clone(),
            site_name: state.config.site_name.clone(),
            site_url: state.config.site_url.trim_end_matches('/').to_string(),
            api_url: state.config.api_url(),
        }
    }
}

// ============================================================================
// Health check
// ============================================================================

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

// ============================================================================
// Listings
// ============================================================================

/// List recent analysis activities
pub async fn list_activities(
    State(state): State<ApiState>,
) -> Result<Json<Vec<Activity>>, AppError> {
    Ok(Json(state.store.list_activities().await?))
}

/// List content entities
pub async fn list_entities(State(state): State<ApiState>) -> Result<Json<Vec<Entity>>, AppError> {
    Ok(Json(state.store.list_entities().await?))
}

/// Fallback for unknown paths
pub async fn no_route() -> AppError {
    AppError::NotFound("No route was found matching the URL and request method.".to_string())
}

// ============================================================================
// Request body
// ============================================================================

/// JSON object body, parsed leniently.
///
/// A body that is missing, malformed, or not a JSON object yields an empty
/// parameter map; required-field checks then report what is missing.
#[derive(Debug, Default)]
pub struct JsonParams(pub Map<String, Value>);

impl<S: Send + Sync> FromRequest<S> for JsonParams {
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|e| AppError::InvalidBody {
                status: e.status(),
                message: e.body_text(),
            })?;

        let params = match serde_json::from_slice::<Value>(&bytes) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        };
        Ok(Self(params))
    }
}

impl JsonParams {
    /// True when the parameter is absent or holds an empty-ish value
    /// (`null`, `false`, `0`, `""`, `"0"`, `[]`, `{}`).
    pub fn is_empty(&self, key: &str) -> bool {
        match self.0.get(key) {
            None | Some(Value::Null) => true,
            Some(Value::Bool(b)) => !b,
            Some(Value::Number(n)) => n.as_f64() == Some(0.0),
            Some(Value::String(s)) => s.is_empty() || s == "0",
            Some(Value::Array(a)) => a.is_empty(),
            Some(Value::Object(o)) => o.is_empty(),
        }
    }

    /// Scalar parameter as text; compound values read as empty.
    pub fn text(&self, key: &str) -> String {
        match self.0.get(key) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            Some(Value::Bool(true)) => "1".to_string(),
            _ => String::new(),
        }
    }

    /// Non-negative integer parameter given as a number or numeric string
    pub fn unsigned(&self, key: &str) -> Option<u32> {
        match self.0.get(key)? {
            Value::Number(n) => n.as_u64().and_then(|v| u32::try_from(v).ok()),
            Value::String(s) => s.trim().parse().ok(),
            _ => None,
        }
    }
}

// ============================================================================
// Errors
// ============================================================================

/// Generic message for callers lacking permission
pub const FORBIDDEN_MESSAGE: &str = "Sorry, you are not allowed to do that.";

/// API error, rendered as `{code, message, data: {status}}`
#[derive(Debug)]
pub enum AppError {
    Internal(anyhow::Error),
    NotFound(String),
    BadRequest { code: &'static str, message: String },
    /// Body could not be read; keeps the status of the underlying rejection (e.g. 413)
    InvalidBody { status: StatusCode, message: String },
    /// Caller could not be authenticated
    Unauthorized(String),
    /// Caller is authenticated but not allowed
    Forbidden { code: &'static str, message: String },
}

impl AppError {
    /// Missing-required-field validation failure
    pub fn validation(code: &'static str, message: impl Into<String>) -> Self {
        AppError::BadRequest {
            code,
            message: message.into(),
        }
    }

    pub fn forbidden() -> Self {
        AppError::Forbidden {
            code: "rest_forbidden",
            message: FORBIDDEN_MESSAGE.to_string(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::InvalidBody { status, .. } => *status,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden { .. } => StatusCode::FORBIDDEN,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let (code, message) = match self {
            AppError::Internal(e) => {
                tracing::error!("Internal error: {:#}", e);
                ("internal_error", e.to_string())
            }
            AppError::NotFound(msg) => ("rest_no_route", msg),
            AppError::BadRequest { code, message } => (code, message),
            AppError::InvalidBody { message, .. } => ("rest_invalid_body", message),
            AppError::Unauthorized(msg) => ("rest_forbidden", msg),
            AppError::Forbidden { code, message } => (code, message),
        };

        let body = Json(serde_json::json!({
            "code": code,
            "message": message,
            "data": { "status": status.as_u16() }
        }));

        (status, body).into_response()
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err)
    }
}
