//! Admin bootstrap page
//!
//! Serves the shell the dashboard mounts into, with the client context
//! (API root, a fresh nonce for the caller, site identity) inlined.

use crate::auth::nonce::{create_nonce, REST_ACTION};
use crate::auth::AuthUser;
use crate::client::ClientContext;
use axum::{extract::State, response::Html};

use super::handlers::{ApiState, AppError};

/// Element id the dashboard mounts into
pub const ROOT_ELEMENT_ID: &str = "semantix-root";

pub async fn admin_page(
    State(state): State<ApiState>,
    user: AuthUser,
) -> Result<Html<String>, AppError> {
    let auth = state
        .auth_config
        .as_ref()
        .ok_or_else(AppError::forbidden)?;

    let nonce = create_nonce(
        auth.nonce_secret(),
        REST_ACTION,
        &user.user_id.to_string(),
        chrono::Utc::now().timestamp(),
        auth.nonce_lifetime_secs,
    );

    let context = ClientContext {
        api_url: state.api_url.clone(),
        nonce,
        site_url: state.site_url.clone(),
        site_name: state.site_name.clone(),
        admin_url: format!("{}/wp-admin/", state.site_url),
        plugin_url: format!("{}/wp-content/plugins/semantix-seo/", state.site_url),
    };

    let data = serde_json::to_string(&context)
        .map_err(|e| AppError::Internal(e.into()))?
        .replace("</", "<\\/");

    Ok(Html(format!(
        "<!DOCTYPE html>\n<html>\n<head><title>Semantix SEO Analyzer</title></head>\n<body>\n\
         <div id=\"{}\"></div>\n<script>window.semantixData = {};</script>\n</body>\n</html>\n",
        ROOT_ELEMENT_ID, data
    )))
}
