//! Project API handlers

use crate::auth::AuthUser;
use crate::seo::{sanitize, Project, ProjectStats};
use axum::{extract::State, Json};

use super::handlers::{ApiState, AppError, JsonParams};

// ============================================================================
// Handlers
// ============================================================================

/// List all projects
pub async fn list_projects(State(state): State<ApiState>) -> Result<Json<Vec<Project>>, AppError> {
    Ok(Json(state.store.list_projects().await?))
}

/// Create a new project.
///
/// Nothing is stored: the sanitized record is echoed back with a fresh id
/// and zeroed statistics.
pub async fn create_project(
    user: AuthUser,
    params: JsonParams,
) -> Result<Json<Project>, AppError> {
    if params.is_empty("name") || params.is_empty("url") {
        return Err(AppError::validation(
            "missing_fields",
            "Name and URL are required",
        ));
    }

    let project = Project {
        id: new_project_id(),
        name: sanitize::text_field(&params.text("name")),
        url: sanitize::url(&params.text("url")),
        description: sanitize::textarea_field(&params.text("description")),
        status: "active".to_string(),
        created_at: chrono::Local::now().format("%Y-%m-%d").to_string(),
        stats: ProjectStats::not_analyzed(),
    };

    tracing::info!(
        "Project '{}' ({}) created by user {}",
        project.name,
        project.id,
        user.user_id
    );

    Ok(Json(project))
}

// ============================================================================
// Utilities
// ============================================================================

/// Random four-digit project id
fn new_project_id() -> u32 {
    rand::random_range(1000..=9999)
}
