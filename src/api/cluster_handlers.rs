//! Topic-cluster API handlers

use crate::cluster::{self, ClusterHints};
use crate::seo::{sanitize, ClusterNode};
use axum::Json;

use super::handlers::{AppError, JsonParams};

/// Generate a topic-cluster tree for `core_topic`.
///
/// `region`, `format` and `depth` are accepted but do not change the tree.
pub async fn generate_clusters(params: JsonParams) -> Result<Json<ClusterNode>, AppError> {
    let topic = sanitize::text_field(&params.text("core_topic"));
    // "0" counts as blank, like every other required field
    if topic.is_empty() || topic == "0" {
        return Err(AppError::validation("missing_topic", "Core topic is required"));
    }

    let hints = ClusterHints {
        region: Some(sanitize::text_field(&params.text("region"))).filter(|s| !s.is_empty()),
        format: Some(sanitize::text_field(&params.text("format"))).filter(|s| !s.is_empty()),
        depth: params.unsigned("depth"),
    };

    tracing::debug!(
        "Generating clusters for '{}' (region: {:?}, format: {:?}, depth: {:?})",
        topic,
        hints.region,
        hints.format,
        hints.depth
    );

    Ok(Json(cluster::generate(&topic, &hints)))
}
