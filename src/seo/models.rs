//! SEO analysis records exchanged over the API

use serde::{Deserialize, Serialize};

// ============================================================================
// Projects
// ============================================================================

/// A tracked website/domain with summary optimization statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub name: String,
    pub url: String,
    pub description: String,
    pub status: String,
    /// Calendar date, `YYYY-MM-DD`
    pub created_at: String,
    pub stats: ProjectStats,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectStats {
    pub semantic_score: u32,
    pub entity_coverage: String,
    pub optimization_score: u32,
}

impl ProjectStats {
    /// Statistics of a project that has never been analyzed
    pub fn not_analyzed() -> Self {
        Self {
            semantic_score: 0,
            entity_coverage: "Not analyzed".to_string(),
            optimization_score: 0,
        }
    }
}

/// Body of `POST /projects` as sent by clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewProject {
    pub name: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

// ============================================================================
// Activities
// ============================================================================

/// Progress of a background analysis job, as shown in the activity feed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityStatus {
    Completed,
    Ready,
    Processing,
    #[serde(other)]
    Unknown,
}

impl ActivityStatus {
    /// Badge label shown next to an activity
    pub fn label(&self) -> &'static str {
        match self {
            ActivityStatus::Completed => "Completed",
            ActivityStatus::Ready => "Ready",
            ActivityStatus::Processing => "Processing",
            ActivityStatus::Unknown => "Unknown",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    pub id: u32,
    pub action: String,
    pub project: String,
    /// Human-relative time, e.g. "2 minutes ago"
    pub timestamp: String,
    pub status: ActivityStatus,
    pub details: String,
}

// ============================================================================
// Entities
// ============================================================================

/// Icon attached to an entity card.
///
/// Unknown icon names fall back to [`EntityIcon::FileText`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EntityIcon {
    Search,
    User,
    ShoppingCart,
    Database,
    BarChart3,
    // must stay last for `serde(other)`
    #[default]
    #[serde(other)]
    FileText,
}

impl EntityIcon {
    /// Terminal glyph used when rendering the icon
    pub fn glyph(&self) -> &'static str {
        match self {
            EntityIcon::FileText => "[doc]",
            EntityIcon::Search => "[search]",
            EntityIcon::User => "[user]",
            EntityIcon::ShoppingCart => "[cart]",
            EntityIcon::Database => "[db]",
            EntityIcon::BarChart3 => "[chart]",
        }
    }
}

/// A content/topic item with classification metadata
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entity {
    pub id: u32,
    pub title: String,
    #[serde(rename = "type")]
    pub entity_type: String,
    pub status: String,
    pub description: String,
    pub last_modified: String,
    pub icon: EntityIcon,
    pub color: String,
    pub search_volume: u64,
    pub intent: String,
}

// ============================================================================
// Topic clusters
// ============================================================================

/// A node of a topic-cluster tree.
///
/// `x`/`y` are absolute pixel coordinates assigned by the server.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterNode {
    pub id: String,
    pub title: String,
    pub level: u32,
    pub color: String,
    pub expanded: bool,
    pub x: i32,
    pub y: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_volume: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intent: Option<String>,
    #[serde(default)]
    pub children: Vec<ClusterNode>,
}

/// Body of `POST /clusters` as sent by clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusterRequest {
    pub core_topic: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depth: Option<u32>,
}
