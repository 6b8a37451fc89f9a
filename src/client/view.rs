//! Terminal views for API records

use crate::seo::{Activity, ActivityStatus, ClusterNode, Entity, Project};

/// How a cluster tree is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum ViewMode {
    /// Positioned node boxes with metrics
    #[default]
    Tree,
    /// Indented outline of titles
    List,
}

pub fn status_badge(status: ActivityStatus) -> String {
    format!("[{}]", status.label())
}

/// Group digits in threes: `12000` → `12,000`
pub fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Entity search and facet filter.
///
/// `None` facets match everything; the query matches title or description
/// case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct EntityFilter {
    pub query: Option<String>,
    pub entity_type: Option<String>,
    pub status: Option<String>,
}

impl EntityFilter {
    pub fn matches(&self, entity: &Entity) -> bool {
        let matches_query = match self.query.as_deref() {
            Some(q) if !q.is_empty() => {
                let q = q.to_lowercase();
                entity.title.to_lowercase().contains(&q)
                    || entity.description.to_lowercase().contains(&q)
            }
            _ => true,
        };
        let matches_type = self
            .entity_type
            .as_deref()
            .is_none_or(|t| entity.entity_type == t);
        let matches_status = self.status.as_deref().is_none_or(|s| entity.status == s);

        matches_query && matches_type && matches_status
    }

    pub fn apply<'a>(&self, entities: &'a [Entity]) -> Vec<&'a Entity> {
        entities.iter().filter(|e| self.matches(e)).collect()
    }
}

// ============================================================================
// Renderers
// ============================================================================

pub fn render_cluster(root: &ClusterNode, mode: ViewMode) -> String {
    let lines: Vec<String> = root
        .walk()
        .map(|placed| {
            let node = placed.node;
            let indent = "  ".repeat(placed.depth);
            let marker = if !node.expanded && !node.children.is_empty() {
                "+"
            } else if placed.is_root {
                "*"
            } else {
                "-"
            };

            match mode {
                ViewMode::List => format!("{}{} {}", indent, marker, node.title),
                ViewMode::Tree => {
                    let mut line = format!(
                        "{}{} {} @ ({}, {})",
                        indent, marker, node.title, placed.position.x, placed.position.y
                    );
                    if let Some(volume) = node.search_volume {
                        line.push_str(&format!(" | {} searches/mo", format_thousands(volume)));
                    }
                    if let Some(intent) = &node.intent {
                        line.push_str(&format!(" | {}", intent));
                    }
                    line
                }
            }
        })
        .collect();

    lines.join("\n")
}

pub fn render_projects(projects: &[Project]) -> String {
    let mut lines = vec![
        format!(
            "{:<6} {:<24} {:<32} {:<6} {}",
            "ID", "NAME", "URL", "SCORE", "COVERAGE"
        ),
        "-".repeat(80),
    ];
    for p in projects {
        lines.push(format!(
            "{:<6} {:<24} {:<32} {:<6} {}",
            p.id,
            p.name,
            p.url,
            format!("{}%", p.stats.semantic_score),
            p.stats.entity_coverage
        ));
    }
    lines.join("\n")
}

pub fn render_activities(activities: &[Activity]) -> String {
    let mut lines = Vec::with_capacity(activities.len());
    for a in activities {
        lines.push(format!(
            "{:<14} {} ({}, {})\n               {}",
            status_badge(a.status),
            a.action,
            a.project,
            a.timestamp,
            a.details
        ));
    }
    lines.join("\n")
}

pub fn render_entities(entities: &[&Entity]) -> String {
    if entities.is_empty() {
        return "No entities match the current filters".to_string();
    }

    let lines: Vec<String> = entities
        .iter()
        .map(|e| {
            format!(
                "{} {} [{} / {}] {} searches/mo, {}\n    {}\n    {}",
                e.icon.glyph(),
                e.title,
                e.entity_type,
                e.status,
                format_thousands(e.search_volume),
                e.intent,
                e.description,
                e.last_modified
            )
        })
        .collect();
    lines.join("\n")
}

/// One-line error banner for the terminal
pub fn error_banner(message: &str) -> String {
    format!("!! {}", message)
}
