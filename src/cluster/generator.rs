//! Topic-cluster generation
//!
//! Produces the fixed two-level template: a core node for the topic and one
//! branch each for strategy and tools content.

use crate::seo::ClusterNode;

pub const CORE_NODE_ID: &str = "core";

/// Tree depth produced by [`generate`], whatever depth was requested
pub const GENERATED_DEPTH: u32 = 2;

/// Region and format hints accompanying a generation request.
///
/// They are recorded for logging only and never change the tree shape.
#[derive(Debug, Clone, Default)]
pub struct ClusterHints {
    pub region: Option<String>,
    pub format: Option<String>,
    pub depth: Option<u32>,
}

struct Branch {
    id: &'static str,
    suffix: &'static str,
    color: &'static str,
    x: i32,
    search_volume: u64,
    intent: &'static str,
}

const BRANCHES: [Branch; 2] = [
    Branch {
        id: "cluster-1",
        suffix: "Strategy",
        color: "#A0F0D0",
        x: 200,
        search_volume: 12000,
        intent: "Informational",
    },
    Branch {
        id: "cluster-2",
        suffix: "Tools",
        color: "#B8D1FF",
        x: 600,
        search_volume: 8500,
        intent: "Commercial",
    },
];

/// Build the cluster tree for an already-sanitized, non-empty topic.
pub fn generate(topic: &str, hints: &ClusterHints) -> ClusterNode {
    if let Some(depth) = hints.depth {
        if depth != GENERATED_DEPTH {
            tracing::debug!(
                "Requested cluster depth {} for '{}', generating depth {}",
                depth,
                topic,
                GENERATED_DEPTH
            );
        }
    }

    let children = BRANCHES
        .iter()
        .map(|branch| ClusterNode {
            id: branch.id.to_string(),
            title: format!("{} {}", topic, branch.suffix),
            level: 1,
            color: branch.color.to_string(),
            expanded: true,
            x: branch.x,
            y: 250,
            search_volume: Some(branch.search_volume),
            intent: Some(branch.intent.to_string()),
            children: Vec::new(),
        })
        .collect();

    ClusterNode {
        id: CORE_NODE_ID.to_string(),
        title: topic.to_string(),
        level: 0,
        color: "#FFD93D".to_string(),
        expanded: true,
        x: 400,
        y: 100,
        search_volume: None,
        intent: None,
        children,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_two_fixed_children() {
        let root = generate("Widgets", &ClusterHints::default());

        assert_eq!(root.id, "core");
        assert_eq!(root.title, "Widgets");
        assert_eq!((root.x, root.y), (400, 100));
        assert!(root.search_volume.is_none());

        let titles: Vec<_> = root.children.iter().map(|c| c.title.as_str()).collect();
        assert_eq!(titles, vec!["Widgets Strategy", "Widgets Tools"]);

        let tools = &root.children[1];
        assert_eq!(tools.id, "cluster-2");
        assert_eq!(tools.level, 1);
        assert_eq!(tools.search_volume, Some(8500));
        assert_eq!(tools.intent.as_deref(), Some("Commercial"));
        assert!(tools.children.is_empty());
    }

    #[test]
    fn test_depth_hint_does_not_change_shape() {
        let shallow = generate(
            "Coffee",
            &ClusterHints {
                depth: Some(1),
                ..Default::default()
            },
        );
        let deep = generate(
            "Coffee",
            &ClusterHints {
                region: Some("Canada".into()),
                format: Some("Video".into()),
                depth: Some(3),
            },
        );

        assert_eq!(shallow, deep);
        assert_eq!(deep.children.len(), 2);
    }
}
