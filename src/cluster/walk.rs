//! Render walk over a cluster tree
//!
//! Yields every visible node with its absolute position, depth-first and in
//! child order. Children of a collapsed node are never visited.

use crate::seo::ClusterNode;

/// Absolute pixel position of a node box
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

/// A node ready to be drawn
#[derive(Debug, Clone, Copy)]
pub struct PlacedNode<'a> {
    pub node: &'a ClusterNode,
    pub position: Position,
    pub depth: usize,
    pub is_root: bool,
}

/// Lazy pre-order iterator returned by [`ClusterNode::walk`]
pub struct RenderWalk<'a> {
    stack: Vec<(&'a ClusterNode, usize)>,
}

impl<'a> Iterator for RenderWalk<'a> {
    type Item = PlacedNode<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let (node, depth) = self.stack.pop()?;
        if node.expanded {
            self.stack
                .extend(node.children.iter().rev().map(|child| (child, depth + 1)));
        }
        Some(PlacedNode {
            node,
            position: Position {
                x: node.x,
                y: node.y,
            },
            depth,
            is_root: depth == 0,
        })
    }
}

impl ClusterNode {
    /// Start a fresh render walk rooted at this node.
    pub fn walk(&self) -> RenderWalk<'_> {
        RenderWalk {
            stack: vec![(self, 0)],
        }
    }

    /// Find a node anywhere in the subtree, collapsed branches included.
    pub fn find_mut(&mut self, id: &str) -> Option<&mut ClusterNode> {
        if self.id == id {
            return Some(self);
        }
        self.children
            .iter_mut()
            .find_map(|child| child.find_mut(id))
    }

    /// Expand or collapse the node with the given id.
    ///
    /// Returns false when no node has that id.
    pub fn set_expanded(&mut self, id: &str, expanded: bool) -> bool {
        match self.find_mut(id) {
            Some(node) => {
                node.expanded = expanded;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cluster::generator::{generate, ClusterHints};

    fn leaf(id: &str, x: i32, y: i32) -> ClusterNode {
        ClusterNode {
            id: id.to_string(),
            title: id.to_uppercase(),
            level: 2,
            color: "#FFFFFF".to_string(),
            expanded: true,
            x,
            y,
            search_volume: None,
            intent: None,
            children: vec![],
        }
    }

    fn three_level_tree() -> ClusterNode {
        let mut root = generate("Widgets", &ClusterHints::default());
        root.children[0].children = vec![leaf("a", 100, 400), leaf("b", 300, 400)];
        root.children[1].children = vec![leaf("c", 600, 400)];
        root
    }

    fn ids(root: &ClusterNode) -> Vec<String> {
        root.walk().map(|p| p.node.id.clone()).collect()
    }

    #[test]
    fn test_walk_visits_every_node_once_in_preorder() {
        let root = three_level_tree();
        assert_eq!(
            ids(&root),
            vec!["core", "cluster-1", "a", "b", "cluster-2", "c"]
        );
    }

    #[test]
    fn test_walk_reports_positions_and_depth() {
        let root = three_level_tree();
        let placed: Vec<_> = root.walk().collect();

        assert!(placed[0].is_root);
        assert_eq!(placed[0].position, Position { x: 400, y: 100 });
        assert_eq!(placed[2].depth, 2);
        assert_eq!(placed[2].position, Position { x: 100, y: 400 });
        assert!(placed.iter().skip(1).all(|p| !p.is_root));
    }

    #[test]
    fn test_collapsed_node_hides_its_subtree() {
        let mut root = three_level_tree();
        assert!(root.set_expanded("cluster-1", false));

        assert_eq!(ids(&root), vec!["core", "cluster-1", "cluster-2", "c"]);
    }

    #[test]
    fn test_collapsed_root_emits_only_root() {
        let mut root = three_level_tree();
        root.expanded = false;

        assert_eq!(ids(&root), vec!["core"]);
    }

    #[test]
    fn test_walk_is_restartable() {
        let root = three_level_tree();
        assert_eq!(ids(&root), ids(&root));
    }

    #[test]
    fn test_set_expanded_unknown_id() {
        let mut root = three_level_tree();
        assert!(!root.set_expanded("missing", false));
        assert!(root.find_mut("c").is_some());
    }
}
