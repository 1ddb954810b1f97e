//! Flattening of the forest into the visible row sequence.

use crate::expansion::ExpansionStore;
use crate::node::Node;

/// A visible row in the flattened tree.
#[derive(Debug, Clone, Copy)]
pub struct FlatNode<'a> {
    /// The node itself.
    pub node: &'a Node,
    /// Depth in tree (0 = root).
    pub depth: u16,
    /// Whether the node has a `children` list.
    pub is_internal: bool,
    /// Whether the node is currently expanded.
    pub is_expanded: bool,
}

impl FlatNode<'_> {
    /// Id of the row's node.
    pub fn id(&self) -> &str {
        &self.node.id
    }
}

/// Pre-order flattening of `forest`, descending only into expanded
/// internal nodes. The result is the top-to-bottom row order.
pub fn flatten<'a>(forest: &'a [Node], expanded: &ExpansionStore) -> Vec<FlatNode<'a>> {
    let mut out = Vec::new();
    collect_visible(forest, expanded, 0, &mut out);
    out
}

fn collect_visible<'a>(
    nodes: &'a [Node],
    expanded: &ExpansionStore,
    depth: u16,
    out: &mut Vec<FlatNode<'a>>,
) {
    for node in nodes {
        let is_internal = node.is_internal();
        let is_expanded = is_internal && expanded.is_expanded(&node.id);

        out.push(FlatNode {
            node,
            depth,
            is_internal,
            is_expanded,
        });

        if is_expanded {
            collect_visible(node.children(), expanded, depth + 1, out);
        }
    }
}

/// Position of `id` in the visible rows.
pub fn position(visible: &[FlatNode<'_>], id: Option<&str>) -> Option<usize> {
    let id = id?;
    visible.iter().position(|row| row.node.id == id)
}
