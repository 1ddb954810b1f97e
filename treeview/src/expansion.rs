//! Expansion state: the set of node ids whose children are shown.

use std::collections::HashSet;

use crate::node::{Node, ancestors_of};

/// Set of expanded node ids.
///
/// Ids are not checked against the tree. Expanding a leaf's id is harmless
/// because flattening only consults the set for internal nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionStore {
    expanded: HashSet<String>,
}

impl ExpansionStore {
    /// Create an empty store (everything collapsed).
    pub fn new() -> Self {
        Self::default()
    }

    /// Store with every proper ancestor of `id` expanded, so that `id` is
    /// visible. Empty if `id` is not in the forest.
    pub fn from_ancestors_of(forest: &[Node], id: &str) -> Self {
        Self {
            expanded: ancestors_of(forest, id)
                .unwrap_or_default()
                .into_iter()
                .collect(),
        }
    }

    /// Expand every internal node in the forest.
    pub fn expand_all(&mut self, forest: &[Node]) {
        collect_internal(forest, &mut self.expanded);
    }

    /// Whether `id` is expanded.
    pub fn is_expanded(&self, id: &str) -> bool {
        self.expanded.contains(id)
    }

    /// Expand `id`. Returns true if it was collapsed before.
    pub fn expand(&mut self, id: &str) -> bool {
        self.expanded.insert(id.to_string())
    }

    /// Collapse `id`. Returns true if it was expanded before.
    pub fn collapse(&mut self, id: &str) -> bool {
        self.expanded.remove(id)
    }

    /// Flip `id`. Returns the new state (true = expanded).
    pub fn toggle(&mut self, id: &str) -> bool {
        if self.expanded.remove(id) {
            false
        } else {
            self.expanded.insert(id.to_string());
            true
        }
    }

    /// Expanded ids, sorted for deterministic ordering.
    pub fn ids(&self) -> Vec<String> {
        let mut ids: Vec<_> = self.expanded.iter().cloned().collect();
        ids.sort();
        ids
    }

    /// Number of expanded ids.
    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    /// Whether nothing is expanded.
    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }
}

fn collect_internal(nodes: &[Node], out: &mut HashSet<String>) {
    for node in nodes {
        if node.is_internal() {
            out.insert(node.id.clone());
            collect_internal(node.children(), out);
        }
    }
}
