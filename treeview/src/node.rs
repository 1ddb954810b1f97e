//! Tree model: nodes and the root collection handed to the controller.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TreeError};

/// Id of the drop-zone sentinel.
pub const DROP_ZONE_ID: &str = "";

const DROP_ZONE_NAME: &str = "parent_div";

/// Callback invoked when a node is activated.
pub type ActivateFn = Arc<dyn Fn() + Send + Sync>;

/// One entry in the tree.
///
/// A node is internal when `children` is `Some`, even if the vector is
/// empty, and a leaf when it is `None`.
#[derive(Clone, Serialize, Deserialize)]
pub struct Node {
    /// Unique, stable identifier.
    pub id: String,
    /// Display label.
    pub name: String,
    /// Child nodes (`None` for leaves).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Node>>,
    /// Whether this node may originate a drag.
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub draggable: bool,
    /// Whether this node accepts drops.
    #[serde(default = "default_droppable")]
    pub droppable: bool,
    /// Invoked on click-equivalent activation.
    #[serde(skip)]
    pub on_activate: Option<ActivateFn>,
}

fn default_droppable() -> bool {
    true
}

impl Node {
    /// Create a leaf node.
    pub fn leaf(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            children: None,
            draggable: false,
            droppable: true,
            on_activate: None,
        }
    }

    /// Create an internal node with the given children.
    pub fn branch(id: impl Into<String>, name: impl Into<String>, children: Vec<Node>) -> Self {
        Self {
            children: Some(children),
            ..Self::leaf(id, name)
        }
    }

    /// The sentinel target for drops below every item.
    ///
    /// Its id never names a real node. What a drop on it means is up to
    /// whoever handles the move intent.
    pub fn drop_zone() -> Self {
        Self::leaf(DROP_ZONE_ID, DROP_ZONE_NAME)
    }

    /// Whether this is the drop-zone sentinel.
    pub fn is_drop_zone(&self) -> bool {
        self.id == DROP_ZONE_ID
    }

    /// Set whether the node can be dragged.
    pub fn draggable(mut self, draggable: bool) -> Self {
        self.draggable = draggable;
        self
    }

    /// Set whether the node accepts drops.
    pub fn droppable(mut self, droppable: bool) -> Self {
        self.droppable = droppable;
        self
    }

    /// Set the activation callback.
    pub fn on_activate(mut self, f: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_activate = Some(Arc::new(f));
        self
    }

    /// Whether this node is internal (has a `children` list).
    pub fn is_internal(&self) -> bool {
        self.children.is_some()
    }

    /// Children, empty for leaves.
    pub fn children(&self) -> &[Node] {
        self.children.as_deref().unwrap_or(&[])
    }

    /// Run the activation callback, if any.
    pub fn activate(&self) {
        if let Some(f) = &self.on_activate {
            f();
        }
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("children", &self.children)
            .field("draggable", &self.draggable)
            .field("droppable", &self.droppable)
            .field("on_activate", &self.on_activate.is_some())
            .finish()
    }
}

/// Root collection: a single node or a forest.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TreeData {
    Forest(Vec<Node>),
    Single(Node),
}

impl TreeData {
    /// Parse tree data from JSON (an object or an array of objects).
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Normalize to an ordered list of roots.
    pub fn into_forest(self) -> Vec<Node> {
        match self {
            TreeData::Forest(nodes) => nodes,
            TreeData::Single(node) => vec![node],
        }
    }
}

impl From<Node> for TreeData {
    fn from(node: Node) -> Self {
        TreeData::Single(node)
    }
}

impl From<Vec<Node>> for TreeData {
    fn from(nodes: Vec<Node>) -> Self {
        TreeData::Forest(nodes)
    }
}

/// Find a node by id anywhere in the forest, collapsed branches included.
pub fn find<'a>(forest: &'a [Node], id: &str) -> Option<&'a Node> {
    for node in forest {
        if node.id == id {
            return Some(node);
        }
        if let Some(found) = find(node.children(), id) {
            return Some(found);
        }
    }
    None
}

/// Ids of the proper ancestors of `id`, outermost first.
///
/// Returns `None` when no node has that id.
pub fn ancestors_of(forest: &[Node], id: &str) -> Option<Vec<String>> {
    let mut path = Vec::new();
    if walk_to(forest, id, &mut path) {
        Some(path)
    } else {
        None
    }
}

fn walk_to(nodes: &[Node], target: &str, path: &mut Vec<String>) -> bool {
    for node in nodes {
        if node.id == target {
            return true;
        }
        path.push(node.id.clone());
        if walk_to(node.children(), target, path) {
            return true;
        }
        path.pop();
    }
    false
}

/// Check that every id in the forest is unique.
///
/// The controller never calls this; duplicate ids make selection and
/// expansion ambiguous, so hosts that build trees from untrusted data can
/// check up front.
pub fn validate(forest: &[Node]) -> Result<()> {
    let mut seen = HashSet::new();
    check_unique(forest, &mut seen)
}

fn check_unique<'a>(nodes: &'a [Node], seen: &mut HashSet<&'a str>) -> Result<()> {
    for node in nodes {
        if !seen.insert(node.id.as_str()) {
            return Err(TreeError::DuplicateId(node.id.clone()));
        }
        check_unique(node.children(), seen)?;
    }
    Ok(())
}
