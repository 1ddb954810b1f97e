//! Applies move intents reported by the tree to the demo's data.

use treeview::Node;
use treeview::node::find;

/// Move `source_id` under `target`, or to the end of the roots when the
/// target is the drop zone. Leaf targets become internal nodes.
///
/// Returns false and leaves the forest alone when either node is missing or
/// the target sits inside the moved subtree.
pub fn apply_move(forest: &mut Vec<Node>, source_id: &str, target: &Node) -> bool {
    if !target.is_drop_zone() {
        let Some(source) = find(forest, source_id) else {
            return false;
        };
        if source.id == target.id
            || find(source.children(), &target.id).is_some()
            || find(forest, &target.id).is_none()
        {
            return false;
        }
    }

    let Some(source) = detach(forest, source_id) else {
        return false;
    };

    if target.is_drop_zone() {
        forest.push(source);
        return true;
    }

    match find_mut(forest, &target.id) {
        Some(parent) => {
            parent.children.get_or_insert_with(Vec::new).push(source);
            true
        }
        None => false,
    }
}

fn detach(nodes: &mut Vec<Node>, id: &str) -> Option<Node> {
    if let Some(index) = nodes.iter().position(|n| n.id == id) {
        return Some(nodes.remove(index));
    }
    nodes
        .iter_mut()
        .filter_map(|n| n.children.as_mut())
        .find_map(|children| detach(children, id))
}

fn find_mut<'a>(nodes: &'a mut [Node], id: &str) -> Option<&'a mut Node> {
    for node in nodes {
        if node.id == id {
            return Some(node);
        }
        if let Some(children) = node.children.as_mut()
            && let Some(found) = find_mut(children, id)
        {
            return Some(found);
        }
    }
    None
}
