//! The tree state controller.
//!
//! `TreeController` owns the forest and the expansion, selection and drag
//! state. Every input event is one `&mut self` call that reads the current
//! state, computes the next one, writes it back and then notifies the host.

use std::fmt;

use crossterm::event::KeyEvent;
use log::{debug, trace};

use crate::config::TreeConfig;
use crate::drag::{DragCoordinator, DropOutcome};
use crate::events::{EventResult, nav_key};
use crate::expansion::ExpansionStore;
use crate::flatten::{FlatNode, flatten};
use crate::navigation::{ExpansionChange, NavKey, navigate};
use crate::node::{self, Node, TreeData};
use crate::selection::SelectionStore;

/// Called with the newly selected node (or `None`).
pub type SelectChangeFn = Box<dyn FnMut(Option<&Node>)>;

/// Called with `(source, target)` when a drop is accepted.
pub type DocumentDragFn = Box<dyn FnMut(&Node, &Node)>;

/// State controller for an interactive tree.
///
/// # Example
///
/// ```
/// use treeview::{NavKey, Node, TreeConfig, TreeController};
///
/// let data = Node::branch(
///     "a",
///     "A",
///     vec![Node::leaf("b", "B"), Node::branch("c", "C", vec![Node::leaf("d", "D")])],
/// );
/// let mut tree = TreeController::new(data, TreeConfig::default());
///
/// tree.handle_key(NavKey::ArrowDown);
/// assert_eq!(tree.selected_id(), Some("a"));
///
/// tree.handle_key(NavKey::ArrowRight);
/// let ids: Vec<_> = tree.visible().iter().map(|row| row.id().to_string()).collect();
/// assert_eq!(ids, ["a", "b", "c"]);
/// ```
pub struct TreeController {
    forest: Vec<Node>,
    expansion: ExpansionStore,
    selection: SelectionStore,
    drag: DragCoordinator,
    on_select_change: Option<SelectChangeFn>,
    on_document_drag: Option<DocumentDragFn>,
}

impl TreeController {
    /// Create a controller over `data`.
    pub fn new(data: impl Into<TreeData>, config: TreeConfig) -> Self {
        let forest = data.into().into_forest();

        let mut expansion = match &config.initial_selected_id {
            Some(id) => ExpansionStore::from_ancestors_of(&forest, id),
            None => ExpansionStore::new(),
        };
        if config.expand_all {
            expansion.expand_all(&forest);
        }

        debug!(
            "TreeController: {} roots, selected={:?}, {} expanded",
            forest.len(),
            config.initial_selected_id,
            expansion.len()
        );

        Self {
            forest,
            expansion,
            selection: SelectionStore::with_selected(config.initial_selected_id),
            drag: DragCoordinator::new(),
            on_select_change: None,
            on_document_drag: None,
        }
    }

    /// Register the selection-change callback.
    pub fn on_select_change(mut self, f: impl FnMut(Option<&Node>) + 'static) -> Self {
        self.on_select_change = Some(Box::new(f));
        self
    }

    /// Register the move-intent callback.
    pub fn on_document_drag(mut self, f: impl FnMut(&Node, &Node) + 'static) -> Self {
        self.on_document_drag = Some(Box::new(f));
        self
    }

    // -------------------------------------------------------------------------
    // Data
    // -------------------------------------------------------------------------

    /// Root nodes.
    pub fn roots(&self) -> &[Node] {
        &self.forest
    }

    /// Replace the tree data.
    ///
    /// Expansion and selection are kept as they are; ids that no longer
    /// exist are simply never matched.
    pub fn set_data(&mut self, data: impl Into<TreeData>) {
        self.forest = data.into().into_forest();
        debug!("TreeController: data replaced, {} roots", self.forest.len());
    }

    /// Find a node by id, including nodes inside collapsed branches.
    pub fn find(&self, id: &str) -> Option<&Node> {
        node::find(&self.forest, id)
    }

    /// The visible rows, top to bottom.
    pub fn visible(&self) -> Vec<FlatNode<'_>> {
        flatten(&self.forest, &self.expansion)
    }

    // -------------------------------------------------------------------------
    // Expansion
    // -------------------------------------------------------------------------

    /// The expansion store.
    pub fn expansion(&self) -> &ExpansionStore {
        &self.expansion
    }

    /// Whether the node with `id` is expanded.
    pub fn is_expanded(&self, id: &str) -> bool {
        self.expansion.is_expanded(id)
    }

    /// Expand a node. Returns true if it was collapsed.
    pub fn expand(&mut self, id: &str) -> bool {
        let changed = self.expansion.expand(id);
        if changed {
            debug!("TreeController: expanded {}", id);
        }
        changed
    }

    /// Collapse a node. Returns true if it was expanded.
    pub fn collapse(&mut self, id: &str) -> bool {
        let changed = self.expansion.collapse(id);
        if changed {
            debug!("TreeController: collapsed {}", id);
        }
        changed
    }

    /// Toggle a node. Returns the new state (true = expanded).
    pub fn toggle(&mut self, id: &str) -> bool {
        let expanded = self.expansion.toggle(id);
        debug!("TreeController: toggled {} -> expanded={}", id, expanded);
        expanded
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// The selected id. May name a node that no longer exists.
    pub fn selected_id(&self) -> Option<&str> {
        self.selection.selected()
    }

    /// The selected node, if the selected id still exists.
    pub fn selected_node(&self) -> Option<&Node> {
        self.selection
            .selected()
            .and_then(|id| node::find(&self.forest, id))
    }

    /// Whether `id` is the selected id.
    pub fn is_selected(&self, id: &str) -> bool {
        self.selection.is_selected(id)
    }

    /// Select a node by id, or clear the selection with `None`.
    ///
    /// The selection callback fires every time, even if the id did not
    /// change. Unknown ids are ignored and return false.
    pub fn select(&mut self, id: Option<&str>) -> bool {
        if let Some(id) = id
            && node::find(&self.forest, id).is_none()
        {
            trace!("TreeController: select of unknown id {}", id);
            return false;
        }
        self.selection.select(id);
        debug!("TreeController: selected {:?}", id);
        self.notify_select_change();
        true
    }

    /// Click-equivalent activation of a node.
    ///
    /// Selects it, fires the selection callback and then the node's own
    /// activation callback. Both fire on every activation.
    pub fn activate(&mut self, id: &str) -> bool {
        let Some(node) = node::find(&self.forest, id) else {
            trace!("TreeController: activate of unknown id {}", id);
            return false;
        };
        self.selection.select(Some(id));
        debug!("TreeController: activated {}", id);
        if let Some(f) = self.on_select_change.as_mut() {
            f(Some(node));
        }
        node.activate();
        true
    }

    fn notify_select_change(&mut self) {
        let node = self
            .selection
            .selected()
            .and_then(|id| node::find(&self.forest, id));
        if let Some(f) = self.on_select_change.as_mut() {
            f(node);
        }
    }

    // -------------------------------------------------------------------------
    // Keyboard
    // -------------------------------------------------------------------------

    /// Handle a navigation key.
    ///
    /// Returns `Ignored` when there are no visible rows. The host should
    /// suppress its own default for the key either way, since the tree
    /// captures arrow keys and Enter while focused.
    pub fn handle_key(&mut self, key: NavKey) -> EventResult {
        let nav = {
            let visible = flatten(&self.forest, &self.expansion);
            if visible.is_empty() {
                trace!("TreeController: {} ignored, nothing visible", key);
                return EventResult::Ignored;
            }
            navigate(key, &visible, self.selection.selected(), &self.expansion)
        };

        if nav.is_noop() {
            trace!("TreeController: {} changed nothing", key);
        }

        match nav.expansion {
            Some(ExpansionChange::Expand(id)) => {
                self.expand(&id);
            }
            Some(ExpansionChange::Collapse(id)) => {
                self.collapse(&id);
            }
            None => {}
        }

        if let Some(id) = nav.next_selected {
            self.selection.select(Some(&id));
            debug!("TreeController: {} moved selection to {}", key, id);
            self.notify_select_change();
        }

        EventResult::Consumed
    }

    /// Handle a DOM-style key identifier such as `"ArrowDown"`.
    /// Any other identifier is ignored.
    pub fn handle_key_name(&mut self, name: &str) -> EventResult {
        match name.parse::<NavKey>() {
            Ok(key) => self.handle_key(key),
            Err(e) => {
                trace!("TreeController: {}", e);
                EventResult::Ignored
            }
        }
    }

    /// Handle a crossterm key event.
    pub fn handle_key_event(&mut self, event: &KeyEvent) -> EventResult {
        match nav_key(event) {
            Some(key) => self.handle_key(key),
            None => EventResult::Ignored,
        }
    }

    // -------------------------------------------------------------------------
    // Drag and drop
    // -------------------------------------------------------------------------

    /// The node being dragged.
    pub fn dragged(&self) -> Option<&Node> {
        self.drag.dragged()
    }

    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    /// Id of the hovered drop target that would accept the current drag.
    pub fn drop_target(&self) -> Option<&str> {
        self.drag.over()
    }

    /// Start dragging a node. Non-draggable and unknown nodes are rejected.
    pub fn start_drag(&mut self, id: &str) -> bool {
        let started = match node::find(&self.forest, id) {
            Some(node) => self.drag.start(node),
            None => false,
        };
        if started {
            debug!("TreeController: drag started on {}", id);
        } else {
            trace!("TreeController: drag start rejected on {}", id);
        }
        started
    }

    /// Whether the node with `id` would accept a drop now. Ids resolve only
    /// against the forest; use [`can_accept_zone`](Self::can_accept_zone)
    /// for the drop zone.
    pub fn can_accept_drop(&self, id: &str) -> bool {
        node::find(&self.forest, id).is_some_and(|t| self.drag.can_accept(t))
    }

    /// Whether the drop zone would accept a drop now.
    pub fn can_accept_zone(&self) -> bool {
        self.drag.can_accept(&Node::drop_zone())
    }

    /// Pointer moved over a node during a drag. Returns whether it accepts
    /// the drop.
    pub fn drag_over(&mut self, id: &str) -> bool {
        match node::find(&self.forest, id) {
            Some(target) => self.drag.enter(target),
            None => false,
        }
    }

    /// Pointer moved over the drop zone during a drag.
    pub fn drag_over_zone(&mut self) -> bool {
        self.drag.enter(&Node::drop_zone())
    }

    /// Pointer left a node during a drag.
    pub fn drag_leave(&mut self, id: &str) {
        if let Some(target) = node::find(&self.forest, id) {
            self.drag.leave(target);
        }
    }

    /// Pointer left the drop zone.
    pub fn drag_leave_zone(&mut self) {
        self.drag.leave(&Node::drop_zone());
    }

    /// Drop onto the node with `id`.
    ///
    /// Fires the move-intent callback if the target accepts. The drag ends
    /// either way, also when `id` is not in the forest.
    pub fn drop(&mut self, id: &str) -> DropOutcome {
        let outcome = match node::find(&self.forest, id) {
            Some(target) => self.drag.drop_on(target),
            None => {
                trace!("TreeController: drop on unknown id {:?}", id);
                if self.drag.cancel() {
                    DropOutcome::Rejected
                } else {
                    DropOutcome::NotDragging
                }
            }
        };
        self.finish_drop(outcome)
    }

    /// Drop below every item. The target passed to the move-intent callback
    /// is [`Node::drop_zone`].
    pub fn drop_on_zone(&mut self) -> DropOutcome {
        let outcome = self.drag.drop_on(&Node::drop_zone());
        self.finish_drop(outcome)
    }

    /// Abandon the current drag without a drop.
    pub fn cancel_drag(&mut self) -> bool {
        let cancelled = self.drag.cancel();
        if cancelled {
            debug!("TreeController: drag cancelled");
        }
        cancelled
    }

    fn finish_drop(&mut self, outcome: DropOutcome) -> DropOutcome {
        match &outcome {
            DropOutcome::Moved { source, target } => {
                debug!("TreeController: moved {} onto {:?}", source.id, target.id);
                if let Some(f) = self.on_document_drag.as_mut() {
                    f(source, target);
                }
            }
            DropOutcome::Rejected => debug!("TreeController: drop rejected"),
            DropOutcome::NotDragging => trace!("TreeController: drop without drag"),
        }
        outcome
    }
}

impl fmt::Debug for TreeController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TreeController")
            .field("forest", &self.forest)
            .field("expansion", &self.expansion)
            .field("selection", &self.selection)
            .field("drag", &self.drag)
            .finish_non_exhaustive()
    }
}
