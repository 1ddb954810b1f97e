//! Drag-and-drop tracking.
//!
//! The coordinator only detects the gesture and reports the
//! `(source, target)` pair. Where the dragged node ends up in the tree is
//! decided by whoever handles the move intent.

use crate::node::Node;

/// Drag state.
#[derive(Debug, Clone, Default)]
pub enum DragState {
    /// No drag in progress.
    #[default]
    Idle,
    /// A node is being dragged.
    Dragging(Node),
}

/// Result of a drop.
#[derive(Debug, Clone)]
pub enum DropOutcome {
    /// The target accepted the dragged node.
    Moved { source: Node, target: Node },
    /// The target refused the drop.
    Rejected,
    /// There was no drag in progress.
    NotDragging,
}

/// Tracks the dragged node and the drop target under the pointer.
#[derive(Debug, Clone, Default)]
pub struct DragCoordinator {
    state: DragState,
    /// Hovered drop target (for highlighting).
    over: Option<String>,
}

impl DragCoordinator {
    /// Create an idle coordinator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current drag state.
    pub fn state(&self) -> &DragState {
        &self.state
    }

    /// The node being dragged.
    pub fn dragged(&self) -> Option<&Node> {
        match &self.state {
            DragState::Idle => None,
            DragState::Dragging(node) => Some(node),
        }
    }

    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    /// Id of the hovered drop target, if it accepts the current drag.
    pub fn over(&self) -> Option<&str> {
        self.over.as_deref()
    }

    /// Begin dragging `node`. Returns false (and changes nothing) if the
    /// node is not draggable.
    pub fn start(&mut self, node: &Node) -> bool {
        if !node.draggable {
            return false;
        }
        self.state = DragState::Dragging(node.clone());
        self.over = None;
        true
    }

    /// Whether `target` would accept a drop right now.
    pub fn can_accept(&self, target: &Node) -> bool {
        match self.dragged() {
            Some(dragged) => target.droppable && target.id != dragged.id,
            None => false,
        }
    }

    /// Pointer entered `target`. Records it as the hovered target when it
    /// accepts the drop.
    pub fn enter(&mut self, target: &Node) -> bool {
        let accepted = self.can_accept(target);
        if accepted {
            self.over = Some(target.id.clone());
        }
        accepted
    }

    /// Pointer left `target`.
    pub fn leave(&mut self, target: &Node) {
        if self.over.as_deref() == Some(target.id.as_str()) {
            self.over = None;
        }
    }

    /// Drop on `target`. The drag ends whatever the outcome.
    pub fn drop_on(&mut self, target: &Node) -> DropOutcome {
        let accepted = self.can_accept(target);
        self.over = None;
        match std::mem::take(&mut self.state) {
            DragState::Idle => DropOutcome::NotDragging,
            DragState::Dragging(source) if accepted => DropOutcome::Moved {
                source,
                target: target.clone(),
            },
            DragState::Dragging(_) => DropOutcome::Rejected,
        }
    }

    /// Abandon the drag without a drop. Returns true if one was in progress.
    pub fn cancel(&mut self) -> bool {
        self.over = None;
        matches!(std::mem::take(&mut self.state), DragState::Dragging(_))
    }
}
