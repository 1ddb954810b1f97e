//! Single-item selection state.

/// The currently selected node id.
///
/// The id is not checked against the tree, so it may go stale after the
/// data changes. A stale id simply matches no visible row.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionStore {
    selected: Option<String>,
}

impl SelectionStore {
    /// Create an empty selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a selection holding `id`.
    pub fn with_selected(id: Option<String>) -> Self {
        Self { selected: id }
    }

    /// Selected id, if any.
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Check if `id` is the selected id.
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.as_deref() == Some(id)
    }

    /// Replace the selection. Returns the previous id.
    pub fn select(&mut self, id: Option<&str>) -> Option<String> {
        std::mem::replace(&mut self.selected, id.map(str::to_string))
    }

    /// Clear the selection. Returns the previous id.
    pub fn clear(&mut self) -> Option<String> {
        self.selected.take()
    }
}
