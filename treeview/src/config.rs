//! Tree controller configuration.

/// Construction-time options for a [`TreeController`](crate::TreeController).
#[derive(Debug, Clone, Default)]
pub struct TreeConfig {
    /// Node selected at construction. Its ancestors start expanded.
    pub initial_selected_id: Option<String>,

    /// Start with every internal node expanded.
    /// Applied on top of the ancestors of `initial_selected_id`.
    pub expand_all: bool,
}

impl TreeConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initially selected node.
    pub fn initial_selected_id(mut self, id: impl Into<String>) -> Self {
        self.initial_selected_id = Some(id.into());
        self
    }

    /// Expand every internal node at construction.
    pub fn expand_all(mut self) -> Self {
        self.expand_all = true;
        self
    }
}
