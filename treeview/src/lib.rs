//! State controller for an interactive tree widget.
//!
//! The controller keeps track of which nodes are expanded, which node is
//! selected and which node is being dragged. It turns key presses, clicks and
//! drag gestures into state transitions and reports them back through
//! callbacks. Drawing the tree is left to the host: it reads
//! [`TreeController::visible`] and the query methods and renders accordingly.

pub mod config;
pub mod controller;
pub mod drag;
pub mod error;
pub mod events;
pub mod expansion;
pub mod flatten;
pub mod navigation;
pub mod node;
pub mod selection;

pub use config::TreeConfig;
pub use controller::{DocumentDragFn, SelectChangeFn, TreeController};
pub use drag::{DragCoordinator, DragState, DropOutcome};
pub use error::{Result, TreeError};
pub use events::{EventResult, nav_key};
pub use expansion::ExpansionStore;
pub use flatten::{FlatNode, flatten};
pub use navigation::{ExpansionChange, NavKey, Navigation, navigate};
pub use node::{ActivateFn, DROP_ZONE_ID, Node, TreeData};
pub use selection::SelectionStore;
