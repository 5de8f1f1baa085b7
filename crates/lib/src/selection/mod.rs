//! Selection state: what is focused, and whether to highlight it.
//!
//! [`SelectionState`] is the single source of truth for the current focus.
//! It is mutated only through the session's selection entry points and read
//! by the command engine (to snapshot focus into history entries) and by UI
//! observers.
//!
//! [`SelectionEvent`] is the immutable snapshot carried by a history entry:
//! captured once when a command is executed, and replayed by both undo and
//! redo so the user's focus returns to where it was before the original
//! edit.

pub mod errors;

pub use errors::SelectionError;

use crate::{
    doc::{NodeId, NodePath},
    navigation::NavigationKind,
};

/// Immutable snapshot of the focus at command-execution time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionEvent {
    /// Path of the selected node.
    pub path: NodePath,
    /// Id of the selected node, if it resolved when the snapshot was taken.
    pub node: Option<NodeId>,
    /// The focused property within the node, if any.
    pub property: Option<String>,
}

/// The current focus of the editing session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    /// Path of the selected node, `None` when nothing is selected.
    pub path: Option<NodePath>,
    /// Id of the selected node.
    pub node: Option<NodeId>,
    /// The focused property within the node.
    pub property: Option<String>,
    /// The coarse ancestor chosen for panel routing.
    pub navigation: Option<NodeId>,
    /// The navigation object's kind tag.
    pub navigation_kind: Option<NavigationKind>,
    /// Whether observers should present the selection prominently once.
    ///
    /// Committed separately from the rest of the state so the UI can
    /// animate exactly once per request and clear it after presenting.
    pub highlight: bool,
}

impl SelectionState {
    /// Captures the current focus as an immutable event.
    ///
    /// Returns `None` when nothing is selected.
    pub fn snapshot(&self) -> Option<SelectionEvent> {
        self.path.as_ref().map(|path| SelectionEvent {
            path: path.clone(),
            node: self.node,
            property: self.property.clone(),
        })
    }

    /// Returns `true` when nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.path.is_none()
    }

    /// Resets to the all-clear state.
    pub fn clear(&mut self) {
        *self = SelectionState::default();
    }
}

/// A selection request target: either a path to resolve or a live node.
#[derive(Debug, Clone)]
pub enum SelectTarget {
    /// Resolve this path through the document's exact-path resolution.
    Path(NodePath),
    /// Derive the path from this node via reverse addressing.
    Node(NodeId),
}

impl From<NodePath> for SelectTarget {
    fn from(path: NodePath) -> Self {
        SelectTarget::Path(path)
    }
}

impl From<&NodePath> for SelectTarget {
    fn from(path: &NodePath) -> Self {
        SelectTarget::Path(path.clone())
    }
}

impl From<NodeId> for SelectTarget {
    fn from(id: NodeId) -> Self {
        SelectTarget::Node(id)
    }
}
