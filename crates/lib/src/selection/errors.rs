//! Error types for selection operations.

use thiserror::Error;

use crate::doc::NodeId;

/// Structured error types for selection failures.
///
/// A selection target that cannot be resolved is a caller error: the UI
/// asked to focus something the document does not contain.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum SelectionError {
    /// A path target did not resolve to an existing node.
    #[error("Selection target cannot be resolved: '{pointer}'")]
    UnresolvablePath { pointer: String },

    /// A node target is not part of the loaded document.
    #[error("Selection target {id} is not part of the document")]
    UnknownNode { id: NodeId },
}

impl SelectionError {
    /// Check if this error indicates the target was not found.
    pub fn is_unresolvable(&self) -> bool {
        matches!(
            self,
            SelectionError::UnresolvablePath { .. } | SelectionError::UnknownNode { .. }
        )
    }
}

impl From<SelectionError> for crate::Error {
    fn from(err: SelectionError) -> Self {
        crate::Error::Selection(err)
    }
}
