//! Error types for document model operations.

use thiserror::Error;

use crate::doc::{NodeId, path::PathError};

/// Structured error types for document tree operations.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum DocError {
    /// A node id does not exist in the document's node table.
    #[error("Unknown node {id}")]
    UnknownNode { id: NodeId },

    /// A path did not resolve to an existing node.
    #[error("Path cannot be resolved: '{pointer}'")]
    UnresolvablePath { pointer: String },

    /// A child with the given segment already exists under the parent.
    #[error("Node {parent} already has a child keyed '{key}'")]
    DuplicateChild { parent: NodeId, key: String },

    /// The requested structural operation is not valid for the root node.
    #[error("The document root cannot be {operation}")]
    RootImmutable { operation: &'static str },

    /// A value could not be represented as a property.
    #[error("Unsupported property value: {reason}")]
    UnsupportedValue { reason: String },

    /// Pointer parsing failed.
    #[error(transparent)]
    Path(#[from] PathError),
}

impl DocError {
    /// Check if this error indicates a node or path was not found.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            DocError::UnknownNode { .. } | DocError::UnresolvablePath { .. }
        )
    }

    /// Check if this error is a structural conflict (duplicate key, root mutation).
    pub fn is_structural(&self) -> bool {
        matches!(
            self,
            DocError::DuplicateChild { .. } | DocError::RootImmutable { .. }
        )
    }
}

impl From<DocError> for crate::Error {
    fn from(err: DocError) -> Self {
        crate::Error::Doc(err)
    }
}
