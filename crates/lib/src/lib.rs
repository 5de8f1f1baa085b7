//!
//! Apidraft: the editing core of a form-based editor for API description
//! documents. Every edit is a reversible command; undo and redo restore
//! both the document and the user's focus point.
//!
//! ## Core Concepts
//!
//! * **Documents (`doc::Document`)**: An in-memory mutable tree of typed nodes, addressed by
//!   JSON-Pointer style paths (`doc::NodePath`) and flat `doc::NodeId` links.
//! * **Commands (`command::Command`)**: Reversible mutations against a document. Composites
//!   (`command::CompositeCommand`) execute forward and undo in reverse dependency order.
//! * **History (`history::CommandHistory`)**: The bounded undo/redo stack pair. Fresh executions
//!   clear the redo stack, keeping history strictly linear; the oldest entries are evicted first.
//! * **Sessions (`session::EditorSession`)**: One object per editing session bundling document,
//!   history, and selection; all mutation funnels through its entry points.
//! * **Selection (`selection::SelectionState`)**: The current focus, snapshotted into every
//!   history entry so undo/redo can put the user back where they were.
//! * **Navigation (`navigation`)**: Tree walks mapping fine-grained selections to the coarse
//!   ancestor that decides which panel to show, and partial paths to the nearest existing node.

pub mod command;
pub mod constants;
pub mod doc;
pub mod history;
pub mod navigation;
pub mod selection;
pub mod session;

/// Re-exports of the types most callers need.
pub use command::{Command, CompositeCommand};
pub use doc::{Document, NodeId, NodeKind, NodePath, Value};
pub use session::EditorSession;

/// Result type used throughout the apidraft library.
pub type Result<T> = std::result::Result<T, Error>;

/// Common error type for the apidraft library.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Structured document model errors from the doc module
    #[error(transparent)]
    Doc(doc::DocError),

    /// Structured command lifecycle errors from the command module
    #[error(transparent)]
    Command(command::CommandError),

    /// Structured selection errors from the selection module
    #[error(transparent)]
    Selection(selection::SelectionError),

    /// Structured session errors from the session module
    #[error(transparent)]
    Session(session::SessionError),
}

impl Error {
    /// Get the originating module for this error.
    pub fn module(&self) -> &'static str {
        match self {
            Error::Doc(_) => "doc",
            Error::Command(_) => "command",
            Error::Selection(_) => "selection",
            Error::Session(_) => "session",
        }
    }

    /// Check if this error indicates a node, path, or property was not found.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::Doc(doc_err) => doc_err.is_not_found(),
            Error::Selection(selection_err) => selection_err.is_unresolvable(),
            _ => false,
        }
    }

    /// Check if this error indicates no document is loaded.
    pub fn is_no_document(&self) -> bool {
        match self {
            Error::Session(session_err) => session_err.is_no_document(),
            _ => false,
        }
    }

    /// Check if this error is a command lifecycle violation.
    pub fn is_command_error(&self) -> bool {
        matches!(self, Error::Command(_))
    }

    /// Check if this error is a structural conflict in the document tree.
    pub fn is_structural(&self) -> bool {
        match self {
            Error::Doc(doc_err) => doc_err.is_structural(),
            _ => false,
        }
    }
}
