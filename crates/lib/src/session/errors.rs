//! Error types for session operations.

use thiserror::Error;

/// Structured error types for editing-session failures.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum SessionError {
    /// An operation that needs a document was attempted with none loaded.
    #[error("No document is loaded, cannot {operation}")]
    NoDocument { operation: &'static str },
}

impl SessionError {
    /// Check if this error indicates no document is loaded.
    pub fn is_no_document(&self) -> bool {
        matches!(self, SessionError::NoDocument { .. })
    }
}

impl From<SessionError> for crate::Error {
    fn from(err: SessionError) -> Self {
        crate::Error::Session(err)
    }
}
