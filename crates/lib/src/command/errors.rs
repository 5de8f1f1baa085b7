//! Error types for command execution.

use thiserror::Error;

/// Structured error types for command protocol violations.
///
/// Failures of the underlying document mutation surface as
/// [`DocError`](crate::doc::DocError) unchanged; this enum covers misuse of
/// the command lifecycle itself.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum CommandError {
    /// `undo` was called on a command that never executed, so it has no
    /// captured inverse state to restore.
    #[error("Command '{command}' has not been executed, nothing to undo")]
    NotExecuted { command: String },
}

impl CommandError {
    /// Check if this error is a command lifecycle violation.
    pub fn is_not_executed(&self) -> bool {
        matches!(self, CommandError::NotExecuted { .. })
    }
}

impl From<CommandError> for crate::Error {
    fn from(err: CommandError) -> Self {
        crate::Error::Command(err)
    }
}
