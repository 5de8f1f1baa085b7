//! The bounded undo/redo stack pair.
//!
//! [`CommandHistory`] owns the two LIFO stacks and their mutation rules;
//! it decides nothing about *when* entries move — that is the session's
//! job. The two push paths are deliberately distinct: [`push`] is for
//! fresh executions and unconditionally clears the redo stack (linear
//! history, no branching), while [`push_undo_preserving_redo`] is the
//! redo-replay path and must leave the redo stack alone.
//!
//! [`push`]: CommandHistory::push
//! [`push_undo_preserving_redo`]: CommandHistory::push_undo_preserving_redo

use std::collections::VecDeque;
use std::fmt;

use chrono::Utc;

use crate::{command::Command, constants::DEFAULT_UNDO_CAPACITY, selection::SelectionEvent};

/// One executed command together with everything needed to replay it.
#[derive(Debug)]
pub struct CommandHistoryEntry {
    command: Box<dyn Command>,
    selection: Option<SelectionEvent>,
    description: String,
    timestamp: i64,
}

impl CommandHistoryEntry {
    /// Creates an entry stamped with the current wall-clock time.
    pub fn new(
        command: Box<dyn Command>,
        selection: Option<SelectionEvent>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            command,
            selection,
            description: description.into(),
            timestamp: Utc::now().timestamp_millis(),
        }
    }

    /// The stored command.
    pub fn command(&self) -> &dyn Command {
        &*self.command
    }

    /// Mutable access for replaying the command.
    pub fn command_mut(&mut self) -> &mut dyn Command {
        &mut *self.command
    }

    /// The focus snapshot captured when the command first executed.
    ///
    /// Both undo and redo restore this same snapshot.
    pub fn selection(&self) -> Option<&SelectionEvent> {
        self.selection.as_ref()
    }

    /// The UI-facing description supplied at execute time.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Milliseconds since the Unix epoch at execute time.
    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }
}

/// Bounded undo stack plus redo stack.
pub struct CommandHistory {
    undo: VecDeque<CommandHistoryEntry>,
    redo: Vec<CommandHistoryEntry>,
    max_undo: usize,
}

impl CommandHistory {
    /// Creates a history bounded to `max_undo` entries.
    ///
    /// A bound of zero is treated as one: a history that can hold nothing
    /// would make every fresh execution silently unrecoverable.
    pub fn new(max_undo: usize) -> Self {
        Self {
            undo: VecDeque::new(),
            redo: Vec::new(),
            max_undo: max_undo.max(1),
        }
    }

    /// The configured bound.
    pub fn max_undo(&self) -> usize {
        self.max_undo
    }

    /// Records a fresh execution.
    ///
    /// Appends to the undo stack, evicting from the front (oldest first)
    /// once the bound is exceeded, and unconditionally clears the redo
    /// stack: executing anything new invalidates the redo branch.
    pub fn push(&mut self, entry: CommandHistoryEntry) {
        self.undo.push_back(entry);
        while self.undo.len() > self.max_undo {
            self.undo.pop_front();
        }
        self.redo.clear();
    }

    /// Pops the most recent undo entry, or `None` when empty.
    pub fn pop_undo(&mut self) -> Option<CommandHistoryEntry> {
        self.undo.pop_back()
    }

    /// Pops the most recent redo entry, or `None` when empty.
    pub fn pop_redo(&mut self) -> Option<CommandHistoryEntry> {
        self.redo.pop()
    }

    /// Appends to the redo stack (the undo path). Leaves the undo stack
    /// untouched.
    pub fn push_redo(&mut self, entry: CommandHistoryEntry) {
        self.redo.push(entry);
    }

    /// Appends to the undo stack without clearing the redo stack (the redo
    /// replay path).
    pub fn push_undo_preserving_redo(&mut self, entry: CommandHistoryEntry) {
        self.undo.push_back(entry);
    }

    /// `true` when at least one entry can be undone.
    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    /// `true` when at least one entry can be redone.
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    /// Number of undoable entries.
    pub fn undo_len(&self) -> usize {
        self.undo.len()
    }

    /// Number of redoable entries.
    pub fn redo_len(&self) -> usize {
        self.redo.len()
    }

    /// Descriptions of the undoable entries, most recent last.
    pub fn undo_descriptions(&self) -> impl Iterator<Item = &str> {
        self.undo.iter().map(CommandHistoryEntry::description)
    }

    /// Discards both stacks.
    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }
}

impl Default for CommandHistory {
    fn default() -> Self {
        Self::new(DEFAULT_UNDO_CAPACITY)
    }
}

impl fmt::Debug for CommandHistory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandHistory")
            .field("undo_len", &self.undo.len())
            .field("redo_len", &self.redo.len())
            .field("max_undo", &self.max_undo)
            .finish()
    }
}
