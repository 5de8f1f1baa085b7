//! Reversible document mutations.
//!
//! A [`Command`] encapsulates one reversible edit against the document
//! tree. Commands capture whatever state they need for inversion while
//! executing (the prior property value, the detached subtree, the old key),
//! which is what makes full re-execution on redo safe: under the engine's
//! linear-history protocol a command is only ever re-executed against the
//! same document state it first ran against.
//!
//! [`CompositeCommand`] groups commands into one atomic undo/redo unit.
//! Execution runs forward; undo runs strictly in reverse, which is
//! mandatory whenever a later sub-command depends on structure an earlier
//! one created.

pub mod errors;
mod ops;

use std::fmt;

pub use errors::CommandError;
pub use ops::{
    AddNodeCommand, DeleteNodeCommand, RemovePropertyCommand, RenameNodeCommand,
    SetPropertyCommand,
};

use crate::{Result, doc::Document, selection::SelectionEvent};

/// One reversible mutation of the document tree.
///
/// Invariant: under the undo/redo protocol, `execute` → `undo` → `execute`
/// leaves the document in the same state as a single `execute`.
pub trait Command: fmt::Debug {
    /// Applies the mutation.
    fn execute(&mut self, doc: &mut Document) -> Result<()>;

    /// Reverts a previously executed mutation.
    fn undo(&mut self, doc: &mut Document) -> Result<()>;

    /// Human-readable summary of what the command does.
    fn describe(&self) -> String;

    /// The focus snapshot to restore on undo/redo, when the command was
    /// created with one already captured.
    ///
    /// Commands that return `None` get the live selection snapshotted by
    /// the engine at execute time instead.
    fn selection_event(&self) -> Option<&SelectionEvent> {
        None
    }
}

/// An ordered group of commands treated as one atomic undo/redo unit.
#[derive(Debug, Default)]
pub struct CompositeCommand {
    commands: Vec<Box<dyn Command>>,
    selection: Option<SelectionEvent>,
}

impl CompositeCommand {
    /// Creates an empty composite.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a sub-command (builder style).
    pub fn with(mut self, command: impl Command + 'static) -> Self {
        self.commands.push(Box::new(command));
        self
    }

    /// Appends a boxed sub-command.
    pub fn push(&mut self, command: Box<dyn Command>) {
        self.commands.push(command);
    }

    /// Attaches a pre-captured focus snapshot.
    pub fn with_selection_event(mut self, event: SelectionEvent) -> Self {
        self.selection = Some(event);
        self
    }

    /// Number of sub-commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Returns `true` if the composite has no sub-commands.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Command for CompositeCommand {
    /// Runs sub-commands in forward order.
    fn execute(&mut self, doc: &mut Document) -> Result<()> {
        for command in &mut self.commands {
            command.execute(doc)?;
        }
        Ok(())
    }

    /// Runs sub-commands in reverse order.
    ///
    /// Later sub-commands may depend on structure created by earlier ones
    /// ("ensure the parent exists" before "set a property on it"), so the
    /// inverse must tear down in the opposite dependency order.
    fn undo(&mut self, doc: &mut Document) -> Result<()> {
        for command in self.commands.iter_mut().rev() {
            command.undo(doc)?;
        }
        Ok(())
    }

    fn describe(&self) -> String {
        match self.commands.len() {
            0 => "no changes".to_string(),
            1 => self.commands[0].describe(),
            n => format!("{n} changes"),
        }
    }

    fn selection_event(&self) -> Option<&SelectionEvent> {
        self.selection.as_ref()
    }
}
