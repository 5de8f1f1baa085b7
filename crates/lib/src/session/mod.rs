//! The editing session: command engine plus selection controller.
//!
//! [`EditorSession`] bundles the document, the history stacks, and the
//! selection state into one object constructed per editing session and
//! threaded through all entry points. There are no process-wide
//! singletons; single-writer semantics fall out of every entry point
//! taking `&mut self`.
//!
//! # Change notification
//!
//! Every successful mutation bumps a monotonic document version and fans
//! out synchronously to the registered [`ChangeHook`]s. Hooks must not
//! re-enter the session during the notification; hook failures are logged
//! and never roll back the mutation that triggered them.

pub mod errors;

use std::sync::Arc;

use tracing::{debug, error, warn};

pub use errors::SessionError;

use crate::{
    Result,
    command::Command,
    doc::Document,
    history::{CommandHistory, CommandHistoryEntry},
    navigation::{self, NavigationTarget},
    selection::{SelectTarget, SelectionError, SelectionEvent, SelectionState},
};

/// Context passed to change hooks after each successful mutation.
#[derive(Debug, Clone)]
pub struct ChangeContext {
    /// The document version after the mutation.
    pub version: u64,
    /// Description of the mutation (the history entry's description, or a
    /// fixed tag for lifecycle events such as loading a document).
    pub description: String,
}

/// Observer of document mutations.
///
/// Hooks are notified synchronously, in registration order, after the
/// mutation has been applied and recorded. A hook must not call back into
/// the session that is notifying it.
pub trait ChangeHook {
    /// Called after a mutation has been applied.
    ///
    /// Failures do not roll back the mutation; they are logged and the
    /// remaining hooks still run.
    fn on_document_changed(&self, context: &ChangeContext) -> Result<()>;
}

/// An ordered collection of change hooks.
#[derive(Default)]
pub struct ChangeHookCollection {
    hooks: Vec<Arc<dyn ChangeHook>>,
}

impl ChangeHookCollection {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self { hooks: Vec::new() }
    }

    /// Registers a hook at the end of the notification order.
    pub fn add_hook(&mut self, hook: Arc<dyn ChangeHook>) {
        self.hooks.push(hook);
    }

    /// Number of registered hooks.
    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    /// Returns `true` if no hooks are registered.
    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    /// Notifies every hook in order, logging failures.
    pub fn notify(&self, context: &ChangeContext) {
        for hook in &self.hooks {
            if let Err(err) = hook.on_document_changed(context) {
                warn!(error = %err, version = context.version, "change hook failed");
            }
        }
    }
}

/// One editing session over one document.
pub struct EditorSession {
    document: Option<Document>,
    history: CommandHistory,
    selection: SelectionState,
    hooks: ChangeHookCollection,
    version: u64,
}

impl EditorSession {
    /// Creates a session with the default history bound and no document.
    pub fn new() -> Self {
        Self {
            document: None,
            history: CommandHistory::default(),
            selection: SelectionState::default(),
            hooks: ChangeHookCollection::new(),
            version: 0,
        }
    }

    /// Creates a session with an explicit undo bound.
    pub fn with_history_capacity(max_undo: usize) -> Self {
        Self {
            history: CommandHistory::new(max_undo),
            ..Self::new()
        }
    }

    /// Loads a document, discarding all history and selection state.
    pub fn load_document(&mut self, document: Document) {
        self.document = Some(document);
        self.history.clear();
        self.selection.clear();
        self.publish("document loaded");
    }

    /// The loaded document, if any.
    pub fn document(&self) -> Option<&Document> {
        self.document.as_ref()
    }

    /// Returns `true` when a document is loaded.
    pub fn has_document(&self) -> bool {
        self.document.is_some()
    }

    /// The current selection state.
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// The history stacks (read access for UI listings).
    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    /// The current document version; bumps on every mutation.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Registers a change hook.
    pub fn add_change_hook(&mut self, hook: Arc<dyn ChangeHook>) {
        self.hooks.add_hook(hook);
    }

    /// `true` when at least one command can be undone.
    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    /// `true` when at least one command can be redone.
    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Discards both history stacks. The document and selection are kept.
    pub fn reset(&mut self) {
        self.history.clear();
    }

    fn publish(&mut self, description: &str) {
        self.version += 1;
        let context = ChangeContext {
            version: self.version,
            description: description.to_string(),
        };
        self.hooks.notify(&context);
    }

    /// Executes a command and records it for undo.
    ///
    /// The live selection is snapshotted into the history entry unless the
    /// command carries its own pre-captured snapshot. If `execute` fails
    /// the error propagates and the history stacks are left untouched; on
    /// success the entry is pushed (clearing the redo stack) and the
    /// change is published.
    pub fn execute_command(
        &mut self,
        mut command: Box<dyn Command>,
        description: impl Into<String>,
    ) -> Result<()> {
        let description = description.into();
        let selection = command
            .selection_event()
            .cloned()
            .or_else(|| self.selection.snapshot());
        let Some(doc) = self.document.as_mut() else {
            return Err(SessionError::NoDocument {
                operation: "execute a command",
            }
            .into());
        };
        debug!(%description, "executing command");
        command.execute(doc)?;
        self.history
            .push(CommandHistoryEntry::new(command, selection, description.clone()));
        self.publish(&description);
        Ok(())
    }

    /// Undoes the most recent command.
    ///
    /// Returns `Ok(false)` when the undo stack is empty; the document and
    /// selection are untouched. On success the entry moves to the redo
    /// stack, focus is restored from the entry's snapshot, and the change
    /// is published. If the inverse mutation fails the entry is pushed
    /// back onto the undo stack and the error propagates — history is
    /// never silently dropped, though the document may have been partially
    /// mutated by the failed inverse.
    pub fn undo(&mut self) -> Result<bool> {
        let Some(mut entry) = self.history.pop_undo() else {
            return Ok(false);
        };
        let Some(doc) = self.document.as_mut() else {
            self.history.push_undo_preserving_redo(entry);
            return Err(SessionError::NoDocument { operation: "undo" }.into());
        };
        debug!(description = entry.description(), "undoing command");
        if let Err(err) = entry.command_mut().undo(doc) {
            error!(
                error = %err,
                description = entry.description(),
                "undo failed, entry retained on the undo stack"
            );
            self.history.push_undo_preserving_redo(entry);
            return Err(err);
        }
        if let Some(event) = entry.selection().cloned() {
            self.restore_selection(&event);
        }
        let description = entry.description().to_string();
        self.history.push_redo(entry);
        self.publish(&description);
        Ok(true)
    }

    /// Redoes the most recently undone command.
    ///
    /// Returns `Ok(false)` when the redo stack is empty. The command is
    /// fully re-executed (not restored from a snapshot), focus is restored
    /// from the same snapshot undo used, and the entry returns to the undo
    /// stack without clearing the redo stack. If re-execution fails the
    /// entry is pushed back onto the redo stack and the error propagates.
    pub fn redo(&mut self) -> Result<bool> {
        let Some(mut entry) = self.history.pop_redo() else {
            return Ok(false);
        };
        let Some(doc) = self.document.as_mut() else {
            self.history.push_redo(entry);
            return Err(SessionError::NoDocument { operation: "redo" }.into());
        };
        debug!(description = entry.description(), "redoing command");
        if let Err(err) = entry.command_mut().execute(doc) {
            error!(
                error = %err,
                description = entry.description(),
                "redo failed, entry retained on the redo stack"
            );
            self.history.push_redo(entry);
            return Err(err);
        }
        if let Some(event) = entry.selection().cloned() {
            self.restore_selection(&event);
        }
        let description = entry.description().to_string();
        self.history.push_undo_preserving_redo(entry);
        self.publish(&description);
        Ok(true)
    }

    /// Selects a node by path or id, with an optional focused property.
    ///
    /// Path targets go through exact resolution; node targets through
    /// reverse addressing. The navigation object is recomputed for the new
    /// selection. The state is committed with `highlight` off, then — when
    /// requested — flipped on as a second distinct update so observers can
    /// animate exactly once.
    pub fn select(
        &mut self,
        target: impl Into<SelectTarget>,
        property: Option<&str>,
        highlight: bool,
    ) -> Result<()> {
        let Some(doc) = self.document.as_ref() else {
            return Err(SessionError::NoDocument {
                operation: "select",
            }
            .into());
        };
        let (path, node) = match target.into() {
            SelectTarget::Path(path) => {
                let id = doc.resolve(&path).ok_or_else(|| SelectionError::UnresolvablePath {
                    pointer: path.as_pointer(),
                })?;
                (path, id)
            }
            SelectTarget::Node(id) => {
                if !doc.contains(id) {
                    return Err(SelectionError::UnknownNode { id }.into());
                }
                (doc.path_of(id)?, id)
            }
        };
        let NavigationTarget { node: nav, kind } = navigation::resolve_navigation_object(doc, node);
        self.selection = SelectionState {
            path: Some(path),
            node: Some(node),
            property: property.map(str::to_string),
            navigation: Some(nav),
            navigation_kind: Some(kind),
            highlight: false,
        };
        if highlight {
            self.highlight_current();
        }
        Ok(())
    }

    /// Clears the selection entirely.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Selects the document root.
    pub fn select_root(&mut self) -> Result<()> {
        let Some(doc) = self.document.as_ref() else {
            return Err(SessionError::NoDocument {
                operation: "select",
            }
            .into());
        };
        let root = doc.root();
        self.select(root, None, false)
    }

    /// Flags the current selection for one-shot highlighting.
    pub fn highlight_current(&mut self) {
        self.selection.highlight = true;
    }

    /// Restores focus from a history entry's snapshot.
    ///
    /// The stored path is re-resolved against the current document; when
    /// the exact node no longer exists (its creation was just undone, for
    /// instance) the nearest existing node along the path is selected
    /// instead, so the user is left next to where the edit happened.
    fn restore_selection(&mut self, event: &SelectionEvent) {
        let Some(doc) = self.document.as_ref() else {
            return;
        };
        let node = event
            .node
            .filter(|id| doc.contains(*id))
            .or_else(|| doc.resolve(&event.path))
            .or_else(|| navigation::resolve_nearest_existing(doc, &event.path));
        let navigation = node.map(|id| navigation::resolve_navigation_object(doc, id));
        self.selection = SelectionState {
            path: Some(event.path.clone()),
            node,
            property: event.property.clone(),
            navigation: navigation.map(|t| t.node),
            navigation_kind: navigation.map(|t| t.kind),
            highlight: true,
        };
    }
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new()
    }
}
