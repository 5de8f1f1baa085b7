//! The concrete editing commands a form-based editor issues.
//!
//! Every command addresses its target by path, resolves it at execute
//! time, and captures the inverse state it needs right then.

use tracing::debug;

use crate::{
    Result,
    command::{Command, CommandError},
    doc::{DetachedSubtree, DocError, Document, NodeId, NodeKind, NodePath, Value},
};

/// Sets one property on the node at `path`, remembering the prior value.
#[derive(Debug)]
pub struct SetPropertyCommand {
    path: NodePath,
    name: String,
    value: Value,
    previous: Option<Option<Value>>,
}

impl SetPropertyCommand {
    pub fn new(path: NodePath, name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            path,
            name: name.into(),
            value: value.into(),
            previous: None,
        }
    }
}

impl Command for SetPropertyCommand {
    fn execute(&mut self, doc: &mut Document) -> Result<()> {
        let id = doc.resolve_required(&self.path)?;
        let prior = doc.set_property(id, self.name.clone(), self.value.clone())?;
        debug!(path = %self.path, name = %self.name, "set property");
        self.previous = Some(prior);
        Ok(())
    }

    fn undo(&mut self, doc: &mut Document) -> Result<()> {
        let prior = self.previous.take().ok_or_else(|| CommandError::NotExecuted {
            command: self.describe(),
        })?;
        let id = doc.resolve_required(&self.path)?;
        match prior {
            Some(value) => {
                doc.set_property(id, self.name.clone(), value)?;
            }
            None => {
                doc.remove_property(id, &self.name)?;
            }
        }
        Ok(())
    }

    fn describe(&self) -> String {
        format!("set property '{}' of '{}'", self.name, self.path)
    }
}

/// Removes one property from the node at `path`, remembering the removed
/// value.
#[derive(Debug)]
pub struct RemovePropertyCommand {
    path: NodePath,
    name: String,
    removed: Option<Option<Value>>,
}

impl RemovePropertyCommand {
    pub fn new(path: NodePath, name: impl Into<String>) -> Self {
        Self {
            path,
            name: name.into(),
            removed: None,
        }
    }
}

impl Command for RemovePropertyCommand {
    fn execute(&mut self, doc: &mut Document) -> Result<()> {
        let id = doc.resolve_required(&self.path)?;
        let removed = doc.remove_property(id, &self.name)?;
        debug!(path = %self.path, name = %self.name, "removed property");
        self.removed = Some(removed);
        Ok(())
    }

    fn undo(&mut self, doc: &mut Document) -> Result<()> {
        let removed = self.removed.take().ok_or_else(|| CommandError::NotExecuted {
            command: self.describe(),
        })?;
        if let Some(value) = removed {
            let id = doc.resolve_required(&self.path)?;
            doc.set_property(id, self.name.clone(), value)?;
        }
        Ok(())
    }

    fn describe(&self) -> String {
        format!("remove property '{}' of '{}'", self.name, self.path)
    }
}

/// Creates a new node under the node at `parent`; undo detaches exactly
/// the node it created.
#[derive(Debug)]
pub struct AddNodeCommand {
    parent: NodePath,
    key: String,
    kind: NodeKind,
    created: Option<NodeId>,
}

impl AddNodeCommand {
    pub fn new(parent: NodePath, key: impl Into<String>, kind: NodeKind) -> Self {
        Self {
            parent,
            key: key.into(),
            kind,
            created: None,
        }
    }

    /// Path of the node this command creates.
    pub fn target_path(&self) -> NodePath {
        self.parent.clone().push(self.key.clone())
    }
}

impl Command for AddNodeCommand {
    fn execute(&mut self, doc: &mut Document) -> Result<()> {
        let parent = doc.resolve_required(&self.parent)?;
        let id = doc.add_node(parent, self.key.clone(), self.kind)?;
        debug!(parent = %self.parent, key = %self.key, kind = %self.kind, "added node");
        self.created = Some(id);
        Ok(())
    }

    fn undo(&mut self, doc: &mut Document) -> Result<()> {
        let id = self.created.take().ok_or_else(|| CommandError::NotExecuted {
            command: self.describe(),
        })?;
        doc.detach(id)?;
        Ok(())
    }

    fn describe(&self) -> String {
        format!("add {} '{}' under '{}'", self.kind, self.key, self.parent)
    }
}

/// Detaches the subtree at `path`; undo reattaches it, ids intact.
#[derive(Debug)]
pub struct DeleteNodeCommand {
    path: NodePath,
    removed: Option<(NodeId, DetachedSubtree)>,
}

impl DeleteNodeCommand {
    pub fn new(path: NodePath) -> Self {
        Self {
            path,
            removed: None,
        }
    }
}

impl Command for DeleteNodeCommand {
    fn execute(&mut self, doc: &mut Document) -> Result<()> {
        let id = doc.resolve_required(&self.path)?;
        let Some(parent) = doc.node(id)?.parent() else {
            return Err(DocError::RootImmutable { operation: "deleted" }.into());
        };
        let subtree = doc.detach(id)?;
        debug!(path = %self.path, nodes = subtree.len(), "deleted node");
        self.removed = Some((parent, subtree));
        Ok(())
    }

    fn undo(&mut self, doc: &mut Document) -> Result<()> {
        let (parent, subtree) = self.removed.take().ok_or_else(|| CommandError::NotExecuted {
            command: self.describe(),
        })?;
        doc.attach(parent, subtree)?;
        Ok(())
    }

    fn describe(&self) -> String {
        format!("delete '{}'", self.path)
    }
}

/// Re-keys the node at `path` under its parent.
#[derive(Debug)]
pub struct RenameNodeCommand {
    path: NodePath,
    new_key: String,
    renamed: Option<(NodeId, String)>,
}

impl RenameNodeCommand {
    pub fn new(path: NodePath, new_key: impl Into<String>) -> Self {
        Self {
            path,
            new_key: new_key.into(),
            renamed: None,
        }
    }
}

impl Command for RenameNodeCommand {
    fn execute(&mut self, doc: &mut Document) -> Result<()> {
        let id = doc.resolve_required(&self.path)?;
        let old_key = doc.rename(id, self.new_key.clone())?;
        debug!(path = %self.path, new_key = %self.new_key, "renamed node");
        self.renamed = Some((id, old_key));
        Ok(())
    }

    fn undo(&mut self, doc: &mut Document) -> Result<()> {
        let (id, old_key) = self.renamed.take().ok_or_else(|| CommandError::NotExecuted {
            command: self.describe(),
        })?;
        doc.rename(id, old_key)?;
        Ok(())
    }

    fn describe(&self) -> String {
        format!("rename '{}' to '{}'", self.path, self.new_key)
    }
}
