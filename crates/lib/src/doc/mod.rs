//! In-memory document model: a mutable tree of typed nodes.
//!
//! The tree is stored as a flat node table keyed by [`NodeId`]. Parent and
//! child links are ids into that table, so upward traversal needs no owning
//! back-pointers and deleting a subtree cannot leave dangling ownership.
//!
//! Structural addressing uses [`NodePath`] (JSON-Pointer form). Exact
//! resolution, reverse addressing, and subtree detach/attach are the
//! operations the command engine builds on: a command that deletes a node
//! keeps the returned [`DetachedSubtree`] and reattaches it on undo, ids
//! intact.

pub mod errors;
pub mod node;
pub mod path;
pub mod value;

use std::collections::HashMap;

pub use errors::DocError;
pub use node::{Node, NodeId, NodeKind};
pub use path::{NodePath, PathError};
pub use value::Value;

use crate::Result;

/// A mutable tree of typed nodes reachable from a single root.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: HashMap<NodeId, Node>,
    root: NodeId,
    next_id: u64,
}

/// A subtree removed from a document by [`Document::detach`].
///
/// Holds the detached nodes with their original ids and the segment the
/// subtree root was keyed under. [`Document::attach`] reinserts the whole
/// structure unchanged; ids are never reallocated in between because the
/// document's id counter is monotonic.
#[derive(Debug, Clone)]
pub struct DetachedSubtree {
    root: NodeId,
    key: String,
    nodes: Vec<Node>,
}

impl DetachedSubtree {
    /// Id of the detached subtree's root node.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// The segment the subtree was keyed under before detachment.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Number of nodes in the subtree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: a detached subtree contains at least its root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl Document {
    /// Creates a document containing only a root node of kind
    /// [`NodeKind::Document`].
    pub fn new() -> Self {
        let root = NodeId(0);
        let mut nodes = HashMap::new();
        nodes.insert(
            root,
            Node::new(root, NodeKind::Document, None, String::new()),
        );
        Self {
            nodes,
            root,
            next_id: 1,
        }
    }

    /// The root node's id.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Looks up a node, returning `None` for unknown ids.
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    /// Looks up a node, failing with [`DocError::UnknownNode`].
    pub fn node(&self, id: NodeId) -> Result<&Node> {
        self.nodes
            .get(&id)
            .ok_or_else(|| DocError::UnknownNode { id }.into())
    }

    /// Returns `true` if the id refers to a live node.
    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// Total number of live nodes, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: the root node is never removed.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn allocate_id(&mut self) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Creates a new childless node of `kind` under `parent`, keyed by
    /// `key`.
    ///
    /// Fails if the parent id is unknown or the key is already taken.
    pub fn add_node(
        &mut self,
        parent: NodeId,
        key: impl Into<String>,
        kind: NodeKind,
    ) -> Result<NodeId> {
        let key = key.into();
        if !self.nodes.contains_key(&parent) {
            return Err(DocError::UnknownNode { id: parent }.into());
        }
        if self.nodes[&parent].children.contains_key(&key) {
            return Err(DocError::DuplicateChild { parent, key }.into());
        }
        let id = self.allocate_id();
        self.nodes
            .insert(id, Node::new(id, kind, Some(parent), key.clone()));
        self.nodes
            .get_mut(&parent)
            .expect("parent existence checked above")
            .children
            .insert(key, id);
        Ok(id)
    }

    /// Removes the node and all of its descendants, returning them as a
    /// [`DetachedSubtree`] that [`Document::attach`] can reinsert.
    ///
    /// The root cannot be detached.
    pub fn detach(&mut self, id: NodeId) -> Result<DetachedSubtree> {
        let node = self.node(id)?;
        let Some(parent) = node.parent else {
            return Err(DocError::RootImmutable {
                operation: "detached",
            }
            .into());
        };
        let key = node.key.clone();

        // Collect the subtree before removing anything, so a failure leaves
        // the document untouched.
        let mut ids = vec![id];
        let mut index = 0;
        while index < ids.len() {
            let current = ids[index];
            index += 1;
            if let Some(node) = self.nodes.get(&current) {
                ids.extend(node.children.values().copied());
            }
        }

        let mut nodes = Vec::with_capacity(ids.len());
        for node_id in ids {
            if let Some(node) = self.nodes.remove(&node_id) {
                nodes.push(node);
            }
        }
        if let Some(parent_node) = self.nodes.get_mut(&parent) {
            parent_node.children.remove(&key);
        }

        Ok(DetachedSubtree {
            root: id,
            key,
            nodes,
        })
    }

    /// Reinserts a previously detached subtree under `parent`, keyed by the
    /// segment it was detached from.
    pub fn attach(&mut self, parent: NodeId, subtree: DetachedSubtree) -> Result<NodeId> {
        if !self.nodes.contains_key(&parent) {
            return Err(DocError::UnknownNode { id: parent }.into());
        }
        if self.nodes[&parent].children.contains_key(&subtree.key) {
            return Err(DocError::DuplicateChild {
                parent,
                key: subtree.key,
            }
            .into());
        }
        let DetachedSubtree { root, key, nodes } = subtree;
        for mut node in nodes {
            if node.id == root {
                node.parent = Some(parent);
            }
            self.nodes.insert(node.id, node);
        }
        self.nodes
            .get_mut(&parent)
            .expect("parent existence checked above")
            .children
            .insert(key, root);
        Ok(root)
    }

    /// Re-keys a node under its parent, returning the previous key.
    pub fn rename(&mut self, id: NodeId, new_key: impl Into<String>) -> Result<String> {
        let new_key = new_key.into();
        let node = self.node(id)?;
        let Some(parent) = node.parent else {
            return Err(DocError::RootImmutable {
                operation: "renamed",
            }
            .into());
        };
        let old_key = node.key.clone();
        if new_key == old_key {
            return Ok(old_key);
        }
        if self.nodes[&parent].children.contains_key(&new_key) {
            return Err(DocError::DuplicateChild {
                parent,
                key: new_key,
            }
            .into());
        }
        {
            let parent_node = self
                .nodes
                .get_mut(&parent)
                .expect("parent of a live node is live");
            parent_node.children.remove(&old_key);
            parent_node.children.insert(new_key.clone(), id);
        }
        self.nodes
            .get_mut(&id)
            .expect("node existence checked above")
            .key = new_key;
        Ok(old_key)
    }

    /// Sets a property on a node, returning the previous value if any.
    pub fn set_property(
        &mut self,
        id: NodeId,
        name: impl Into<String>,
        value: Value,
    ) -> Result<Option<Value>> {
        let node = self
            .nodes
            .get_mut(&id)
            .ok_or(DocError::UnknownNode { id })?;
        Ok(node.properties.insert(name.into(), value))
    }

    /// Removes a property from a node, returning the removed value if any.
    pub fn remove_property(&mut self, id: NodeId, name: &str) -> Result<Option<Value>> {
        let node = self
            .nodes
            .get_mut(&id)
            .ok_or(DocError::UnknownNode { id })?;
        Ok(node.properties.remove(name))
    }

    /// Exact-path resolution: every segment must resolve.
    pub fn resolve(&self, path: &NodePath) -> Option<NodeId> {
        let mut current = self.root;
        for segment in path.segments() {
            current = self.nodes.get(&current)?.child(segment)?;
        }
        Some(current)
    }

    /// Exact-path resolution, failing with [`DocError::UnresolvablePath`].
    pub fn resolve_required(&self, path: &NodePath) -> Result<NodeId> {
        self.resolve(path).ok_or_else(|| {
            DocError::UnresolvablePath {
                pointer: path.as_pointer(),
            }
            .into()
        })
    }

    /// Reverse addressing: derives the path of a live node by climbing
    /// parent links to the root.
    pub fn path_of(&self, id: NodeId) -> Result<NodePath> {
        let mut segments = Vec::new();
        let mut current = self.node(id)?;
        while let Some(parent) = current.parent {
            segments.push(current.key.clone());
            current = self.node(parent)?;
        }
        segments.reverse();
        Ok(NodePath::from_segments(segments))
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}
