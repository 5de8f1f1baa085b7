//! Node identity, structural kinds, and per-node data.

use std::{collections::BTreeMap, fmt};

use serde::{Deserialize, Serialize};

use crate::doc::Value;

/// Opaque identifier for a node in a [`Document`](crate::doc::Document).
///
/// Ids are allocated from a per-document counter and never reused, so a
/// stale id held across a deletion can be detected rather than silently
/// pointing at an unrelated node. Ids are only meaningful within the
/// document that issued them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The structural kind of a document node.
///
/// This is a closed set: every traversal in the crate matches on it
/// exhaustively, so adding a kind forces each dispatch site to decide how
/// to handle it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeKind {
    /// The document root.
    Document,
    /// The top-level metadata block.
    Info,
    /// One URL template and its operations.
    PathItem,
    /// A single HTTP operation under a path item.
    Operation,
    /// An operation or path-item parameter.
    Parameter,
    /// An operation request body.
    RequestBody,
    /// One response of an operation.
    Response,
    /// A schema, top-level or inline.
    Schema,
    /// A plain grouping container (`paths`, `responses`, `properties`, ...).
    Section,
}

impl NodeKind {
    /// Canonical string tag for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeKind::Document => "document",
            NodeKind::Info => "info",
            NodeKind::PathItem => "path-item",
            NodeKind::Operation => "operation",
            NodeKind::Parameter => "parameter",
            NodeKind::RequestBody => "request-body",
            NodeKind::Response => "response",
            NodeKind::Schema => "schema",
            NodeKind::Section => "section",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One addressable element of the document tree.
///
/// The parent link is a plain [`NodeId`] back into the document's node
/// table, never an owning reference. All structural mutation goes through
/// [`Document`](crate::doc::Document) so that parent links, child keys, and
/// the node table stay consistent.
#[derive(Debug, Clone)]
pub struct Node {
    pub(crate) id: NodeId,
    pub(crate) kind: NodeKind,
    pub(crate) parent: Option<NodeId>,
    pub(crate) key: String,
    pub(crate) children: BTreeMap<String, NodeId>,
    pub(crate) properties: BTreeMap<String, Value>,
}

impl Node {
    pub(crate) fn new(id: NodeId, kind: NodeKind, parent: Option<NodeId>, key: String) -> Self {
        Self {
            id,
            kind,
            parent,
            key,
            children: BTreeMap::new(),
            properties: BTreeMap::new(),
        }
    }

    /// This node's id.
    pub fn id(&self) -> NodeId {
        self.id
    }

    /// This node's structural kind.
    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    /// The parent node's id, or `None` for the root.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// The segment under which this node lives in its parent.
    ///
    /// The root's key is the empty string.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Looks up a direct child by segment.
    pub fn child(&self, key: &str) -> Option<NodeId> {
        self.children.get(key).copied()
    }

    /// Iterates over `(segment, id)` pairs of the direct children.
    pub fn children(&self) -> impl Iterator<Item = (&str, NodeId)> {
        self.children.iter().map(|(k, id)| (k.as_str(), *id))
    }

    /// Number of direct children.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Reads a property value.
    pub fn property(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }

    /// Iterates over `(name, value)` pairs of the node's properties.
    pub fn properties(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.properties.iter().map(|(k, v)| (k.as_str(), v))
    }
}
