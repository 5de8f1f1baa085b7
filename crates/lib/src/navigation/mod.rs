//! Navigation resolution: mapping fine-grained selections to coarse
//! navigation objects, and partial paths to the nearest existing node.
//!
//! A form-based editor routes panels by coarse structures (a path item, a
//! schema, a response), while selections can land on arbitrarily deep
//! nodes. [`resolve_navigation_object`] walks parent links upward and
//! returns the nearest navigable ancestor; the downward resolvers support
//! selecting a location that is about to be created but does not exist in
//! the tree yet.

use std::fmt;

use tracing::trace;

use crate::doc::{Document, Node, NodeId, NodeKind, NodePath};

/// The kind tag of a navigation object, used for panel routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NavigationKind {
    /// The document root / top-level metadata view.
    Info,
    /// A path item view.
    PathItem,
    /// A schema view.
    Schema,
    /// A response view.
    Response,
}

impl NavigationKind {
    /// Canonical string tag for this navigation kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            NavigationKind::Info => "info",
            NavigationKind::PathItem => "path-item",
            NavigationKind::Schema => "schema",
            NavigationKind::Response => "response",
        }
    }
}

impl fmt::Display for NavigationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A resolved navigation object: the coarse node and its kind tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationTarget {
    /// The node chosen to represent the selection.
    pub node: NodeId,
    /// Which panel family the node belongs to.
    pub kind: NavigationKind,
}

/// Maps a structural node kind to its navigation kind, if the kind is
/// navigable.
///
/// The match is exhaustive on purpose: a new `NodeKind` variant must decide
/// here whether it routes to its own panel.
pub fn navigation_kind(kind: NodeKind) -> Option<NavigationKind> {
    match kind {
        NodeKind::PathItem => Some(NavigationKind::PathItem),
        NodeKind::Schema => Some(NavigationKind::Schema),
        NodeKind::Response => Some(NavigationKind::Response),
        NodeKind::Document
        | NodeKind::Info
        | NodeKind::Operation
        | NodeKind::Parameter
        | NodeKind::RequestBody
        | NodeKind::Section => None,
    }
}

/// Resolves the navigation object for a node.
///
/// The root is its own navigation object (`info`). Otherwise the walk
/// starts at the node itself and follows parent links toward the root; the
/// first node whose kind is navigable wins — the traversal stops at the
/// nearest match rather than continuing to look for a coarser one. A stale
/// id or a walk that reaches the root without a match falls back to the
/// root `info` view.
pub fn resolve_navigation_object(doc: &Document, node: NodeId) -> NavigationTarget {
    let root = NavigationTarget {
        node: doc.root(),
        kind: NavigationKind::Info,
    };
    if node == doc.root() {
        return root;
    }

    let mut current = node;
    while let Some(found) = doc.get(current) {
        if let Some(kind) = navigation_kind(found.kind()) {
            trace!(node = %node, target = %current, kind = %kind, "resolved navigation object");
            return NavigationTarget {
                node: current,
                kind,
            };
        }
        match found.parent() {
            Some(parent) => current = parent,
            None => break,
        }
    }
    trace!(node = %node, "no navigable ancestor, falling back to root");
    root
}

/// Walks `path` downward from the root and returns the last node that
/// resolved before the first missing segment.
///
/// Used to select or highlight a location that is about to be created.
/// Returns `None` only when the walk cannot start at a live root.
pub fn resolve_nearest_existing(doc: &Document, path: &NodePath) -> Option<NodeId> {
    let mut current = doc.root();
    doc.get(current)?;
    for segment in path.segments() {
        match doc.get(current).and_then(|node| node.child(segment)) {
            Some(next) => current = next,
            None => break,
        }
    }
    Some(current)
}

/// Walks `path` downward from the root and returns the first node of
/// operation kind encountered, or `None` if the path never passes through
/// one.
pub fn resolve_nearest_operation(doc: &Document, path: &NodePath) -> Option<NodeId> {
    let mut current = doc.root();
    for segment in path.segments() {
        let next = doc.get(current).and_then(|node| node.child(segment))?;
        if doc.get(next).map(Node::kind) == Some(NodeKind::Operation) {
            return Some(next);
        }
        current = next;
    }
    None
}
