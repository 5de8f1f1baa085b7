//! Path types for addressing nodes in a document tree.
//!
//! A [`NodePath`] is an ordered, immutable sequence of segments with a
//! JSON-Pointer canonical string form (`/paths/~1pets/get`). Segments are
//! stored unescaped; `/` and `~` inside a segment are escaped as `~1` and
//! `~0` only when rendering.
//!
//! # Usage
//!
//! ```rust
//! use apidraft::doc::NodePath;
//! use std::str::FromStr;
//!
//! // Parse from the canonical pointer form
//! let path = NodePath::from_str("/paths/~1pets/get")?;
//! assert_eq!(path.len(), 3);
//! assert_eq!(path.last(), Some("get"));
//!
//! // Build incrementally
//! let path = NodePath::root().push("paths").push("/pets").push("get");
//! assert_eq!(path.to_string(), "/paths/~1pets/get");
//! # Ok::<(), apidraft::doc::PathError>(())
//! ```

use std::{fmt, str::FromStr};

use serde::{Deserialize, Deserializer, Serialize, Serializer, de};
use thiserror::Error;

/// Error type for pointer parsing failures.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PathError {
    /// A non-empty pointer must begin with `/`.
    #[error("Pointer '{pointer}' does not start with '/'")]
    MissingLeadingSlash { pointer: String },

    /// `~` must be followed by `0` or `1`.
    #[error("Invalid escape sequence in segment '{segment}'")]
    InvalidEscape { segment: String },
}

/// An ordered sequence of segments addressing a node in a document tree.
///
/// Two paths are equal iff their segment sequences are equal. The empty
/// path addresses the document root and renders as the empty pointer `""`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NodePath {
    segments: Vec<String>,
}

impl NodePath {
    /// Creates the root path (no segments).
    pub fn root() -> Self {
        Self::default()
    }

    /// Creates a path from pre-split, unescaped segments.
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// Appends a single unescaped segment.
    pub fn push(mut self, segment: impl Into<String>) -> Self {
        self.segments.push(segment.into());
        self
    }

    /// Appends all segments of `other` to this path.
    pub fn join(mut self, other: impl AsRef<NodePath>) -> Self {
        self.segments
            .extend(other.as_ref().segments.iter().cloned());
        self
    }

    /// Returns an iterator over the unescaped segments.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().map(String::as_str)
    }

    /// Returns the number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Returns `true` if this is the root path.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Returns the parent path, or `None` if this is the root.
    pub fn parent(&self) -> Option<NodePath> {
        if self.segments.is_empty() {
            return None;
        }
        Some(NodePath {
            segments: self.segments[..self.segments.len() - 1].to_vec(),
        })
    }

    /// Returns the last segment, or `None` for the root path.
    pub fn last(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// Renders the canonical JSON-Pointer form.
    ///
    /// The root path renders as the empty string; every segment is prefixed
    /// with `/` and has `~` and `/` escaped as `~0` and `~1`.
    pub fn as_pointer(&self) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            out.push('/');
            out.push_str(&escape_segment(segment));
        }
        out
    }
}

fn escape_segment(segment: &str) -> String {
    segment.replace('~', "~0").replace('/', "~1")
}

fn unescape_segment(raw: &str) -> Result<String, PathError> {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(ch) = chars.next() {
        if ch != '~' {
            out.push(ch);
            continue;
        }
        match chars.next() {
            Some('0') => out.push('~'),
            Some('1') => out.push('/'),
            _ => {
                return Err(PathError::InvalidEscape {
                    segment: raw.to_string(),
                });
            }
        }
    }
    Ok(out)
}

impl FromStr for NodePath {
    type Err = PathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Ok(NodePath::root());
        }
        let Some(rest) = s.strip_prefix('/') else {
            return Err(PathError::MissingLeadingSlash {
                pointer: s.to_string(),
            });
        };
        let segments = rest
            .split('/')
            .map(unescape_segment)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(NodePath { segments })
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_pointer())
    }
}

impl AsRef<NodePath> for NodePath {
    fn as_ref(&self) -> &NodePath {
        self
    }
}

impl Serialize for NodePath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.as_pointer())
    }
}

impl<'de> Deserialize<'de> for NodePath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(de::Error::custom)
    }
}
