//! Source-tree wire types shared by the API contract and the code browser.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
/// Opaque backend project identifier.
pub struct ProjectId(String);

impl ProjectId {
    /// Builds an identifier from raw input, returning `None` for blank values.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// Returns the identifier as it appears in endpoint paths.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<u64> for ProjectId {
    fn from(value: u64) -> Self {
        Self(value.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Source-tree node kind as reported by the backend `type` field.
pub enum NodeKind {
    /// Regular file; selectable in the tree.
    File,
    /// Directory with ordered children.
    Directory,
    /// Any other `type` string. Rendered as a leaf.
    #[serde(other)]
    Unrecognized,
}

impl NodeKind {
    /// Returns `true` for directories.
    pub fn is_directory(self) -> bool {
        matches!(self, Self::Directory)
    }

    /// Returns `true` for nodes that behave as selectable leaves.
    pub fn is_leaf(self) -> bool {
        !self.is_directory()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// One file or directory in a project's source tree.
pub struct TreeNode {
    /// Display label (last path segment).
    pub name: String,
    /// Repository-relative path, used as fetch key and UI identity key.
    pub path: String,
    /// File or directory kind.
    #[serde(rename = "type")]
    pub kind: NodeKind,
    /// Ordered children (directories only).
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    /// Builds a file node.
    pub fn file(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            kind: NodeKind::File,
            children: Vec::new(),
        }
    }

    /// Builds a directory node with the given children.
    pub fn directory(
        name: impl Into<String>,
        path: impl Into<String>,
        children: Vec<TreeNode>,
    ) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            kind: NodeKind::Directory,
            children,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Payload returned by the source-file endpoint.
pub struct SourceFileContent {
    /// Path echoed back by the backend, when present.
    #[serde(default)]
    pub path: Option<String>,
    /// UTF-8 text content of the file.
    pub content: String,
}
