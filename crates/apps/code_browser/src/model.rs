//! Source-tree arena, expansion state, and selected-file state owned by the code browser.

use std::collections::{HashMap, HashSet};

use portfolio_host::{NodeKind, TreeNode};

use crate::language::language_for_path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// Arena index of a node inside one [`SourceTree`].
///
/// Ids are unique even when the backend reports duplicate paths, so they key rendered rows.
pub struct NodeId(pub usize);

#[derive(Debug, Clone, PartialEq, Eq)]
/// One node stored in the arena.
pub struct SourceNode {
    /// Display label.
    pub name: String,
    /// Repository-relative path.
    pub path: String,
    /// Reported kind.
    pub kind: NodeKind,
    /// Children in backend order. Always empty for leaves.
    pub children: Vec<NodeId>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Irregularities found while indexing a forest. Neither aborts the build.
pub enum TreeAnomaly {
    /// More than one node reported `path`; the last one seen owns the path index.
    DuplicatePath {
        /// Shared path.
        path: String,
    },
    /// A node reported a `type` other than `file` or `directory`; it is kept as a leaf.
    UnrecognizedKind {
        /// Offending node path.
        path: String,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Flat arena over a backend forest, indexed by id and by path.
pub struct SourceTree {
    nodes: Vec<SourceNode>,
    roots: Vec<NodeId>,
    by_path: HashMap<String, NodeId>,
    anomalies: Vec<TreeAnomaly>,
}

impl SourceTree {
    /// Indexes `forest` without recursion, preserving backend order at every level.
    ///
    /// Children reported on a non-directory node are dropped.
    pub fn from_forest(forest: Vec<TreeNode>) -> Self {
        let mut tree = Self::default();
        let mut pending: Vec<(Option<NodeId>, TreeNode)> =
            forest.into_iter().rev().map(|node| (None, node)).collect();

        while let Some((parent, node)) = pending.pop() {
            let id = NodeId(tree.nodes.len());
            let TreeNode {
                name,
                path,
                kind,
                children,
            } = node;

            if kind == NodeKind::Unrecognized {
                tree.anomalies
                    .push(TreeAnomaly::UnrecognizedKind { path: path.clone() });
            }
            if tree.by_path.insert(path.clone(), id).is_some() {
                tree.anomalies
                    .push(TreeAnomaly::DuplicatePath { path: path.clone() });
            }

            match parent {
                Some(parent) => tree.nodes[parent.0].children.push(id),
                None => tree.roots.push(id),
            }
            tree.nodes.push(SourceNode {
                name,
                path,
                kind,
                children: Vec::new(),
            });

            if kind.is_directory() {
                pending.extend(children.into_iter().rev().map(|child| (Some(id), child)));
            }
        }

        tree
    }

    /// Returns `true` when the forest had no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Total node count.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Top-level nodes in backend order.
    pub fn roots(&self) -> &[NodeId] {
        &self.roots
    }

    /// Looks up a node by arena id.
    pub fn node(&self, id: NodeId) -> Option<&SourceNode> {
        self.nodes.get(id.0)
    }

    /// Looks up the node owning `path` (the last one seen on duplicates).
    pub fn node_by_path(&self, path: &str) -> Option<(NodeId, &SourceNode)> {
        let id = *self.by_path.get(path)?;
        self.node(id).map(|node| (id, node))
    }

    /// Irregularities found while indexing.
    pub fn anomalies(&self) -> &[TreeAnomaly] {
        &self.anomalies
    }

    /// Flattens the currently visible hierarchy in display order.
    ///
    /// Children of a directory are visible only while its path is expanded. Traversal uses an
    /// explicit stack, so depth is bounded by memory rather than the call stack.
    pub fn visible_rows(&self, expansion: &ExpansionState) -> Vec<VisibleRow> {
        let mut rows = Vec::new();
        let mut stack: Vec<(NodeId, usize)> = self.roots.iter().rev().map(|id| (*id, 0)).collect();

        while let Some((id, depth)) = stack.pop() {
            let Some(node) = self.node(id) else {
                continue;
            };
            let expanded = node.kind.is_directory() && expansion.is_expanded(&node.path);
            rows.push(VisibleRow {
                id,
                depth,
                name: node.name.clone(),
                path: node.path.clone(),
                kind: node.kind,
                expanded,
            });
            if expanded {
                stack.extend(node.children.iter().rev().map(|child| (*child, depth + 1)));
            }
        }

        rows
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// One rendered row of the flattened tree.
pub struct VisibleRow {
    /// Arena id; unique per row.
    pub id: NodeId,
    /// Nesting depth, `0` for roots.
    pub depth: usize,
    /// Display label.
    pub name: String,
    /// Repository-relative path.
    pub path: String,
    /// Node kind.
    pub kind: NodeKind,
    /// Whether a directory row is currently expanded. Always `false` for leaves.
    pub expanded: bool,
}

impl VisibleRow {
    /// Returns `true` when activating the row toggles expansion instead of selecting a file.
    pub fn is_directory(&self) -> bool {
        self.kind.is_directory()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Expanded directory paths. Every directory starts collapsed.
pub struct ExpansionState {
    expanded: HashSet<String>,
}

impl ExpansionState {
    /// Flips `path` and returns its new state.
    pub fn toggle(&mut self, path: &str) -> bool {
        if self.expanded.remove(path) {
            false
        } else {
            self.expanded.insert(path.to_string());
            true
        }
    }

    /// Returns `true` when `path` is expanded.
    pub fn is_expanded(&self, path: &str) -> bool {
        self.expanded.contains(path)
    }

    /// Collapses everything.
    pub fn clear(&mut self) {
        self.expanded.clear();
    }

    /// Number of expanded paths.
    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    /// Returns `true` when nothing is expanded.
    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// The single file shown by the viewer.
pub struct SelectedFile {
    /// Selected path.
    pub path: String,
    /// Loaded text; empty until loaded and after a failure.
    pub content: String,
    /// A fetch for `path` is outstanding.
    pub loading: bool,
    /// User-facing failure message.
    pub error: Option<String>,
}

impl SelectedFile {
    /// Fresh selection awaiting its content.
    pub fn loading(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: String::new(),
            loading: true,
            error: None,
        }
    }

    /// Highlighting language derived from the path.
    pub fn language(&self) -> &str {
        language_for_path(&self.path)
    }

    /// Last path segment, used as the viewer title.
    pub fn file_name(&self) -> &str {
        self.path.rsplit('/').next().unwrap_or(&self.path)
    }
}
