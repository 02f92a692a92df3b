//! Collapsible tree over JSON-like resource data.
//!
//! Nodes are identified by `TreePath`, a sequence of keys. Identity is
//! segment-wise, so a key that itself contains a dot never collides with a
//! nested path.

use crate::domain::a002_cloud_resource::CloudResource;
use serde_json::{Map, Value};
use std::collections::HashSet;
use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct TreePath(Vec<String>);

impl TreePath {
    pub fn root() -> Self {
        Self::default()
    }

    pub fn child(&self, key: &str) -> Self {
        let mut segments = self.0.clone();
        segments.push(key.to_string());
        Self(segments)
    }

    pub fn segments(&self) -> &[String] {
        &self.0
    }
}

impl<S: Into<String>> FromIterator<S> for TreePath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

/// Dot-joined form, for logs and DOM ids only
impl fmt::Display for TreePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join("."))
    }
}

/// Paths whose subtrees are hidden. Everything else is expanded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollapsedSet(HashSet<TreePath>);

impl CollapsedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flips membership of `path`. Returns true if it is now collapsed.
    pub fn toggle(&mut self, path: &TreePath) -> bool {
        if self.0.remove(path) {
            false
        } else {
            self.0.insert(path.clone());
            true
        }
    }

    pub fn is_collapsed(&self, path: &TreePath) -> bool {
        self.0.contains(path)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum TreeNode {
    /// Array value: header with item count, items shown flat
    List {
        path: TreePath,
        key: String,
        items: Vec<String>,
    },
    /// Nested object: header, children recurse
    Object {
        path: TreePath,
        key: String,
        children: Vec<TreeNode>,
    },
    /// Scalar: `key: value`
    Leaf {
        path: TreePath,
        key: String,
        value: String,
    },
}

impl TreeNode {
    pub fn path(&self) -> &TreePath {
        match self {
            TreeNode::List { path, .. }
            | TreeNode::Object { path, .. }
            | TreeNode::Leaf { path, .. } => path,
        }
    }
}

/// String form of a value as shown on a leaf line
pub fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Builds nodes for every field of `object` under `parent`.
pub fn build_nodes(object: &Map<String, Value>, parent: &TreePath) -> Vec<TreeNode> {
    object
        .iter()
        .map(|(key, value)| {
            let path = parent.child(key);
            let key = key.clone();
            match value {
                Value::Array(items) => TreeNode::List {
                    path,
                    key,
                    items: items.iter().map(display_value).collect(),
                },
                Value::Object(fields) => {
                    let children = build_nodes(fields, &path);
                    TreeNode::Object {
                        path,
                        key,
                        children,
                    }
                }
                scalar => TreeNode::Leaf {
                    path,
                    key,
                    value: display_value(scalar),
                },
            }
        })
        .collect()
}

/// Top-level node of one provider, keyed by the bare provider name
pub fn provider_root(resource: &CloudResource) -> TreeNode {
    let path = TreePath::root().child(&resource.provider);
    TreeNode::Object {
        children: build_nodes(&resource.to_tree_map(), &path),
        key: resource.provider.clone(),
        path,
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RowKind {
    Header {
        label: String,
        /// Item count, for list headers
        count: Option<usize>,
        collapsed: bool,
    },
    Item(String),
    Leaf {
        key: String,
        value: String,
    },
}

/// One rendered line of the tree
#[derive(Debug, Clone, PartialEq)]
pub struct TreeRow {
    /// Unique within one `visible_rows` call; render key together with `kind`
    pub id: String,
    pub depth: usize,
    pub path: TreePath,
    pub kind: RowKind,
}

/// Flattens `nodes` into display order, skipping collapsed subtrees.
pub fn visible_rows(nodes: &[TreeNode], collapsed: &CollapsedSet) -> Vec<TreeRow> {
    let mut rows = Vec::new();
    for node in nodes {
        push_rows(node, collapsed, 0, &mut rows);
    }
    rows
}

fn push_rows(node: &TreeNode, collapsed: &CollapsedSet, depth: usize, rows: &mut Vec<TreeRow>) {
    let path = node.path().clone();
    let id = path.segments().join("\u{1f}");

    match node {
        TreeNode::List { key, items, .. } => {
            let is_collapsed = collapsed.is_collapsed(&path);
            rows.push(TreeRow {
                id: id.clone(),
                depth,
                path: path.clone(),
                kind: RowKind::Header {
                    label: key.clone(),
                    count: Some(items.len()),
                    collapsed: is_collapsed,
                },
            });
            if !is_collapsed {
                rows.extend(items.iter().enumerate().map(|(idx, item)| TreeRow {
                    id: format!("{}\u{1e}{}", id, idx),
                    depth: depth + 1,
                    path: path.clone(),
                    kind: RowKind::Item(item.clone()),
                }));
            }
        }
        TreeNode::Object { key, children, .. } => {
            let is_collapsed = collapsed.is_collapsed(&path);
            rows.push(TreeRow {
                id,
                depth,
                path,
                kind: RowKind::Header {
                    label: key.clone(),
                    count: None,
                    collapsed: is_collapsed,
                },
            });
            if !is_collapsed {
                for child in children {
                    push_rows(child, collapsed, depth + 1, rows);
                }
            }
        }
        TreeNode::Leaf { key, value, .. } => rows.push(TreeRow {
            id,
            depth,
            path,
            kind: RowKind::Leaf {
                key: key.clone(),
                value: value.clone(),
            },
        }),
    }
}
