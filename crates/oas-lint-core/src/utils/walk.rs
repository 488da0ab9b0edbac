//! Depth-first traversal of a document tree.
//!
//! The walker visits every node exactly once in pre-order: a node is handed
//! to the visitor before its children, mapping entries follow document order
//! and sequence elements follow index order. Traversal uses an explicit
//! work-list, not recursion.
//!
//! `$ref` nodes are ordinary mappings to the walker; references are never
//! followed.

use crate::types::{DocPath, PathSegment};
use crate::utils::classify::NodeKind;
use serde_json::Value;

/// Walks `node` (located at `path`) and everything below it.
///
/// The visitor receives each node, its full path from the document root and
/// its [`NodeKind`]. Each visit gets its own path value, so retaining a path
/// past the callback requires only a clone.
pub fn walk<'a, F>(node: &'a Value, path: DocPath, mut visitor: F)
where
    F: FnMut(&'a Value, &DocPath, NodeKind),
{
    let kind = NodeKind::of(&path);
    let mut pending = vec![(node, path, kind)];

    while let Some((node, path, kind)) = pending.pop() {
        visitor(node, &path, kind);

        // Children are pushed in reverse so they pop in document order.
        match node {
            Value::Object(map) => {
                for (key, child) in map.iter().rev() {
                    let segment = PathSegment::Key(key.clone());
                    let child_kind = kind.child(&segment);
                    pending.push((child, path.child(segment), child_kind));
                }
            }
            Value::Array(items) => {
                for (index, child) in items.iter().enumerate().rev() {
                    pending.push((child, path.child(index), NodeKind::Other));
                }
            }
            _ => {}
        }
    }
}

/// Walks a whole document starting from its root.
pub fn walk_document<'a, F>(root: &'a Value, visitor: F)
where
    F: FnMut(&'a Value, &DocPath, NodeKind),
{
    walk(root, DocPath::root(), visitor);
}
