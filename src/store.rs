//! Tree persistence for the demo editor (impure shell).
//!
//! The engine itself never touches disk; the hosting shell loads the tree
//! once, hands snapshots to the engine, and writes committed trees back out.

use crate::model::{Column, Element, Group, NodeId, Tree, TreeFileError};
use serde_json::json;
use std::path::Path;
use tracing::info;

/// Load a tree from a JSON file, validating the no-empty-group invariant so
/// a hand-edited file cannot smuggle an invalid tree into the engine.
pub fn load_tree(path: &Path) -> Result<Tree, TreeFileError> {
    if !path.exists() {
        return Err(TreeFileError::NotFound {
            path: path.to_path_buf(),
        });
    }
    let raw = std::fs::read_to_string(path)?;
    let tree: Tree = serde_json::from_str(&raw).map_err(|e| TreeFileError::Malformed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    if let Some(empty) = tree.groups().iter().find(|g| g.children.is_empty()) {
        return Err(TreeFileError::EmptyGroup {
            path: path.to_path_buf(),
            group_id: empty.id.to_string(),
        });
    }
    info!(path = %path.display(), groups = tree.len(), "tree loaded");
    Ok(tree)
}

/// Write the tree back out as pretty-printed JSON.
pub fn save_tree(path: &Path, tree: &Tree) -> Result<(), TreeFileError> {
    let raw = serde_json::to_string_pretty(tree).map_err(|e| TreeFileError::Malformed {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    std::fs::write(path, raw)?;
    info!(path = %path.display(), groups = tree.len(), "tree saved");
    Ok(())
}

/// Builtin sample tree used when no file is given: a small three-row tour
/// layout worth dragging around.
pub fn sample_tree() -> Tree {
    fn id(s: &str) -> NodeId {
        // Literals below are non-empty.
        NodeId::new(s).unwrap_or_else(|_| unreachable!())
    }
    fn labeled(label: &str) -> Element {
        Element::new(json!({ "label": label }))
    }
    fn column(cid: &str, label: &str, items: &[&str]) -> Column {
        Column {
            id: id(cid),
            element: labeled(label),
            children: items
                .iter()
                .map(|kind| Element::new(json!({ "kind": kind })))
                .collect(),
        }
    }

    Tree::new(vec![
        Group::new(
            id("group-hero"),
            labeled("Hero"),
            vec![
                column("col-title", "Title", &["heading", "subheading"]),
                column("col-art", "Artwork", &["image"]),
            ],
        ),
        Group::new(
            id("group-steps"),
            labeled("Steps"),
            vec![
                column("col-step-1", "Step 1", &["text"]),
                column("col-step-2", "Step 2", &["text"]),
                column("col-step-3", "Step 3", &["text", "button"]),
            ],
        ),
        Group::new(
            id("group-footer"),
            labeled("Footer"),
            vec![column("col-cta", "Call to action", &["button"])],
        ),
    ])
}
