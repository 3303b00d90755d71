//! Structural mutation helpers used by the drag-end commit branches.
//!
//! All helpers clamp indices instead of panicking; a corrupted gesture must
//! degrade to a harmless move, never to a crash.

use crate::model::{Column, NodeId, Tree};

/// Move `items[from]` to position `to`: remove, then reinsert.
///
/// `to` is interpreted the way the classic array-move does: it is the
/// pre-removal index of the target slot, applied after removal and clamped
/// to the shortened list. Out-of-range `from` is a no-op.
pub fn array_move<T>(items: &mut Vec<T>, from: usize, to: usize) {
    if from >= items.len() {
        return;
    }
    let item = items.remove(from);
    let to = to.min(items.len());
    items.insert(to, item);
}

/// Move a group within the top-level sequence.
pub fn move_group(tree: &mut Tree, from: usize, to: usize) {
    array_move(tree.groups_mut(), from, to);
}

/// Detach a column from its owning group, leaving the group in place even if
/// it is now empty (callers prune afterwards).
pub fn remove_column(tree: &mut Tree, group_id: &NodeId, column_id: &NodeId) -> Option<Column> {
    let group = tree.groups_mut().iter_mut().find(|g| &g.id == group_id)?;
    let position = group.column_position(column_id)?;
    Some(group.children.remove(position))
}

/// Insert a column into a group at `index`, clamped to the column count.
/// Returns false when the group does not exist.
pub fn insert_column(tree: &mut Tree, group_id: &NodeId, index: usize, column: Column) -> bool {
    match tree.groups_mut().iter_mut().find(|g| &g.id == group_id) {
        Some(group) => {
            let index = index.min(group.children.len());
            group.children.insert(index, column);
            true
        }
        None => false,
    }
}

/// Drop every group that has no columns left.
pub fn prune_empty_groups(tree: &mut Tree) {
    tree.groups_mut().retain(|g| !g.children.is_empty());
}

// ===== Tests =====

#[cfg(test)]
#[path = "mutations_tests.rs"]
mod tests;
