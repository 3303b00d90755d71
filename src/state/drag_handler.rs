//! Drag gesture transitions (pure).
//!
//! One function per sensor event kind, each taking the current
//! [`EditorState`] and returning the next one. Sensor events arrive in
//! strict start → over* → end|cancel order for a single gesture; only one
//! gesture exists at a time by construction of the hosting sensor.
//!
//! Two commit strategies coexist on purpose:
//!
//! - **Group drags commit live.** Groups are few, so the top-level order is
//!   re-applied eagerly on every drag-over and drag-end has nothing left to
//!   do. Cancel does not roll these moves back.
//! - **Column drags commit on drop.** Drag-over only maintains the
//!   [`DropPreview`]; the tree changes exactly once, inside the drag-end
//!   branch that matches the release target.
//!
//! Every branch is defensive: missing lookups and malformed virtual ids
//! short-circuit to "previous tree unchanged" rather than panicking.

use crate::index::ContainerIndex;
use crate::model::{DropPreview, NodeId, Tree};
use crate::state::{mutations, EditorState, GroupFactory};
use crate::target::DropTarget;
use tracing::{debug, trace};

/// Begin a gesture: record the lifted entity. No tree mutation.
pub fn handle_drag_start(mut state: EditorState, active: &str) -> EditorState {
    trace!(active, "drag start");
    state.active_id = NodeId::new(active).ok();
    state
}

/// Process a hover update.
///
/// Group drags reorder the top-level group list immediately; column drags
/// only recompute the drop preview.
pub fn handle_drag_over(mut state: EditorState, over: Option<&str>) -> EditorState {
    let Some(active) = state.active_id.clone() else {
        return state;
    };
    let Some(over) = over else {
        state.set_preview(None);
        return state;
    };
    trace!(active = %active, over, "drag over");

    let index = ContainerIndex::build(&state.tree);

    if index.is_container(&active) {
        state.set_preview(None);
        live_reorder_groups(&mut state.tree, &index, &active, over);
        return state;
    }

    match DropTarget::classify(over) {
        // Hovering a between-group gap: no column preview.
        Some(DropTarget::GroupGap { .. }) | None => {
            state.set_preview(None);
        }
        Some(DropTarget::ColumnSlot {
            container_id,
            insert_index,
        }) => {
            state.set_preview(Some(DropPreview::new(container_id, insert_index)));
        }
        Some(DropTarget::Node(over_id)) => {
            let preview = preview_for_node_hover(&state.tree, &index, &active, &over_id);
            state.set_preview(preview);
        }
    }
    state
}

/// Commit the gesture and reset transient drag state.
pub fn handle_drag_end(
    mut state: EditorState,
    over: Option<&str>,
    groups: &mut dyn GroupFactory,
) -> EditorState {
    let Some(active) = state.active_id.clone() else {
        state.set_preview(None);
        return state;
    };

    let degenerate = match over {
        None => true,
        Some(o) => o == active.as_str(),
    };
    let index = ContainerIndex::build(&state.tree);

    if degenerate {
        debug!(active = %active, "drag end: degenerate gesture, no-op");
    } else if index.is_container(&active) {
        // Group order was already applied live during drag-over.
        debug!(active = %active, "drag end: group drag, order already committed");
    } else {
        match over.and_then(DropTarget::classify) {
            Some(DropTarget::GroupGap { index: gap }) => {
                debug!(active = %active, gap, "drag end: split into new group");
                commit_split(&mut state.tree, &index, &active, gap, groups);
            }
            Some(DropTarget::ColumnSlot {
                container_id,
                insert_index,
            }) => {
                debug!(active = %active, container = %container_id, insert_index,
                       "drag end: precise move");
                commit_indicator(&mut state.tree, &index, &active, &container_id, insert_index);
            }
            Some(DropTarget::Node(over_id)) => {
                debug!(active = %active, over = %over_id, "drag end: plain move");
                commit_plain(&mut state.tree, &index, &active, &over_id);
            }
            None => {
                debug!(active = %active, "drag end: malformed target, no-op");
            }
        }
        mutations::prune_empty_groups(&mut state.tree);
    }

    state.active_id = None;
    state.set_preview(None);
    state
}

/// Abort the gesture: reset transient state, commit nothing.
///
/// Live group reorders already applied during drag-over stay in place; only
/// column moves are cancellable.
pub fn handle_drag_cancel(mut state: EditorState) -> EditorState {
    trace!("drag cancel");
    state.active_id = None;
    state.set_preview(None);
    state
}

// ===== Drag-over helpers =====

/// Eagerly move the dragged group to the hovered group's position.
fn live_reorder_groups(tree: &mut Tree, index: &ContainerIndex, active: &NodeId, over: &str) {
    let Some(DropTarget::Node(over_id)) = DropTarget::classify(over) else {
        return;
    };
    let Some(over_group) = index.container_of(&over_id).cloned() else {
        return;
    };
    if over_group == *active {
        return;
    }
    if let (Some(from), Some(to)) = (
        tree.group_position(active),
        tree.group_position(&over_group),
    ) {
        mutations::move_group(tree, from, to);
    }
}

/// Tentative insert position for a column hovering a real node.
///
/// Hovering a group body appends; hovering a column inserts before it,
/// except when the active column already sits earlier in the same group, in
/// which case it inserts after. The directional tie-break is what keeps a
/// left-to-right sweep from flickering against a right-to-left one.
fn preview_for_node_hover(
    tree: &Tree,
    index: &ContainerIndex,
    active: &NodeId,
    over_id: &NodeId,
) -> Option<DropPreview> {
    let active_group = index.container_of(active)?.clone();
    let over_group = index.container_of(over_id)?.clone();

    let insert_index = if index.is_container(over_id) {
        tree.group(&over_group).map(|g| g.children.len())?
    } else {
        let over_index = tree.column_position(&over_group, over_id)?;
        let active_before = active_group == over_group
            && tree
                .column_position(&active_group, active)
                .is_some_and(|a| a < over_index);
        if active_before {
            over_index + 1
        } else {
            over_index
        }
    };
    Some(DropPreview::new(over_group, insert_index))
}

// ===== Drag-end commit branches =====

/// Split the dragged column out into a brand-new singleton group inserted at
/// the gap position.
fn commit_split(
    tree: &mut Tree,
    index: &ContainerIndex,
    active: &NodeId,
    gap_index: usize,
    groups: &mut dyn GroupFactory,
) {
    let Some(source_group) = index.container_of(active).cloned() else {
        return;
    };
    let Some(source_pos) = tree.group_position(&source_group) else {
        return;
    };
    let Some(column) = mutations::remove_column(tree, &source_group, active) else {
        return;
    };

    let source_removed = tree
        .group(&source_group)
        .is_some_and(|g| g.children.is_empty());
    if source_removed {
        tree.groups_mut().remove(source_pos);
    }

    // The gap index addresses the pre-removal group list; removing an
    // earlier source group shifts the insertion point down by one.
    let mut insert_at = gap_index;
    if source_removed && source_pos < gap_index {
        insert_at -= 1;
    }
    let insert_at = insert_at.min(tree.len());

    let new_group = groups.group_from_column(column);
    tree.groups_mut().insert(insert_at, new_group);
}

/// Move the dragged column to a decoded `(container, insert_index)` target.
fn commit_indicator(
    tree: &mut Tree,
    index: &ContainerIndex,
    active: &NodeId,
    container_id: &NodeId,
    insert_index: usize,
) {
    let Some(source_group) = index.container_of(active).cloned() else {
        return;
    };
    if tree.group(container_id).is_none() {
        return;
    }

    if source_group == *container_id {
        let Some(current) = tree.column_position(&source_group, active) else {
            return;
        };
        let Some(column) = mutations::remove_column(tree, &source_group, active) else {
            return;
        };
        // Removal shifts later slots down by one.
        let adjusted = if current < insert_index {
            insert_index - 1
        } else {
            insert_index
        };
        mutations::insert_column(tree, &source_group, adjusted, column);
    } else {
        let Some(column) = mutations::remove_column(tree, &source_group, active) else {
            return;
        };
        mutations::insert_column(tree, container_id, insert_index, column);
    }
}

/// Column released directly over a column or group with no virtual target.
fn commit_plain(tree: &mut Tree, index: &ContainerIndex, active: &NodeId, over_id: &NodeId) {
    let Some(active_group) = index.container_of(active).cloned() else {
        return;
    };
    let Some(over_group) = index.container_of(over_id).cloned() else {
        return;
    };

    if active_group == over_group {
        if index.is_container(over_id) {
            // Released on the body of its own group: nothing to reorder.
            return;
        }
        let Some(from) = tree.column_position(&active_group, active) else {
            return;
        };
        let Some(to) = tree.column_position(&active_group, over_id) else {
            return;
        };
        if let Some(group) = tree.groups_mut().iter_mut().find(|g| g.id == active_group) {
            mutations::array_move(&mut group.children, from, to);
        }
    } else {
        // Insert before the hovered column, or append when hovering the
        // group body. Target indices are unaffected by removal from a
        // different group.
        let to = if index.is_container(over_id) {
            tree.group(&over_group).map(|g| g.children.len())
        } else {
            tree.column_position(&over_group, over_id)
        };
        let Some(to) = to else {
            return;
        };
        let Some(column) = mutations::remove_column(tree, &active_group, active) else {
            return;
        };
        mutations::insert_column(tree, &over_group, to, column);
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "drag_handler_tests.rs"]
mod tests;
