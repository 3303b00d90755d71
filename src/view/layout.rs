//! Sortable layout computation (composition layer).
//!
//! Arranges the tree into render rows with interleaved group gaps, marks the
//! lifted item and the tentative preview slot, and assigns every virtual
//! drop-target id. No reordering logic lives here; this module only
//! describes what the renderer should draw and which ids the sensor may
//! report.

use crate::index::ContainerIndex;
use crate::model::{NodeId, Tree};
use crate::state::EditorState;
use crate::target::{column_indicator_id, drop_zone_id};

/// A between-groups gap slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GapSlot {
    /// Virtual drop-zone id for this gap.
    pub id: String,
    /// Insertion position in the top-level group list.
    pub index: usize,
    /// True when the sensor cursor is on this gap.
    pub hovered: bool,
}

/// A column cell inside a group row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellSlot {
    /// Column id.
    pub column_id: NodeId,
    /// Display label (host-provided, falls back to the id).
    pub label: String,
    /// Number of content elements riding along with the column.
    pub element_count: usize,
    /// True when this column is the lifted item.
    pub lifted: bool,
    /// True when the sensor cursor is on this column.
    pub hovered: bool,
}

/// One group row of the layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutRow {
    /// Group id.
    pub group_id: NodeId,
    /// Display label (host-provided, falls back to the id).
    pub label: String,
    /// True when this group is the lifted item.
    pub lifted: bool,
    /// True when the sensor cursor is on the group itself.
    pub hovered: bool,
    /// Tentative column insertion slot inside this row, if the current
    /// drop preview targets it.
    pub preview_index: Option<usize>,
    /// Column cells, left to right.
    pub cells: Vec<CellSlot>,
}

/// Overlay descriptor for the currently dragged item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayItem {
    /// Dragged node id.
    pub id: NodeId,
    /// Display label.
    pub label: String,
    /// True when the dragged node is a group.
    pub is_group: bool,
}

/// Complete render description for one frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortableLayout {
    /// Group rows, top to bottom.
    pub rows: Vec<LayoutRow>,
    /// Gap slots; `gaps[i]` sits above `rows[i]`, with one trailing gap.
    pub gaps: Vec<GapSlot>,
    /// The dragged item, drawn over everything else.
    pub overlay: Option<OverlayItem>,
}

impl SortableLayout {
    /// Compute the layout for the current state and sensor hover target.
    pub fn compute(state: &EditorState, hover: Option<&str>) -> Self {
        let tree = &state.tree;
        let index = ContainerIndex::build(tree);
        let active = state.active_id.as_ref();

        let gaps = (0..=tree.len())
            .map(|i| {
                let id = drop_zone_id(i);
                let hovered = hover == Some(id.as_str());
                GapSlot {
                    id,
                    index: i,
                    hovered,
                }
            })
            .collect();

        let rows = tree
            .groups()
            .iter()
            .map(|group| {
                let lifted = active == Some(&group.id);
                let preview_index = state
                    .drop_preview
                    .as_ref()
                    .filter(|p| p.container_id == group.id)
                    .map(|p| p.insert_index.min(group.children.len()));
                LayoutRow {
                    label: display_label(&group.id, group.element.label()),
                    hovered: hover == Some(group.id.as_str()),
                    lifted,
                    preview_index,
                    cells: group
                        .children
                        .iter()
                        .map(|column| CellSlot {
                            label: display_label(&column.id, column.element.label()),
                            element_count: column.children.len(),
                            lifted: active == Some(&column.id),
                            hovered: hover == Some(column.id.as_str()),
                            column_id: column.id.clone(),
                        })
                        .collect(),
                    group_id: group.id.clone(),
                }
            })
            .collect();

        let overlay = active.map(|id| {
            let is_group = index.is_container(id);
            let label = tree
                .group(id)
                .map(|g| display_label(&g.id, g.element.label()))
                .or_else(|| {
                    index.container_of(id).and_then(|gid| {
                        let group = tree.group(gid)?;
                        let position = group.column_position(id)?;
                        let column = &group.children[position];
                        Some(display_label(&column.id, column.element.label()))
                    })
                })
                .unwrap_or_else(|| id.to_string());
            OverlayItem {
                id: id.clone(),
                label,
                is_group,
            }
        });

        Self {
            rows,
            gaps,
            overlay,
        }
    }
}

fn display_label(id: &NodeId, label: Option<&str>) -> String {
    label.map(str::to_owned).unwrap_or_else(|| id.to_string())
}

/// Candidate ids the sensor may lift while no drag is in flight: every group
/// followed by its columns, in render order.
pub fn pickup_targets(tree: &Tree) -> Vec<String> {
    let mut targets = Vec::new();
    for group in tree.groups() {
        targets.push(group.id.to_string());
        for column in &group.children {
            targets.push(column.id.to_string());
        }
    }
    targets
}

/// Candidate hover targets for an in-flight drag.
///
/// Group drags traverse the other groups. Column drags traverse, per group:
/// the gap above it, the group body, then indicator slots interleaved with
/// the columns, and finally the trailing gap.
pub fn drop_targets(tree: &Tree, active: &NodeId) -> Vec<String> {
    let index = ContainerIndex::build(tree);
    let mut targets = Vec::new();

    if index.is_container(active) {
        for group in tree.groups() {
            if &group.id != active {
                targets.push(group.id.to_string());
            }
        }
        return targets;
    }

    for (i, group) in tree.groups().iter().enumerate() {
        targets.push(drop_zone_id(i));
        targets.push(group.id.to_string());
        for (j, column) in group.children.iter().enumerate() {
            targets.push(column_indicator_id(&group.id, j));
            if column.id != *active {
                targets.push(column.id.to_string());
            }
        }
        targets.push(column_indicator_id(&group.id, group.children.len()));
    }
    targets.push(drop_zone_id(tree.len()));
    targets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Column, DropPreview, Element, Group};
    use serde_json::json;

    fn id(s: &str) -> NodeId {
        NodeId::new(s).expect("valid id")
    }

    fn tree() -> Tree {
        Tree::new(vec![
            Group::new(
                id("g1"),
                Element::new(json!({"label": "Row one"})),
                vec![
                    Column::new(id("a"), Element::new(json!({"label": "Intro"}))),
                    Column::new(id("b"), Element::null()),
                ],
            ),
            Group::new(
                id("g2"),
                Element::null(),
                vec![Column::new(id("c"), Element::null())],
            ),
        ])
    }

    #[test]
    fn layout_mirrors_tree_order() {
        let layout = SortableLayout::compute(&EditorState::new(tree()), None);
        assert_eq!(layout.rows.len(), 2);
        assert_eq!(layout.gaps.len(), 3);
        assert_eq!(layout.rows[0].cells.len(), 2);
        assert_eq!(layout.rows[0].label, "Row one");
        assert_eq!(layout.rows[1].label, "g2", "falls back to id");
    }

    #[test]
    fn lifted_flags_follow_active_id() {
        let mut state = EditorState::new(tree());
        state.active_id = Some(id("b"));
        let layout = SortableLayout::compute(&state, None);
        assert!(layout.rows[0].cells[1].lifted);
        assert!(!layout.rows[0].cells[0].lifted);
        let overlay = layout.overlay.expect("overlay present");
        assert_eq!(overlay.id, id("b"));
        assert!(!overlay.is_group);
    }

    #[test]
    fn preview_marks_owning_row_only() {
        let mut state = EditorState::new(tree());
        state.active_id = Some(id("a"));
        state.drop_preview = Some(DropPreview::new(id("g2"), 1));
        let layout = SortableLayout::compute(&state, None);
        assert_eq!(layout.rows[0].preview_index, None);
        assert_eq!(layout.rows[1].preview_index, Some(1));
    }

    #[test]
    fn preview_index_clamps_to_cell_count() {
        let mut state = EditorState::new(tree());
        state.drop_preview = Some(DropPreview::new(id("g2"), 9));
        let layout = SortableLayout::compute(&state, None);
        assert_eq!(layout.rows[1].preview_index, Some(1));
    }

    #[test]
    fn hover_flags_follow_sensor_cursor() {
        let layout = SortableLayout::compute(&EditorState::new(tree()), Some("drop-zone-1"));
        assert!(layout.gaps[1].hovered);
        assert!(!layout.gaps[0].hovered);
    }

    #[test]
    fn pickup_targets_walk_groups_then_columns() {
        assert_eq!(
            pickup_targets(&tree()),
            vec!["g1", "a", "b", "g2", "c"]
        );
    }

    #[test]
    fn drop_targets_for_group_drag_are_other_groups() {
        assert_eq!(drop_targets(&tree(), &id("g1")), vec!["g2"]);
    }

    #[test]
    fn drop_targets_for_column_drag_interleave_slots() {
        let targets = drop_targets(&tree(), &id("a"));
        assert_eq!(
            targets,
            vec![
                "drop-zone-0",
                "g1",
                "drop-indicator-g1-0",
                "drop-indicator-g1-1",
                "b",
                "drop-indicator-g1-2",
                "drop-zone-1",
                "g2",
                "drop-indicator-g2-0",
                "c",
                "drop-indicator-g2-1",
                "drop-zone-2",
            ]
        );
    }

    #[test]
    fn overlay_label_for_group_drag() {
        let mut state = EditorState::new(tree());
        state.active_id = Some(id("g1"));
        let layout = SortableLayout::compute(&state, None);
        let overlay = layout.overlay.expect("overlay present");
        assert_eq!(overlay.label, "Row one");
        assert!(overlay.is_group);
    }
}
