//! Tentative drop placement for a dragged column.

use crate::model::NodeId;

/// Where a dragged column would land if released now.
///
/// Purely visual feedback during drag-over; never mutates the tree by
/// itself. At most one preview exists at a time, and writes are equality
/// short-circuited to avoid redundant re-renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropPreview {
    /// Group that would receive the column.
    pub container_id: NodeId,
    /// Position within that group's column list.
    pub insert_index: usize,
}

impl DropPreview {
    /// New preview placement.
    pub fn new(container_id: NodeId, insert_index: usize) -> Self {
        Self {
            container_id,
            insert_index,
        }
    }
}
