//! Root editor state for the drag engine.

use crate::model::{DropPreview, NodeId, Tree};

/// Explicit engine state threaded through every transition.
///
/// The tree is replaced, never mutated in place, on each committed
/// transition; `active_id` and `drop_preview` are transient gesture state,
/// reset on drag end or cancel. During a gesture these three values are
/// owned exclusively by the drag state machine.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorState {
    /// Single source-of-truth layout tree.
    pub tree: Tree,
    /// Id of the entity currently being dragged, if any.
    pub active_id: Option<NodeId>,
    /// Tentative column placement for visual feedback, if any.
    pub drop_preview: Option<DropPreview>,
}

impl EditorState {
    /// Fresh state around a loaded tree; no gesture in flight.
    pub fn new(tree: Tree) -> Self {
        Self {
            tree,
            active_id: None,
            drop_preview: None,
        }
    }

    /// True while a drag gesture is in progress.
    pub fn is_dragging(&self) -> bool {
        self.active_id.is_some()
    }

    /// Replace the stored preview, short-circuiting on equality.
    ///
    /// Returns whether the stored value actually changed. The short-circuit
    /// is a performance contract (downstream renders key off preview
    /// replacement), not a correctness one.
    pub fn set_preview(&mut self, preview: Option<DropPreview>) -> bool {
        if self.drop_preview == preview {
            false
        } else {
            self.drop_preview = preview;
            true
        }
    }
}
