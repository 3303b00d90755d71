//! Drag state machine (pure).
//!
//! All transitions are pure functions over an immutable tree snapshot,
//! testable without any terminal. [`dispatch`] is the single entry point the
//! hosting shell feeds sensor events through.

pub mod drag_handler;
pub mod editor_state;
pub mod mutations;

pub use drag_handler::{
    handle_drag_cancel, handle_drag_end, handle_drag_over, handle_drag_start,
};
pub use editor_state::EditorState;

use crate::model::{Column, Element, Group, NodeId};

/// Events delivered by the hosting drag sensor.
///
/// Ids are opaque strings already assigned to groups, columns, drop-zones,
/// and drop-indicators by the rendering layer. Delivery order for one
/// gesture is start → over* → end|cancel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SensorEvent {
    /// A node was lifted.
    Start {
        /// Id of the lifted group or column.
        active: String,
    },
    /// The nearest-over target changed (or disappeared).
    Over {
        /// Current hover target, if any.
        over: Option<String>,
    },
    /// The lifted node was released.
    End {
        /// Release target, if any.
        over: Option<String>,
    },
    /// The gesture was aborted.
    Cancel,
}

/// Host-supplied constructor for the singleton group created by the split
/// branch.
///
/// The engine never invents ids or layout descriptors; wrapping a column in
/// a brand-new group is the hosting environment's call.
pub trait GroupFactory {
    /// Wrap a detached column in a fresh single-column group.
    fn group_from_column(&mut self, column: Column) -> Group;
}

/// [`GroupFactory`] handing out sequentially numbered group ids.
///
/// Callers pick a prefix disjoint from every id already in the tree; ids are
/// never reused within a session.
#[derive(Debug, Clone)]
pub struct CountingGroups {
    prefix: String,
    next: u64,
}

impl CountingGroups {
    /// Factory producing ids `{prefix}-1`, `{prefix}-2`, ...
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            next: 0,
        }
    }
}

impl GroupFactory for CountingGroups {
    fn group_from_column(&mut self, column: Column) -> Group {
        self.next += 1;
        let id = NodeId::new(format!("{}-{}", self.prefix, self.next))
            .unwrap_or_else(|_| column.id.clone());
        Group::new(id, Element::null(), vec![column])
    }
}

/// Apply one sensor event to the editor state.
pub fn dispatch(
    state: EditorState,
    event: SensorEvent,
    groups: &mut dyn GroupFactory,
) -> EditorState {
    match event {
        SensorEvent::Start { active } => handle_drag_start(state, &active),
        SensorEvent::Over { over } => handle_drag_over(state, over.as_deref()),
        SensorEvent::End { over } => handle_drag_end(state, over.as_deref(), groups),
        SensorEvent::Cancel => handle_drag_cancel(state),
    }
}
