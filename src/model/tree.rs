//! The layout tree: groups of columns of opaque elements.
//!
//! Render order is semantic order: groups top to bottom, columns left to
//! right within a group. The committed tree upholds one structural invariant:
//! every group holds at least one column. The drag state machine is the only
//! component that replaces the tree during a gesture; everything else treats
//! it as an immutable snapshot.

use crate::model::{Element, NodeId};
use serde::{Deserialize, Serialize};

/// A vertical slot inside a group, holding an ordered list of opaque content
/// elements that move atomically with it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    /// Unique, stable identifier.
    pub id: NodeId,
    /// Opaque layout descriptor, never interpreted by the engine.
    #[serde(default)]
    pub element: Element,
    /// Ordered content payload.
    #[serde(default)]
    pub children: Vec<Element>,
}

impl Column {
    /// New column with no content.
    pub fn new(id: NodeId, element: Element) -> Self {
        Self {
            id,
            element,
            children: Vec::new(),
        }
    }
}

/// A horizontal row in the layout, holding an ordered list of columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    /// Unique, stable identifier.
    pub id: NodeId,
    /// Opaque layout descriptor, never interpreted by the engine.
    #[serde(default)]
    pub element: Element,
    /// Ordered columns. Committed trees never hold a group with zero columns.
    pub children: Vec<Column>,
}

impl Group {
    /// New group wrapping the given columns.
    pub fn new(id: NodeId, element: Element, children: Vec<Column>) -> Self {
        Self {
            id,
            element,
            children,
        }
    }

    /// Index of a column within this group.
    pub fn column_position(&self, column_id: &NodeId) -> Option<usize> {
        self.children.iter().position(|c| &c.id == column_id)
    }
}

/// Ordered sequence of groups; the single source of truth for the editor
/// layout.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Tree {
    groups: Vec<Group>,
}

impl Tree {
    /// Build a tree from an ordered group list.
    pub fn new(groups: Vec<Group>) -> Self {
        Self { groups }
    }

    /// Groups in render order.
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Mutable access for the state machine's commit helpers.
    pub(crate) fn groups_mut(&mut self) -> &mut Vec<Group> {
        &mut self.groups
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// True when the tree holds no groups.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Look up a group by id.
    pub fn group(&self, id: &NodeId) -> Option<&Group> {
        self.groups.iter().find(|g| &g.id == id)
    }

    /// Index of a group in the top-level sequence.
    pub fn group_position(&self, id: &NodeId) -> Option<usize> {
        self.groups.iter().position(|g| &g.id == id)
    }

    /// Index of a column within the named group.
    pub fn column_position(&self, group_id: &NodeId, column_id: &NodeId) -> Option<usize> {
        self.group(group_id)
            .and_then(|g| g.column_position(column_id))
    }

    /// Total number of columns across all groups.
    ///
    /// Conserved by every drag commit; the property tests pin that.
    pub fn column_count(&self) -> usize {
        self.groups.iter().map(|g| g.children.len()).sum()
    }

    /// True when every group holds at least one column.
    pub fn no_empty_groups(&self) -> bool {
        self.groups.iter().all(|g| !g.children.is_empty())
    }
}
