//! Container index: O(1) ownership lookups derived from the tree.
//!
//! Built in one pass over the current tree snapshot and rebuilt whenever the
//! tree changes (once per transition; trees are small, so a full rebuild
//! beats incremental bookkeeping). Lookups have no error cases: unknown ids
//! simply come back as "not found".

use crate::model::{NodeId, Tree};
use std::collections::{HashMap, HashSet};

/// Lookup maps from node ids to their owning group.
#[derive(Debug, Clone, Default)]
pub struct ContainerIndex {
    /// Any group or column id, mapped to the owning group id. Groups map to
    /// themselves.
    owner: HashMap<NodeId, NodeId>,
    /// All group ids.
    containers: HashSet<NodeId>,
}

impl ContainerIndex {
    /// Build the index from a tree snapshot in a single pass.
    pub fn build(tree: &Tree) -> Self {
        let mut owner = HashMap::new();
        let mut containers = HashSet::new();
        for group in tree.groups() {
            owner.insert(group.id.clone(), group.id.clone());
            containers.insert(group.id.clone());
            for column in &group.children {
                owner.insert(column.id.clone(), group.id.clone());
            }
        }
        Self { owner, containers }
    }

    /// Id of the group owning `id`, if any. A group owns itself.
    pub fn container_of(&self, id: &NodeId) -> Option<&NodeId> {
        self.owner.get(id)
    }

    /// True iff `id` names a group.
    pub fn is_container(&self, id: &NodeId) -> bool {
        self.containers.contains(id)
    }

    /// Number of groups indexed.
    pub fn container_count(&self) -> usize {
        self.containers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Column, Element, Group};

    fn id(s: &str) -> NodeId {
        NodeId::new(s).expect("valid id")
    }

    fn tree() -> Tree {
        Tree::new(vec![
            Group::new(
                id("g1"),
                Element::null(),
                vec![
                    Column::new(id("a"), Element::null()),
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
    fn column_maps_to_owning_group() {
        let index = ContainerIndex::build(&tree());
        assert_eq!(index.container_of(&id("b")), Some(&id("g1")));
        assert_eq!(index.container_of(&id("c")), Some(&id("g2")));
    }

    #[test]
    fn group_maps_to_itself() {
        let index = ContainerIndex::build(&tree());
        assert_eq!(index.container_of(&id("g2")), Some(&id("g2")));
    }

    #[test]
    fn unknown_id_is_not_found() {
        let index = ContainerIndex::build(&tree());
        assert_eq!(index.container_of(&id("nope")), None);
        assert!(!index.is_container(&id("nope")));
    }

    #[test]
    fn is_container_true_only_for_groups() {
        let index = ContainerIndex::build(&tree());
        assert!(index.is_container(&id("g1")));
        assert!(!index.is_container(&id("a")));
    }

    #[test]
    fn empty_tree_builds_empty_index() {
        let index = ContainerIndex::build(&Tree::default());
        assert_eq!(index.container_count(), 0);
        assert_eq!(index.container_of(&id("g1")), None);
    }

    #[test]
    fn container_count_matches_group_count() {
        let index = ContainerIndex::build(&tree());
        assert_eq!(index.container_count(), 2);
    }
}
