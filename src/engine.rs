//! Engine façade: owns the editor state and notifies the host of changes.
//!
//! The pure transitions in [`crate::state`] know nothing about storage; this
//! wrapper feeds them sensor events and surfaces the three state replacements
//! the hosting environment cares about (tree, active id, drop preview)
//! through [`EngineHooks`] callbacks. The preview callback inherits the
//! equality short-circuit, so hosts only re-render indicators when the
//! placement actually moved.

use crate::model::{DropPreview, NodeId, Tree};
use crate::state::{dispatch, EditorState, GroupFactory, SensorEvent};

/// Host callbacks invoked after each event for every piece of state that
/// changed.
pub trait EngineHooks {
    /// The committed tree was replaced.
    fn tree_replaced(&mut self, tree: &Tree);
    /// The dragged entity changed (or the gesture ended).
    fn active_changed(&mut self, active: Option<&NodeId>);
    /// The tentative drop placement changed.
    fn preview_changed(&mut self, preview: Option<&DropPreview>);
}

/// Hooks implementation that ignores every notification.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHooks;

impl EngineHooks for NoHooks {
    fn tree_replaced(&mut self, _tree: &Tree) {}
    fn active_changed(&mut self, _active: Option<&NodeId>) {}
    fn preview_changed(&mut self, _preview: Option<&DropPreview>) {}
}

/// Drag engine: editor state plus the host's group factory.
#[derive(Debug)]
pub struct Engine<F: GroupFactory> {
    state: EditorState,
    groups: F,
}

impl<F: GroupFactory> Engine<F> {
    /// New engine around a loaded tree.
    pub fn new(tree: Tree, groups: F) -> Self {
        Self {
            state: EditorState::new(tree),
            groups,
        }
    }

    /// Current state snapshot.
    pub fn state(&self) -> &EditorState {
        &self.state
    }

    /// Feed one sensor event through the state machine, notifying `hooks`
    /// about each piece of state that changed.
    pub fn apply(&mut self, event: SensorEvent, hooks: &mut dyn EngineHooks) {
        let previous = self.state.clone();
        let next = dispatch(previous.clone(), event, &mut self.groups);

        if next.tree != previous.tree {
            hooks.tree_replaced(&next.tree);
        }
        if next.active_id != previous.active_id {
            hooks.active_changed(next.active_id.as_ref());
        }
        if next.drop_preview != previous.drop_preview {
            hooks.preview_changed(next.drop_preview.as_ref());
        }
        self.state = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Column, Element, Group};
    use crate::state::CountingGroups;

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

    #[derive(Default)]
    struct Recording {
        trees: usize,
        actives: usize,
        previews: usize,
    }

    impl EngineHooks for Recording {
        fn tree_replaced(&mut self, _tree: &Tree) {
            self.trees += 1;
        }
        fn active_changed(&mut self, _active: Option<&NodeId>) {
            self.actives += 1;
        }
        fn preview_changed(&mut self, _preview: Option<&DropPreview>) {
            self.previews += 1;
        }
    }

    #[test]
    fn start_notifies_active_only() {
        let mut engine = Engine::new(tree(), CountingGroups::new("new"));
        let mut hooks = Recording::default();
        engine.apply(
            SensorEvent::Start {
                active: "b".into(),
            },
            &mut hooks,
        );
        assert_eq!((hooks.trees, hooks.actives, hooks.previews), (0, 1, 0));
    }

    #[test]
    fn repeated_equal_hover_fires_preview_hook_once() {
        let mut engine = Engine::new(tree(), CountingGroups::new("new"));
        let mut hooks = Recording::default();
        engine.apply(
            SensorEvent::Start {
                active: "b".into(),
            },
            &mut hooks,
        );
        engine.apply(
            SensorEvent::Over {
                over: Some("c".into()),
            },
            &mut hooks,
        );
        engine.apply(
            SensorEvent::Over {
                over: Some("c".into()),
            },
            &mut hooks,
        );
        assert_eq!(hooks.previews, 1, "equality short-circuit holds");
    }

    #[test]
    fn commit_notifies_tree_and_clears_gesture_state() {
        let mut engine = Engine::new(tree(), CountingGroups::new("new"));
        let mut hooks = Recording::default();
        engine.apply(
            SensorEvent::Start {
                active: "b".into(),
            },
            &mut hooks,
        );
        engine.apply(
            SensorEvent::End {
                over: Some("c".into()),
            },
            &mut hooks,
        );
        assert_eq!(hooks.trees, 1);
        assert!(engine.state().active_id.is_none());
        assert_eq!(
            engine
                .state()
                .tree
                .group(&id("g2"))
                .map(|g| g.children.len()),
            Some(2)
        );
    }

    #[test]
    fn cancel_without_changes_fires_nothing_but_active() {
        let mut engine = Engine::new(tree(), CountingGroups::new("new"));
        let mut hooks = Recording::default();
        engine.apply(
            SensorEvent::Start {
                active: "b".into(),
            },
            &mut hooks,
        );
        engine.apply(SensorEvent::Cancel, &mut hooks);
        assert_eq!(hooks.trees, 0);
        assert_eq!(hooks.actives, 2, "set then cleared");
    }
}
