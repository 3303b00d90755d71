//! Domain-level keyboard actions for the demo editor, independent of key
//! bindings.

/// User intents the demo editor understands.
///
/// These represent intent, not specific keys. The mapping from
/// `crossterm::event::KeyEvent` to `KeyAction` is handled by `KeyBindings`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    /// Move the cursor to the next pick-up or drop target. Default: l/→/j/↓
    NextTarget,
    /// Move the cursor to the previous pick-up or drop target. Default: h/←/k/↑
    PrevTarget,
    /// Lift the node under the cursor, or drop the lifted node on the
    /// current target. Default: Enter/Space
    Activate,
    /// Abort the in-flight drag without committing. Default: Esc
    CancelDrag,
    /// Write the tree back to its JSON file. Default: s
    Save,
    /// Toggle the help overlay. Default: ?
    Help,
    /// Exit the editor. Default: q/Ctrl+c
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn actions_discriminate() {
        assert_ne!(KeyAction::NextTarget, KeyAction::PrevTarget);
        assert_ne!(KeyAction::Activate, KeyAction::CancelDrag);
    }

    #[test]
    fn action_copies_compare_equal() {
        let a = KeyAction::Activate;
        let b = a;
        assert_eq!(a, b);
    }
}
