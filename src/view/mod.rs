//! Rendering/composition layer (no reordering logic).

pub mod layout;
pub mod render;
pub mod styles;

pub use layout::{drop_targets, pickup_targets, SortableLayout};
pub use render::{render_editor, render_help_overlay};
pub use styles::{ColorConfig, EditorStyles};
