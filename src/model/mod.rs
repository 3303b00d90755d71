//! Domain model: the layout tree and its companion value types (pure).

pub mod element;
pub mod error;
pub mod identifiers;
pub mod key_action;
pub mod preview;
pub mod tree;

pub use element::Element;
pub use error::{AppError, TreeFileError};
pub use identifiers::{InvalidNodeId, NodeId};
pub use key_action::KeyAction;
pub use preview::DropPreview;
pub use tree::{Column, Group, Tree};
