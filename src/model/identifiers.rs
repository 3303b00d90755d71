//! Node identifier newtype with a smart constructor.
//!
//! Group and column ids are opaque, globally unique strings assigned by the
//! hosting environment. They are validated non-empty at construction time;
//! the raw constructor is never exported.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a node in the layout tree (a group or a column).
///
/// Ids are never reused after deletion within an editing session; the
/// container index relies on that.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct NodeId(String);

impl NodeId {
    /// Smart constructor: validates a non-empty id.
    pub fn new(raw: impl Into<String>) -> Result<Self, InvalidNodeId> {
        let raw = raw.into();
        if raw.is_empty() {
            Err(InvalidNodeId::Empty)
        } else {
            Ok(Self(raw))
        }
    }

    /// View of the raw id string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for NodeId {
    type Error = InvalidNodeId;

    fn try_from(raw: String) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl From<NodeId> for String {
    fn from(id: NodeId) -> Self {
        id.0
    }
}

/// Rejection reasons for [`NodeId::new`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidNodeId {
    /// Ids must be non-empty.
    #[error("Node id cannot be empty")]
    Empty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_id_accepts_non_empty_string() {
        let id = NodeId::new("group-1");
        assert!(id.is_ok(), "Non-empty id should be accepted");
    }

    #[test]
    fn node_id_rejects_empty_string() {
        assert!(matches!(NodeId::new(""), Err(InvalidNodeId::Empty)));
    }

    #[test]
    fn node_id_as_str_returns_original() {
        let id = NodeId::new("col-7").expect("valid id");
        assert_eq!(id.as_str(), "col-7");
    }

    #[test]
    fn node_id_display_matches_inner() {
        let id = NodeId::new("col-7").expect("valid id");
        assert_eq!(id.to_string(), "col-7");
    }

    #[test]
    fn node_id_accepts_owned_string() {
        let id = NodeId::new(String::from("group-a"));
        assert!(id.is_ok());
    }

    #[test]
    fn node_id_round_trips_through_serde() {
        let id = NodeId::new("group-a").expect("valid id");
        let json = serde_json::to_string(&id).expect("serialize");
        assert_eq!(json, "\"group-a\"");
        let back: NodeId = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, id);
    }

    #[test]
    fn node_id_serde_rejects_empty() {
        let result: Result<NodeId, _> = serde_json::from_str("\"\"");
        assert!(result.is_err(), "Empty id should fail deserialization");
    }

    #[test]
    fn invalid_node_id_error_message() {
        assert_eq!(InvalidNodeId::Empty.to_string(), "Node id cannot be empty");
    }
}
