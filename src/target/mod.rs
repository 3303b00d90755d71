//! Virtual drop-target ids and their classification.
//!
//! The drag sensor reports fine-grained drop intent through two families of
//! virtual ids, so the tree itself never has to be instrumented:
//!
//! - drop-zone ids name a gap *between* groups ("insert a new group at
//!   position i");
//! - column drop-indicator ids name a precise insertion point for a column
//!   *inside* a group.
//!
//! The string shape is `drop-indicator-{container}-{index}`: a fixed prefix,
//! the container id, a `-` delimiter, and the insert index. Container ids may
//! themselves contain the delimiter, so decoding consumes only the *last*
//! segment as the index and rejoins the rest. A container id whose final
//! `-`-separated segment looks numeric would decode ambiguously; all engine
//! logic therefore goes through the [`DropTarget`] union, which confines the
//! string parsing to this module.
//!
//! Decoders return `None` on malformed input; they never panic.

use crate::model::NodeId;

/// Prefix of ids naming a gap between groups.
pub const DROP_ZONE_PREFIX: &str = "drop-zone-";

/// Prefix of ids naming a column insertion point inside a group.
pub const COLUMN_INDICATOR_PREFIX: &str = "drop-indicator-";

const DELIMITER: char = '-';

/// Encode a between-groups gap at `index`.
pub fn drop_zone_id(index: usize) -> String {
    format!("{DROP_ZONE_PREFIX}{index}")
}

/// Encode a column insertion point: into `container` at `insert_index`.
pub fn column_indicator_id(container: &NodeId, insert_index: usize) -> String {
    format!("{COLUMN_INDICATOR_PREFIX}{container}{DELIMITER}{insert_index}")
}

/// Prefix test: is this a drop-zone id?
pub fn is_drop_zone_id(id: &str) -> bool {
    id.starts_with(DROP_ZONE_PREFIX)
}

/// Prefix test: is this a column drop-indicator id?
pub fn is_column_indicator_id(id: &str) -> bool {
    id.starts_with(COLUMN_INDICATOR_PREFIX)
}

/// Decode a drop-zone id into its gap index.
pub fn decode_drop_zone(id: &str) -> Option<usize> {
    id.strip_prefix(DROP_ZONE_PREFIX)?.parse().ok()
}

/// Decode a column drop-indicator id into `(container, insert_index)`.
///
/// The last delimiter-separated segment is the index (0 when unparsable);
/// the remaining leading segments rejoin as the container id.
pub fn decode_column_indicator(id: &str) -> Option<(NodeId, usize)> {
    let rest = id.strip_prefix(COLUMN_INDICATOR_PREFIX)?;
    let segments: Vec<&str> = rest.split(DELIMITER).collect();
    let (last, leading) = segments.split_last()?;
    let insert_index = last.parse().unwrap_or(0);
    let container = leading.join("-");
    let container = NodeId::new(container).ok()?;
    Some((container, insert_index))
}

/// Discriminated drop target decoded from a sensor-delivered id.
///
/// Engine transitions consume this union instead of raw strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropTarget {
    /// Gap between groups; dropping here splits the column into a new group.
    GroupGap {
        /// Insertion position in the top-level group list.
        index: usize,
    },
    /// Precise column insertion point inside a group.
    ColumnSlot {
        /// Receiving group.
        container_id: NodeId,
        /// Position within that group's column list.
        insert_index: usize,
    },
    /// A real tree node (group or column) hovered directly.
    Node(NodeId),
}

impl DropTarget {
    /// Classify a raw sensor id. `None` only for malformed virtual ids or an
    /// empty string; any other id is assumed to name a tree node (the
    /// container index decides whether it actually does).
    pub fn classify(raw: &str) -> Option<Self> {
        if is_drop_zone_id(raw) {
            decode_drop_zone(raw).map(|index| Self::GroupGap { index })
        } else if is_column_indicator_id(raw) {
            decode_column_indicator(raw).map(|(container_id, insert_index)| Self::ColumnSlot {
                container_id,
                insert_index,
            })
        } else {
            NodeId::new(raw).ok().map(Self::Node)
        }
    }
}
