//! Opaque content element payload.
//!
//! The engine carries elements but never interprets them; they move atomically
//! with their owning column. The demo view reads the optional `"label"` and
//! `"kind"` string fields for display purposes only.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Opaque layout/content descriptor attached to groups, columns, and the
/// elements inside a column.
///
/// Backed by a raw JSON value so arbitrary host payloads survive load/save
/// without the engine knowing their shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Element(Value);

impl Element {
    /// Wrap a host-provided JSON payload.
    pub fn new(payload: Value) -> Self {
        Self(payload)
    }

    /// An empty descriptor for hosts that carry no payload.
    pub fn null() -> Self {
        Self(Value::Null)
    }

    /// The raw payload, uninterpreted.
    pub fn payload(&self) -> &Value {
        &self.0
    }

    /// Display label, if the host supplied one. View-layer use only.
    pub fn label(&self) -> Option<&str> {
        self.0.get("label").and_then(Value::as_str)
    }

    /// Element kind tag, if the host supplied one. View-layer use only.
    pub fn kind(&self) -> Option<&str> {
        self.0.get("kind").and_then(Value::as_str)
    }
}

impl Default for Element {
    fn default() -> Self {
        Self::null()
    }
}
