//! Read-only view of the engine handed to the presentation layer

use serde::{Deserialize, Serialize};

/// Engine state as seen by a front end after each key press
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Raw display text
    pub display: String,
    /// Display text after width formatting
    pub formatted_display: String,
    /// Most recent chained computation, e.g. `"3 + 4 = 7"`
    pub last_entry: Option<String>,
    /// Memory register value
    pub memory: f64,
    /// True if the memory register is non-zero
    pub has_memory: bool,
    /// Pending operand and operator, e.g. `"3 +"`
    pub pending: Option<String>,
}

impl Snapshot {
    /// Serializes the snapshot to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Deserializes a snapshot from JSON
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
