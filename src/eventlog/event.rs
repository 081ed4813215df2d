//! Event definitions
//!
//! Defines the record appended to the log for every stored mapping.

use serde::{Deserialize, Serialize};

/// A single line in the event log
///
/// Field names on the wire are `uuid`, `short_url` and `original_url`.
/// Missing fields decode to their zero values and unknown fields are
/// ignored, so older and newer writers can share a file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Event {
    /// Sequence identifier. Kept in the format but always written as 0.
    #[serde(rename = "uuid")]
    pub sequence: u64,

    /// The short code this event maps
    #[serde(rename = "short_url")]
    pub short_code: String,

    /// The URL the short code resolves to (opaque, not validated)
    #[serde(rename = "original_url")]
    pub original_url: String,
}

impl Event {
    /// Create an event for a new mapping
    pub fn new(short_code: impl Into<String>, original_url: impl Into<String>) -> Self {
        Self {
            sequence: 0,
            short_code: short_code.into(),
            original_url: original_url.into(),
        }
    }

    /// Encode as a single JSON line, without the terminator.
    ///
    /// serde_json escapes control characters inside strings, so the output
    /// never contains a raw `\n`.
    pub fn encode(&self) -> serde_json::Result<Vec<u8>> {
        serde_json::to_vec(self)
    }

    /// Decode one line (terminator already removed)
    pub fn decode(line: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(line)
    }
}
