//! Panel protocol messages.
//!
//! The panel and its remote counterpart exchange JSON text frames, each
//! a tagged envelope of the form `{"type": <tag>, "payload": <data>}`:
//!
//! | direction | tag       | payload     | meaning                               |
//! |-----------|-----------|-------------|---------------------------------------|
//! | inbound   | `initial` | record JSON | authoritative record at connect time  |
//! | inbound   | `saved`   | record JSON | acknowledgement of a save             |
//! | inbound   | `error`   | text        | server-side error report              |
//! | outbound  | `save`    | record JSON | request to persist the record         |

use crate::error::{SyncError, SyncResult};
use lowtemp_types::LowTempSettings;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A panel protocol message.
///
/// Inbound record payloads are carried as raw JSON. The controller
/// converts and range-checks them itself, so a malformed payload inside
/// a well-formed envelope still takes the documented fallback path
/// instead of being dropped as an unrecognized frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "payload", rename_all = "lowercase")]
pub enum PanelMessage {
    /// Server's authoritative record, pushed at connect time.
    Initial(Value),

    /// Acknowledgement of a save request.
    Saved(Value),

    /// Server-side error report.
    Error(String),

    /// Request to persist a record server-side.
    Save(LowTempSettings),
}

impl PanelMessage {
    /// Builds an outbound save request for `record`.
    pub fn save_request(record: &LowTempSettings) -> Self {
        Self::Save(record.clone())
    }

    /// Encodes to a text frame.
    pub fn encode(&self) -> SyncResult<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decodes a text frame. Frames that are not a known envelope shape
    /// are an error; the controller ignores them.
    pub fn decode(frame: &str) -> SyncResult<Self> {
        serde_json::from_str(frame).map_err(|e| SyncError::Protocol(format!("bad frame: {e}")))
    }
}
