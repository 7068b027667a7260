use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An anti-cheat alert.
///
/// The backend only guarantees `id` and the reviewable `isOk` flag; every
/// other field is carried through opaquely so views can render whatever the
/// backend attaches without this crate having to know its shape.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AlertRecord {
    pub id: String,
    #[serde(rename = "isOk", default)]
    pub is_ok: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// One entry of the backend's log history. Shape is backend-owned.
pub type LogRecord = Value;
