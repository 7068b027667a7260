//! Response envelopes used by the admin surface.
//!
//! The backend wraps every read payload under a `data` key; list payloads
//! add a `result` key below that. `/set-alert-ok-status` alone acknowledges
//! with a top-level `success` flag instead of the nested envelope.

use serde::Deserialize;

/// Standard envelope: the payload nested under `data`.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

/// List envelope: `{ "data": { "result": [...] } }`.
#[derive(Debug, Deserialize)]
pub struct ListEnvelope<T> {
    pub data: ResultField<T>,
}

#[derive(Debug, Deserialize)]
pub struct ResultField<T> {
    pub result: Vec<T>,
}

/// Payload of `/is-configured`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfiguredFlag {
    pub is_configured: bool,
}

/// Top-level acknowledgement of `/set-alert-ok-status`.
#[derive(Debug, Deserialize)]
pub struct Ack {
    pub success: bool,
}
