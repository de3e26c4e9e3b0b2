use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Server → Client reply, correlated by the caller-supplied `id`.
/// Wire: `{ "id": 7, "success": true, "result": {...} }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Response {
    pub id: u64,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorShape>,
}

impl Response {
    /// Success envelope. `result` may be JSON `null` — it is still carried
    /// on the wire (`"result":null`), unlike the absent `error` field.
    pub fn ok(id: u64, result: impl Serialize) -> Self {
        Self {
            id,
            success: true,
            result: Some(serde_json::to_value(result).unwrap_or(Value::Null)),
            error: None,
        }
    }

    /// Error envelope with a machine-readable code.
    pub fn err(id: u64, code: &str, message: &str) -> Self {
        Self {
            id,
            success: false,
            result: None,
            error: Some(ErrorShape {
                code: code.to_string(),
                message: message.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorShape {
    pub code: String,
    pub message: String,
}

/// Server → Client unsolicited push.
/// Wire: `{ "type": "event", "event": "schedule_list_updated", "seq": 42 }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventMessage {
    #[serde(rename = "type")]
    pub msg_type: String,
    pub event: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seq: Option<u64>,
}

impl EventMessage {
    /// Zero-payload event — the common case; listeners re-fetch on receipt.
    pub fn new(event: impl Into<String>) -> Self {
        Self {
            msg_type: "event".to_string(),
            event: event.into(),
            payload: None,
            seq: None,
        }
    }

    pub fn with_payload(mut self, payload: impl Serialize) -> Self {
        self.payload = Some(serde_json::to_value(payload).unwrap_or(Value::Null));
        self
    }

    pub fn with_seq(mut self, seq: u64) -> Self {
        self.seq = Some(seq);
        self
    }
}

/// Minimal probe parsed from frames that fail full [`WsRequest`]
/// deserialization — recovers the correlation id so the transport can still
/// address its `invalid_format` reply.
///
/// [`WsRequest`]: crate::requests::WsRequest
#[derive(Debug, Clone, Deserialize)]
pub struct RawEnvelope {
    pub id: Option<u64>,
    #[serde(rename = "type")]
    pub msg_type: Option<String>,
}
