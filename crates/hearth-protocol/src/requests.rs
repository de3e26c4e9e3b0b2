use hearth_core::types::ScheduleDocument;
use serde::Deserialize;

/// Client → Server command, tagged by the wire `type` field.
///
/// The set is closed: anything that is not one of these two shapes fails to
/// deserialize and is rejected at the transport layer before any handler
/// runs. `id` is the caller-supplied correlation id, echoed back unchanged
/// in the response.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type")]
pub enum WsRequest {
    /// Wire: `{ "id": 7, "type": "schedule_list/fetch", "schedule_id": "s1" }`
    #[serde(rename = "schedule_list/fetch")]
    Fetch { id: u64, schedule_id: String },

    /// Wire: `{ "id": 8, "type": "schedule_list/update", "schedule_id": "s1",
    ///          "data": { "schedule": [[{ "cval": "1", "nval": "2" }]], "entities": ["light.kitchen"] } }`
    #[serde(rename = "schedule_list/update")]
    Update {
        id: u64,
        schedule_id: String,
        data: ScheduleDocument,
    },
}

impl WsRequest {
    /// The correlation id of the request.
    pub fn id(&self) -> u64 {
        match self {
            WsRequest::Fetch { id, .. } => *id,
            WsRequest::Update { id, .. } => *id,
        }
    }
}
