//! `hearth-protocol` — wire types for the schedule-list websocket protocol.
//!
//! # Message kinds
//!
//! | Direction | Shape |
//! |-----------|-------|
//! | client → server | `{ "id": 7, "type": "schedule_list/fetch", "schedule_id": "s1" }` |
//! | client → server | `{ "id": 8, "type": "schedule_list/update", "schedule_id": "s1", "data": {...} }` |
//! | server → client | `{ "id": 7, "success": true, "result": {...} }` |
//! | server → client | `{ "type": "event", "event": "schedule_list_updated" }` |
//!
//! Requests are a closed, tagged union — deserialization into [`WsRequest`]
//! is the schema validation layer, so handlers never see a malformed frame.

pub mod commands;
pub mod envelopes;
pub mod requests;

pub use envelopes::{ErrorShape, EventMessage, RawEnvelope, Response};
pub use requests::WsRequest;
