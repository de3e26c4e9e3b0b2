//! Concrete WS command handler functions.
//!
//! Each function translates its request into schedule-store calls and
//! returns a `Response`.  `dispatch::route` is the only caller — keep this
//! module free of transport concerns (no raw sockets, no frame parsing).

use hearth_core::types::ScheduleDocument;
use hearth_protocol::commands::{ERR_ITEM_NOT_FOUND, EVENT_SCHEDULE_LIST_UPDATED};
use hearth_protocol::envelopes::{EventMessage, Response};
use serde_json::Value;
use tracing::{debug, warn};

use crate::app::AppState;

// ---------------------------------------------------------------------------
// schedule_list/fetch
// ---------------------------------------------------------------------------

/// Handler for `schedule_list/fetch`.
///
/// Always answers with a success envelope: an id that was never stored gets
/// the sentinel `{"schedule": null, "entities": null}` rather than an
/// error, so callers can treat fetch as infallible.
pub async fn handle_fetch(id: u64, schedule_id: &str, app: &AppState) -> Response {
    debug!(schedule_id, "handling fetch");
    match app.store.get(schedule_id) {
        Some(doc) => Response::ok(id, doc),
        None => Response::ok(id, serde_json::json!({ "schedule": null, "entities": null })),
    }
}

// ---------------------------------------------------------------------------
// schedule_list/update
// ---------------------------------------------------------------------------

/// Handler for `schedule_list/update`.
///
/// Upserts the document, fires one `schedule_list_updated` event so other
/// listeners re-fetch, and replies with `result: null`.  The error arm
/// keeps the reserved `item_not_found` wire code; it cannot fire while the
/// store stays upsert-only.
pub async fn handle_update(
    id: u64,
    schedule_id: &str,
    data: ScheduleDocument,
    app: &AppState,
) -> Response {
    match app.store.update(schedule_id, data) {
        Ok(()) => {
            let seq = app.next_seq();
            let ev = EventMessage::new(EVENT_SCHEDULE_LIST_UPDATED).with_seq(seq);
            app.broadcaster
                .send(serde_json::to_string(&ev).unwrap_or_default());
            Response::ok(id, Value::Null)
        }
        Err(e) => {
            warn!(schedule_id, error = %e, "schedule update rejected");
            Response::err(id, ERR_ITEM_NOT_FOUND, &e.to_string())
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
