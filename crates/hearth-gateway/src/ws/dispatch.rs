use std::sync::Arc;

use hearth_protocol::envelopes::Response;
use hearth_protocol::requests::WsRequest;

use crate::app::AppState;
use crate::ws::handlers;

/// Route a parsed WS command to its handler.
///
/// The request union is closed, so this match is exhaustive — there is no
/// method-not-found fallthrough.
pub async fn route(req: WsRequest, app: &Arc<AppState>) -> Response {
    match req {
        WsRequest::Fetch { id, schedule_id } => handlers::handle_fetch(id, &schedule_id, app).await,

        WsRequest::Update {
            id,
            schedule_id,
            data,
        } => handlers::handle_update(id, &schedule_id, data, app).await,
    }
}
