use axum::extract::ws::{Message, WebSocket};
use hearth_protocol::commands::ERR_INVALID_FORMAT;
use hearth_protocol::envelopes::{RawEnvelope, Response};
use hearth_protocol::requests::WsRequest;
use std::sync::Arc;
use tracing::warn;

use crate::app::AppState;
use crate::ws::{dispatch, send};

pub type WsSink = futures_util::stream::SplitSink<WebSocket, Message>;

/// Process one inbound WS text frame.
///
/// Deserializing into [`WsRequest`] is the schema check: a frame that does
/// not match one of the known command shapes never reaches a handler. When
/// a broken frame still carries a usable `id`, an `invalid_format` error
/// response is sent so the caller's pending request resolves; otherwise the
/// frame is logged and dropped.
pub async fn handle(conn_id: &str, text: &str, tx: &mut WsSink, app: &Arc<AppState>) {
    let req: WsRequest = match serde_json::from_str(text) {
        Ok(req) => req,
        Err(e) => {
            let raw = serde_json::from_str::<RawEnvelope>(text).ok();
            let claimed_type = raw
                .as_ref()
                .and_then(|r| r.msg_type.as_deref())
                .unwrap_or("?");
            warn!(conn_id, claimed_type, error = %e, "malformed frame");
            if let Some(id) = raw.and_then(|r| r.id) {
                let res = Response::err(id, ERR_INVALID_FORMAT, &e.to_string());
                let _ = send::json(tx, &res).await;
            }
            return;
        }
    };

    let res = dispatch::route(req, app).await;
    let _ = send::json(tx, &res).await;
}
