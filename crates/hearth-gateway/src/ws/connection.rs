use axum::{
    extract::{ws::Message, ws::WebSocket, State, WebSocketUpgrade},
    response::IntoResponse,
};
use futures_util::{SinkExt, StreamExt};
use hearth_core::config::{HEARTBEAT_INTERVAL_SECS, MAX_PAYLOAD_BYTES};
use hearth_protocol::commands::EVENT_TICK;
use hearth_protocol::envelopes::EventMessage;
use std::sync::Arc;
use tracing::{info, warn};

use crate::app::AppState;
use crate::ws::{message, send};

/// Axum handler — upgrades HTTP to WebSocket at GET /ws.
pub async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(|socket| run_connection(socket, state))
}

/// Per-connection event loop — lives for the entire WS session.
///
/// Connections serve requests immediately; schedule-list clients are local
/// hub peers and carry no credentials. Besides request/response traffic the
/// loop forwards broadcast events and emits a periodic `tick` heartbeat.
async fn run_connection(socket: WebSocket, state: Arc<AppState>) {
    let conn_id = uuid::Uuid::new_v4().to_string();
    info!(conn_id = %conn_id, "new WS connection");

    let (mut tx, mut rx) = socket.split();
    let mut broadcast_rx = state.broadcaster.subscribe();

    let mut tick = tokio::time::interval(std::time::Duration::from_secs(HEARTBEAT_INTERVAL_SECS));
    tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            msg = rx.next() => {
                match msg {
                    Some(Ok(Message::Text(text))) => {
                        if text.len() > MAX_PAYLOAD_BYTES {
                            warn!(conn_id, size = text.len(), "payload too large");
                            break;
                        }
                        message::handle(&conn_id, &text, &mut tx, &state).await;
                    }
                    Some(Ok(Message::Ping(data))) => {
                        let _ = tx.send(Message::Pong(data)).await;
                    }
                    Some(Ok(Message::Close(_))) | None => break,
                    _ => {}
                }
            }

            event = broadcast_rx.recv() => {
                if let Ok(payload) = event {
                    if tx.send(Message::Text(payload.into())).await.is_err() {
                        break;
                    }
                }
            }

            _ = tick.tick() => {
                let seq = state.next_seq();
                let ev = EventMessage::new(EVENT_TICK)
                    .with_payload(serde_json::json!({ "ts": chrono::Utc::now().timestamp_millis() }))
                    .with_seq(seq);
                if send::json(&mut tx, &ev).await.is_err() {
                    break;
                }
            }
        }
    }

    info!(conn_id, "WS connection closed");
}
