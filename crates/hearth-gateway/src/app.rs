use axum::{routing::get, Router};
use hearth_schedules::ScheduleStore;
use std::sync::{
    atomic::{AtomicU64, Ordering},
    Arc,
};

use crate::ws::broadcast::EventBroadcaster;

/// Central shared state — passed as Arc<AppState> to all Axum handlers.
///
/// The store and the broadcaster are constructed once at startup and
/// injected here; nothing resolves them from ambient globals.
pub struct AppState {
    pub store: ScheduleStore,
    pub broadcaster: EventBroadcaster,
    pub event_seq: AtomicU64,
}

impl AppState {
    pub fn new(store: ScheduleStore) -> Self {
        Self {
            store,
            broadcaster: EventBroadcaster::new(),
            event_seq: AtomicU64::new(0),
        }
    }

    /// Monotonically increasing sequence for broadcast events.
    pub fn next_seq(&self) -> u64 {
        self.event_seq.fetch_add(1, Ordering::Relaxed)
    }
}

/// Assemble the full Axum router.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(crate::http::health::health_handler))
        .route("/ws", get(crate::ws::connection::ws_handler))
        .with_state(state)
        .layer(tower_http::trace::TraceLayer::new_for_http())
}
