use tokio::sync::broadcast;

const BROADCAST_CAPACITY: usize = 256;

/// Fan-out bus for server push events.
///
/// Constructed once by the host and handed to anything that needs to
/// publish or listen: WS connections subscribe, request handlers publish,
/// and any other in-process listener may attach via [`subscribe`].
/// Notifications are fire-and-forget — a send with no subscribers is
/// silently dropped.
///
/// [`subscribe`]: Self::subscribe
pub struct EventBroadcaster {
    tx: broadcast::Sender<String>,
}

impl EventBroadcaster {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(BROADCAST_CAPACITY);
        Self { tx }
    }

    /// New listener subscribes to the event stream.
    pub fn subscribe(&self) -> broadcast::Receiver<String> {
        self.tx.subscribe()
    }

    /// Push a serialized event to all current subscribers.
    pub fn send(&self, payload: String) {
        let _ = self.tx.send(payload);
    }

    /// Number of currently attached subscribers.
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for EventBroadcaster {
    fn default() -> Self {
        Self::new()
    }
}
