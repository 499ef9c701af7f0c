use std::collections::HashMap;
use std::collections::HashSet;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::model::SubscriptionKey;

/**
 * In-memory bookkeeping for one duplex client connection, owned by the
 * gateway's per-session executor. `subscriptions` mirrors the keys this
 * session has been granted in the Subscription Registry (the registry's
 * ref-count is authoritative; this is the session's view of it).
 * `pending_requests` tracks one-shot requests awaiting a task completion
 * or a registry round-trip, keyed by the client-supplied `request_id`.
 */
#[derive(Debug, Clone)]
pub struct ClientSession {
    pub session_id: Uuid,
    pub subscriptions: HashSet<SubscriptionKey>,
    pub pending_requests: HashMap<String, PendingRequest>,
    pub connected_at: DateTime<Utc>,
    pub last_heartbeat: DateTime<Utc>,
}

/// A request awaiting completion, tracked so `session teardown` can drop it cleanly.
#[derive(Debug, Clone)]
pub struct PendingRequest {
    pub request_id: String,
    pub deadline: DateTime<Utc>,
    pub task_id: Option<Uuid>,
}

impl ClientSession {
    pub fn new(session_id: Uuid, now: DateTime<Utc>) -> Self {
        Self {
            session_id,
            subscriptions: HashSet::new(),
            pending_requests: HashMap::new(),
            connected_at: now,
            last_heartbeat: now,
        }
    }

    /// Returns `true` if the key was newly added (not already held by this session).
    pub fn add_subscription(&mut self, key: SubscriptionKey) -> bool {
        self.subscriptions.insert(key)
    }

    /// Returns `true` if the key was present and removed.
    pub fn remove_subscription(&mut self, key: &SubscriptionKey) -> bool {
        self.subscriptions.remove(key)
    }

    pub fn track_request(&mut self, request_id: String, deadline: DateTime<Utc>, task_id: Option<Uuid>) {
        self.pending_requests.insert(request_id.clone(), PendingRequest {
            request_id,
            deadline,
            task_id,
        });
    }

    pub fn resolve_request(&mut self, request_id: &str) -> Option<PendingRequest> {
        self.pending_requests.remove(request_id)
    }

    /// Heartbeat timeout elapsed relative to `now`; the gateway tears the session down.
    pub fn is_heartbeat_stale(&self, now: DateTime<Utc>, timeout: chrono::Duration) -> bool {
        now - self.last_heartbeat > timeout
    }

    /// All keys held by this session, draining its subscription set — used on teardown to
    /// release every registry reference the session holds.
    pub fn drain_subscriptions(&mut self) -> Vec<SubscriptionKey> {
        self.subscriptions.drain().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StreamType;

    fn key(symbol: &str) -> SubscriptionKey {
        SubscriptionKey::new("BINANCE", symbol, StreamType::Trade, None).unwrap()
    }

    #[test]
    fn duplicate_subscribe_is_a_no_op() {
        let mut session = ClientSession::new(Uuid::new_v4(), Utc::now());
        assert!(session.add_subscription(key("BTCUSDT")));
        assert!(!session.add_subscription(key("BTCUSDT")));
        assert_eq!(session.subscriptions.len(), 1);
    }

    #[test]
    fn unsubscribe_unknown_key_is_idempotent_false() {
        let mut session = ClientSession::new(Uuid::new_v4(), Utc::now());
        assert!(!session.remove_subscription(&key("ETHUSDT")));
    }

    #[test]
    fn teardown_drains_all_subscriptions() {
        let mut session = ClientSession::new(Uuid::new_v4(), Utc::now());
        session.add_subscription(key("BTCUSDT"));
        session.add_subscription(key("ETHUSDT"));

        let drained = session.drain_subscriptions();
        assert_eq!(drained.len(), 2);
        assert!(session.subscriptions.is_empty());
    }

    #[test]
    fn heartbeat_staleness_respects_timeout() {
        let mut session = ClientSession::new(Uuid::new_v4(), Utc::now());
        session.last_heartbeat = Utc::now() - chrono::Duration::seconds(61);
        assert!(session.is_heartbeat_stale(Utc::now(), chrono::Duration::seconds(60)));

        session.last_heartbeat = Utc::now();
        assert!(!session.is_heartbeat_stale(Utc::now(), chrono::Duration::seconds(60)));
    }
}
