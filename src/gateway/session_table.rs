use std::sync::Arc;

use chrono::Utc;
use dashmap::{DashMap, DashSet};
use tokio::sync::Mutex;
use uuid::Uuid;

use crate::gateway::outbound::OutboundQueue;
use crate::gateway::protocol::ServerFrame;
use crate::model::ClientSession;

/// One registered session: its outbound frame queue plus the mutable bookkeeping
/// ([`ClientSession`]) the request handlers touch under a lock.
pub struct SessionEntry {
    pub session_id: Uuid,
    pub outbound: OutboundQueue,
    pub state: Mutex<ClientSession>,
}

/**
 * Process-wide table of connected sessions plus a reverse index from
 * subscription key to the sessions holding it, so a `kline_live` /
 * `realtime.update` notification fans out in O(subscribers) rather than
 * scanning every session. This is purely an in-process routing aid — the
 * Subscription Registry's database-backed ref-count remains authoritative
 * for "does this stream need to stay open upstream".
 */
#[derive(Clone)]
pub struct SessionTable {
    sessions: Arc<DashMap<Uuid, Arc<SessionEntry>>>,
    by_key: Arc<DashMap<String, DashSet<Uuid>>>,
    outbound_capacity: usize,
}

impl SessionTable {
    pub fn new(outbound_capacity: usize) -> Self {
        Self {
            sessions: Arc::new(DashMap::new()),
            by_key: Arc::new(DashMap::new()),
            outbound_capacity,
        }
    }

    pub fn register(&self, session_id: Uuid) -> Arc<SessionEntry> {
        let entry = Arc::new(SessionEntry {
            session_id,
            outbound: OutboundQueue::new(self.outbound_capacity),
            state: Mutex::new(ClientSession::new(session_id, Utc::now())),
        });
        self.sessions.insert(session_id, entry.clone());
        entry
    }

    pub fn get(&self, session_id: Uuid) -> Option<Arc<SessionEntry>> {
        self.sessions.get(&session_id).map(|entry| entry.clone())
    }

    /// Removes a session from the table and its key index. Callers are responsible for
    /// releasing its registry references via `SubscriptionRegistry::release_all` first.
    pub fn remove(&self, session_id: Uuid) {
        self.sessions.remove(&session_id);
        for mut subscribers in self.by_key.iter_mut() {
            subscribers.remove(&session_id);
        }
    }

    pub fn index_subscription(&self, session_id: Uuid, key: &str) {
        self.by_key.entry(key.to_string()).or_default().insert(session_id);
    }

    pub fn deindex_subscription(&self, session_id: Uuid, key: &str) {
        if let Some(subscribers) = self.by_key.get(key) {
            subscribers.remove(&session_id);
        }
    }

    /// Delivers `frame` to every session currently indexed against `key`.
    pub async fn fanout(&self, key: &str, frame: ServerFrame) {
        let Some(subscribers) = self.by_key.get(key) else {
            return;
        };
        let session_ids: Vec<Uuid> = subscribers.iter().map(|id| *id).collect();
        drop(subscribers);

        for session_id in session_ids {
            if let Some(entry) = self.sessions.get(&session_id) {
                entry.outbound.push(frame.clone()).await;
            }
        }
    }

    pub async fn deliver(&self, session_id: Uuid, frame: ServerFrame) {
        if let Some(entry) = self.sessions.get(&session_id) {
            entry.outbound.push(frame).await;
        }
    }

    pub fn subscriber_count(&self, key: &str) -> usize {
        self.by_key.get(key).map(|set| set.len()).unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fanout_reaches_every_indexed_session() {
        let table = SessionTable::new(16);
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        table.register(a);
        table.register(b);
        table.index_subscription(a, "BINANCE:BTCUSDT@TRADE");
        table.index_subscription(b, "BINANCE:BTCUSDT@TRADE");

        table.fanout("BINANCE:BTCUSDT@TRADE", ServerFrame::update(0, serde_json::json!({}))).await;

        assert_eq!(table.get(a).unwrap().outbound.drain().await.len(), 1);
        assert_eq!(table.get(b).unwrap().outbound.drain().await.len(), 1);
    }

    #[tokio::test]
    async fn removing_a_session_clears_its_index_entries() {
        let table = SessionTable::new(16);
        let a = Uuid::new_v4();
        table.register(a);
        table.index_subscription(a, "BINANCE:BTCUSDT@TRADE");
        table.remove(a);

        assert_eq!(table.subscriber_count("BINANCE:BTCUSDT@TRADE"), 0);
    }
}
