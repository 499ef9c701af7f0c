use std::sync::Arc;

use dashmap::DashMap;
use tracing::instrument;
use uuid::Uuid;

use crate::store::RegistryStore;
use crate::Result;

/**
 * Subscription Registry (§4.2): the single source of truth for which
 * upstream streams must be live. Durable state lives in
 * [`crate::store::RegistryStore`]; this wraps it with a read-through
 * `DashMap` snapshot cache so the gateway's hot subscribe/unsubscribe path
 * and the adapter's reconciliation loop don't round-trip the database for
 * every read — only `acquire`/`release` mutate the store directly, and the
 * cache entry for a touched key is refreshed from the transition result
 * they return, never read back separately.
 */
pub struct SubscriptionRegistry {
    store: RegistryStore,
    cache: Arc<DashMap<String, i64>>,
}

/// Mirrors `RefCountTransition` at the registry boundary to keep `store` an internal detail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AcquireResult {
    pub ref_count_after: i64,
    pub transitioned_from_zero: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReleaseResult {
    pub ref_count_after: i64,
    pub transitioned_to_zero: bool,
}

impl SubscriptionRegistry {
    pub fn new(store: RegistryStore) -> Self {
        Self {
            store,
            cache: Arc::new(DashMap::new()),
        }
    }

    #[instrument(skip(self))]
    pub async fn acquire(&self, session_id: Uuid, key: &str) -> Result<AcquireResult> {
        let transition = self.store.acquire(session_id, key).await?;
        self.cache.insert(key.to_string(), transition.ref_count_after);
        Ok(AcquireResult {
            ref_count_after: transition.ref_count_after,
            transitioned_from_zero: transition.crossed_boundary,
        })
    }

    #[instrument(skip(self))]
    pub async fn release(&self, session_id: Uuid, key: &str) -> Result<ReleaseResult> {
        let transition = self.store.release(session_id, key).await?;
        if transition.ref_count_after == 0 {
            self.cache.remove(key);
        } else {
            self.cache.insert(key.to_string(), transition.ref_count_after);
        }
        Ok(ReleaseResult {
            ref_count_after: transition.ref_count_after,
            transitioned_to_zero: transition.crossed_boundary,
        })
    }

    /// Releases every key `session_id` holds; returns the keys whose ref-count hit zero.
    #[instrument(skip(self))]
    pub async fn release_all(&self, session_id: Uuid) -> Result<Vec<String>> {
        let zeroed = self.store.release_all(session_id).await?;
        for key in &zeroed {
            self.cache.remove(key);
        }
        Ok(zeroed)
    }

    /// The desired set: keys with ref-count > 0. Always reads through to the store — this is
    /// the authority the Exchange Adapter's full-reconcile diff is taken against.
    #[instrument(skip(self))]
    pub async fn snapshot(&self) -> Result<Vec<String>> {
        let keys = self.store.snapshot().await?;
        self.cache.clear();
        for key in &keys {
            self.cache.insert(key.clone(), 1);
        }
        Ok(keys)
    }

    /// Best-effort cached ref-count, for metrics/diagnostics only — never authoritative.
    pub fn cached_ref_count(&self, key: &str) -> Option<i64> {
        self.cache.get(key).map(|entry| *entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cached_ref_count_is_absent_before_any_operation() {
        let store = RegistryStore::new(make_unconnected_pool());
        let registry = SubscriptionRegistry::new(store);
        assert_eq!(registry.cached_ref_count("BINANCE:BTCUSDT@TRADE"), None);
    }

    fn make_unconnected_pool() -> sqlx::PgPool {
        sqlx::PgPool::connect_lazy("postgres://localhost/test_db_never_connected")
            .expect("lazy pool construction does not touch the network")
    }
}
