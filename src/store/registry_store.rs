use sqlx::postgres::PgPool;
use tracing::instrument;
use uuid::Uuid;

use crate::Result;

/// Result of an `acquire`/`release` row-level operation, per §4.2.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RefCountTransition {
    pub ref_count_after: i64,
    pub crossed_boundary: bool,
}

/**
 * SQL-backed implementation of the Subscription Registry's durable state:
 * `subscriptions(session_id, key)` membership rows plus a derived
 * `subscription_refcounts(key, ref_count)` row whose trigger publishes
 * `subscription.add`/`subscription.remove` on 0↔1 transitions.
 */
pub struct RegistryStore {
    pool: PgPool,
}

impl RegistryStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Adds `(session_id, key)` membership if absent and bumps the key's ref-count.
    /// Idempotent: a duplicate acquire for the same pair is a no-op returning the
    /// current ref-count with `crossed_boundary: false`.
    #[instrument(skip(self))]
    pub async fn acquire(&self, session_id: Uuid, key: &str) -> Result<RefCountTransition> {
        let mut tx = self.pool.begin().await?;

        let inserted = sqlx::query(
            "INSERT INTO subscriptions (session_id, key) VALUES ($1, $2) \
             ON CONFLICT (session_id, key) DO NOTHING",
        )
        .bind(session_id)
        .bind(key)
        .execute(&mut *tx)
        .await?
        .rows_affected()
            > 0;

        if !inserted {
            let ref_count: i64 = sqlx::query_scalar("SELECT ref_count FROM subscription_refcounts WHERE key = $1")
                .bind(key)
                .fetch_optional(&mut *tx)
                .await?
                .unwrap_or(0);
            tx.commit().await?;
            return Ok(RefCountTransition {
                ref_count_after: ref_count,
                crossed_boundary: false,
            });
        }

        let ref_count: i64 = sqlx::query_scalar(
            "INSERT INTO subscription_refcounts (key, ref_count) VALUES ($1, 1) \
             ON CONFLICT (key) DO UPDATE SET ref_count = subscription_refcounts.ref_count + 1 \
             RETURNING ref_count",
        )
        .bind(key)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(RefCountTransition {
            ref_count_after: ref_count,
            crossed_boundary: ref_count == 1,
        })
    }

    /// Removes `(session_id, key)` membership if present and decrements the ref-count.
    #[instrument(skip(self))]
    pub async fn release(&self, session_id: Uuid, key: &str) -> Result<RefCountTransition> {
        let mut tx = self.pool.begin().await?;

        let removed = sqlx::query("DELETE FROM subscriptions WHERE session_id = $1 AND key = $2")
            .bind(session_id)
            .bind(key)
            .execute(&mut *tx)
            .await?
            .rows_affected()
            > 0;

        if !removed {
            let ref_count: i64 = sqlx::query_scalar("SELECT ref_count FROM subscription_refcounts WHERE key = $1")
                .bind(key)
                .fetch_optional(&mut *tx)
                .await?
                .unwrap_or(0);
            tx.commit().await?;
            return Ok(RefCountTransition {
                ref_count_after: ref_count,
                crossed_boundary: false,
            });
        }

        let ref_count: i64 = sqlx::query_scalar(
            "UPDATE subscription_refcounts SET ref_count = ref_count - 1 WHERE key = $1 RETURNING ref_count",
        )
        .bind(key)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        Ok(RefCountTransition {
            ref_count_after: ref_count,
            crossed_boundary: ref_count == 0,
        })
    }

    /// Releases every key held by `session_id`, returning the keys whose ref-count hit zero.
    #[instrument(skip(self))]
    pub async fn release_all(&self, session_id: Uuid) -> Result<Vec<String>> {
        let keys: Vec<String> = sqlx::query_scalar("SELECT key FROM subscriptions WHERE session_id = $1")
            .bind(session_id)
            .fetch_all(&self.pool)
            .await?;

        let mut zeroed = Vec::new();
        for key in keys {
            let transition = self.release(session_id, &key).await?;
            if transition.crossed_boundary {
                zeroed.push(key);
            }
        }
        Ok(zeroed)
    }

    /// Keys with ref-count > 0 — the desired set the Exchange Adapter reconciles against.
    #[instrument(skip(self))]
    pub async fn snapshot(&self) -> Result<Vec<String>> {
        let keys = sqlx::query_scalar("SELECT key FROM subscription_refcounts WHERE ref_count > 0")
            .fetch_all(&self.pool)
            .await?;
        Ok(keys)
    }
}
