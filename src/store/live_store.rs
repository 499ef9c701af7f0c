use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde_json::Value;
use sqlx::postgres::PgPool;
use sqlx::Row;
use tracing::instrument;

use crate::Result;

/**
 * SQL-backed implementation of the live/archive row contracts (§4.6): the
 * single `realtime_data` row per [`crate::model::SubscriptionKey`] and the
 * append-only `klines_history` table it seeds on bar close. The split-event
 * (`kline_live` always, `kline_closed` + archive + delete on close) behavior
 * lives entirely in the `notify_live_row` trigger — this layer only
 * performs the conditional upsert the trigger fires on.
 */
#[derive(Clone)]
pub struct LiveStore {
    pool: PgPool,
}

impl LiveStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Upserts the live row for `key`: insert if absent, update in place otherwise.
    #[instrument(skip(self, payload))]
    pub async fn upsert_live_row(&self, key: &str, payload: Value, is_closed: bool) -> Result<()> {
        sqlx::query(
            "INSERT INTO realtime_data (key, payload, is_closed, sequence) VALUES ($1, $2, $3, 1) \
             ON CONFLICT (key) DO UPDATE SET \
                payload = EXCLUDED.payload, \
                is_closed = EXCLUDED.is_closed, \
                sequence = realtime_data.sequence + 1, \
                received_at = now()",
        )
        .bind(key)
        .bind(payload)
        .bind(is_closed)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn fetch_live_row(&self, key: &str) -> Result<Option<Value>> {
        let payload = sqlx::query_scalar("SELECT payload FROM realtime_data WHERE key = $1")
            .bind(key)
            .fetch_optional(&self.pool)
            .await?;
        Ok(payload)
    }

    /// Services `FETCH_HISTORY` tasks: archived bars for `symbol`/`interval` within `[from, to]`.
    #[instrument(skip(self))]
    pub async fn fetch_history(
        &self,
        symbol: &str,
        interval: &str,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<HistoryBar>> {
        let rows = sqlx::query(
            "SELECT open_time, close_time, open, high, low, close, volume FROM klines_history \
             WHERE symbol = $1 AND interval = $2 AND open_time >= $3 AND open_time <= $4 \
             ORDER BY open_time",
        )
        .bind(symbol)
        .bind(interval)
        .bind(from)
        .bind(to)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(|row| {
                Ok(HistoryBar {
                    open_time: row.try_get("open_time")?,
                    close_time: row.try_get("close_time")?,
                    open: row.try_get("open")?,
                    high: row.try_get("high")?,
                    low: row.try_get("low")?,
                    close: row.try_get("close")?,
                    volume: row.try_get("volume")?,
                })
            })
            .collect()
    }

    /// Inserts a backfilled bar straight into the archive, bypassing the live trigger and
    /// producing no notifications, per §4.6's idempotency clause.
    #[instrument(skip(self))]
    pub async fn backfill_bar(&self, symbol: &str, interval: &str, bar: &HistoryBar) -> Result<()> {
        sqlx::query(
            "INSERT INTO klines_history (symbol, interval, open_time, close_time, open, high, low, close, volume) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9) \
             ON CONFLICT (symbol, interval, open_time) DO UPDATE SET \
                close_time = EXCLUDED.close_time, open = EXCLUDED.open, high = EXCLUDED.high, \
                low = EXCLUDED.low, close = EXCLUDED.close, volume = EXCLUDED.volume",
        )
        .bind(symbol)
        .bind(interval)
        .bind(bar.open_time)
        .bind(bar.close_time)
        .bind(bar.open)
        .bind(bar.high)
        .bind(bar.low)
        .bind(bar.close)
        .bind(bar.volume)
        .execute(&self.pool)
        .await?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryBar {
    pub open_time: DateTime<Utc>,
    pub close_time: DateTime<Utc>,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
    pub volume: Decimal,
}
