use serde_json::Value;
use sqlx::postgres::PgPool;
use tracing::instrument;

use crate::Result;

/**
 * Cache for `exchange_info` (§4.6, §6): one row per symbol under its
 * `(exchange, market_type)`, fully replaced on every `FETCH_EXCHANGE_INFO`
 * task rather than diffed, since the upstream response is itself a full
 * snapshot.
 */
#[derive(Clone)]
pub struct ExchangeInfoStore {
    pool: PgPool,
}

impl ExchangeInfoStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Replaces every cached symbol under `(exchange, market_type)` with `symbols`.
    #[instrument(skip(self, symbols))]
    pub async fn replace_all(&self, exchange: &str, market_type: &str, symbols: Vec<(String, Value)>) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM exchange_info WHERE exchange = $1 AND market_type = $2")
            .bind(exchange)
            .bind(market_type)
            .execute(&mut *tx)
            .await?;

        for (symbol, payload) in symbols {
            sqlx::query(
                "INSERT INTO exchange_info (exchange, market_type, symbol, payload) VALUES ($1, $2, $3, $4)",
            )
            .bind(exchange)
            .bind(market_type)
            .bind(symbol)
            .bind(payload)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn fetch_symbol(&self, exchange: &str, market_type: &str, symbol: &str) -> Result<Option<Value>> {
        let payload = sqlx::query_scalar(
            "SELECT payload FROM exchange_info WHERE exchange = $1 AND market_type = $2 AND symbol = $3",
        )
        .bind(exchange)
        .bind(market_type)
        .bind(symbol)
        .fetch_optional(&self.pool)
        .await?;
        Ok(payload)
    }
}
