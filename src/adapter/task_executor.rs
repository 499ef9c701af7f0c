use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::Value;
use tracing::instrument;

use crate::adapter::workers::{TaskExecutor, TaskOutcome};
use crate::clients::r#trait::BinanceSpotClient;
use crate::model::{Task, TaskType};
use crate::store::{ExchangeInfoStore, HistoryBar, LiveStore};
use crate::tasks::FailureKind;
use crate::types::requests::{ExchangeInfoSpec, KlinesSpec};

/**
 * [`TaskExecutor`] backed by the teacher's signed/public REST surface
 * (§4.5's task families). One client handles every spot task type;
 * `GetFuturesAccount` has no REST counterpart in the wrapped client and
 * always fails permanently until a futures REST surface is added.
 */
pub struct BinanceTaskExecutor {
    spot_client: Arc<dyn BinanceSpotClient + Send + Sync>,
    live_store: LiveStore,
    exchange_info_store: ExchangeInfoStore,
}

impl BinanceTaskExecutor {
    pub fn new(
        spot_client: Arc<dyn BinanceSpotClient + Send + Sync>,
        live_store: LiveStore,
        exchange_info_store: ExchangeInfoStore,
    ) -> Self {
        Self { spot_client, live_store, exchange_info_store }
    }

    async fn fetch_history(&self, task: &Task) -> TaskOutcome {
        let Some(symbol) = task.payload.get("symbol").and_then(Value::as_str) else {
            return permanent("payload missing 'symbol'");
        };
        let symbol = symbol.rsplit(':').next().unwrap_or(symbol);

        let Some(interval_code) = task.payload.get("interval").and_then(Value::as_str) else {
            return permanent("payload missing 'interval'");
        };
        let interval = match rest_interval_from_code(interval_code) {
            Ok(interval) => interval,
            Err(err) => return permanent(&err.to_string()),
        };

        let mut spec = KlinesSpec::new(symbol, interval);
        if let Some(from) = task.payload.get("from").and_then(Value::as_i64) {
            spec = spec.with_start_time((from * 1000).max(0) as u64);
        }
        if let Some(to) = task.payload.get("to").and_then(Value::as_i64) {
            spec = spec.with_end_time((to * 1000).max(0) as u64);
        }
        let spec = match spec.build() {
            Ok(spec) => spec,
            Err(err) => return permanent(&err.to_string()),
        };

        let bars = match self.spot_client.klines(spec).await {
            Ok(bars) => bars,
            Err(err) => return transient(&err.to_string()),
        };

        for bar in &bars {
            let history_bar = HistoryBar {
                open_time: millis_to_datetime(bar.open_time),
                close_time: millis_to_datetime(bar.close_time),
                open: bar.open_price,
                high: bar.high_price,
                low: bar.low_price,
                close: bar.close_price,
                volume: bar.volume,
            };
            if let Err(err) = self.live_store.backfill_bar(symbol, interval_code, &history_bar).await {
                return transient(&err.to_string());
            }
        }

        match serde_json::to_value(&bars) {
            Ok(value) => TaskOutcome::Success(serde_json::json!({ "bars": value })),
            Err(err) => permanent(&err.to_string()),
        }
    }

    /// Answers a single-symbol lookup from the cache, falling back to a live REST call (and
    /// caching the result) on a miss.
    async fn resolve_symbol(&self, task: &Task) -> TaskOutcome {
        let Some(raw_symbol) = task.payload.get("symbol").and_then(Value::as_str) else {
            return permanent("payload missing 'symbol'");
        };
        let symbol = raw_symbol.rsplit(':').next().unwrap_or(raw_symbol).to_string();

        match self.exchange_info_store.fetch_symbol("BINANCE", "SPOT", &symbol).await {
            Ok(Some(cached)) => return TaskOutcome::Success(cached),
            Ok(None) => {}
            Err(err) => return transient(&err.to_string()),
        }

        let spec = match ExchangeInfoSpec::new().with_symbol(&symbol).build() {
            Ok(spec) => spec,
            Err(err) => return permanent(&err.to_string()),
        };

        let info = match self.spot_client.exchange_info(spec).await {
            Ok(info) => info,
            Err(err) => return transient(&err.to_string()),
        };

        let Some(found) = info.find_symbol(&symbol) else {
            return permanent(&format!("unknown symbol '{symbol}'"));
        };

        match serde_json::to_value(found) {
            Ok(value) => {
                let entries = vec![(symbol, value.clone())];
                if let Err(err) = self.exchange_info_store.replace_all("BINANCE", "SPOT", entries).await {
                    return transient(&err.to_string());
                }
                TaskOutcome::Success(value)
            }
            Err(err) => permanent(&err.to_string()),
        }
    }

    /// Refreshes the whole `(exchange, market_type)` cache from a full `exchangeInfo` snapshot.
    async fn fetch_exchange_info(&self) -> TaskOutcome {
        let spec = match ExchangeInfoSpec::new().build() {
            Ok(spec) => spec,
            Err(err) => return permanent(&err.to_string()),
        };

        let info = match self.spot_client.exchange_info(spec).await {
            Ok(info) => info,
            Err(err) => return transient(&err.to_string()),
        };

        let mut entries = Vec::with_capacity(info.symbols.len());
        for symbol in &info.symbols {
            match serde_json::to_value(symbol) {
                Ok(value) => entries.push((symbol.symbol.clone(), value)),
                Err(err) => return permanent(&err.to_string()),
            }
        }
        let symbol_count = entries.len();

        if let Err(err) = self.exchange_info_store.replace_all("BINANCE", "SPOT", entries).await {
            return transient(&err.to_string());
        }

        TaskOutcome::Success(serde_json::json!({ "symbol_count": symbol_count }))
    }

    async fn get_spot_account(&self) -> TaskOutcome {
        match self.spot_client.account_info().await {
            Ok(info) => match serde_json::to_value(&info) {
                Ok(value) => TaskOutcome::Success(value),
                Err(err) => permanent(&err.to_string()),
            },
            Err(err) => transient(&err.to_string()),
        }
    }
}

#[async_trait::async_trait]
impl TaskExecutor for BinanceTaskExecutor {
    #[instrument(skip(self, task), fields(task_id = %task.task_id, task_type = %task.task_type))]
    async fn execute(&self, task: &Task) -> TaskOutcome {
        match task.task_type {
            TaskType::FetchHistory => self.fetch_history(task).await,
            TaskType::ResolveSymbol => self.resolve_symbol(task).await,
            TaskType::FetchExchangeInfo => self.fetch_exchange_info().await,
            TaskType::GetSpotAccount => self.get_spot_account().await,
            TaskType::GetFuturesAccount => {
                permanent("futures account REST surface is not wired into this adapter")
            }
        }
    }
}

fn permanent(reason: &str) -> TaskOutcome {
    TaskOutcome::Failure { kind: FailureKind::Permanent, reason: reason.to_string() }
}

fn transient(reason: &str) -> TaskOutcome {
    TaskOutcome::Failure { kind: FailureKind::Transient, reason: reason.to_string() }
}

fn millis_to_datetime(millis: u64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(millis as i64).unwrap_or_else(Utc::now)
}

/// Maps a `SubscriptionKey` canonical interval code to the Binance REST klines interval string.
fn rest_interval_from_code(code: &str) -> crate::Result<&'static str> {
    let interval = match code {
        "1" => "1m",
        "5" => "5m",
        "15" => "15m",
        "60" => "1h",
        "240" => "4h",
        "D" => "1d",
        "W" => "1w",
        "M" => "1M",
        other => return Err(anyhow::anyhow!("unsupported history interval code '{other}'")),
    };
    Ok(interval)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rest_interval_codes_map_to_binance_strings() {
        assert_eq!(rest_interval_from_code("60").unwrap(), "1h");
        assert_eq!(rest_interval_from_code("D").unwrap(), "1d");
        assert!(rest_interval_from_code("bogus").is_err());
    }
}
