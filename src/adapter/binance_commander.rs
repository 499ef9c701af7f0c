use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde_json::Value;
use tokio::sync::Mutex;
use tracing::{instrument, warn};

use crate::adapter::reconcile::{ReconcilePlan, UpstreamCommander};
use crate::model::{LivePayload, StreamType, SubscriptionKey};
use crate::store::LiveStore;
use crate::streams::events::{BookTickerStreamEvent, DiffDepthStreamEvent, KlineStreamEvent, TradeStreamEvent};
use crate::streams::specs::{BookTickerStreamSpec, DiffDepthStreamSpec, Interval, KlineStreamSpec, TradeStreamSpec};
use crate::streams::BinanceSpotStreamClient;
use crate::Result;

/**
 * [`UpstreamCommander`] backed by one dynamic-mode market-data connection
 * (one physical socket multiplexing every subscribed stream, per the
 * teacher's `StreamClient` in `Dynamic` mode). Each accepted `add` spawns a
 * forwarder task that decodes the typed event and upserts it into
 * [`LiveStore`]; the matching `remove` aborts that task and unsubscribes.
 */
pub struct BinanceMarketDataCommander {
    client: Mutex<BinanceSpotStreamClient>,
    live_store: LiveStore,
    forwarders: DashMap<String, tokio::task::JoinHandle<()>>,
}

impl BinanceMarketDataCommander {
    pub fn new(client: BinanceSpotStreamClient, live_store: LiveStore) -> Self {
        Self {
            client: Mutex::new(client),
            live_store,
            forwarders: DashMap::new(),
        }
    }

    async fn add_one(&self, canonical: &str) -> Result<()> {
        let key: SubscriptionKey = canonical.parse()?;
        let mut client = self.client.lock().await;

        let handle = match key.stream_type() {
            StreamType::Kline => {
                let interval = interval_from_code(key.interval().unwrap_or("1"))?;
                let spec = KlineStreamSpec::new(key.symbol(), interval);
                let mut sub = client.subscribe(&spec).await?;
                let live_store = self.live_store.clone();
                let canonical = canonical.to_string();
                tokio::spawn(async move {
                    loop {
                        match sub.recv().await {
                            Ok(event) => {
                                let (payload, is_closed) = kline_event_to_payload(event);
                                if let Err(err) = live_store.upsert_live_row(&canonical, payload, is_closed).await {
                                    warn!(key = %canonical, error = %err, "failed to upsert kline live row");
                                }
                            }
                            Err(err) => {
                                warn!(key = %canonical, error = %err, "kline forwarder channel closed");
                                break;
                            }
                        }
                    }
                })
            }
            StreamType::Quotes => {
                let spec = BookTickerStreamSpec::new(key.symbol());
                let mut sub = client.subscribe(&spec).await?;
                let live_store = self.live_store.clone();
                let canonical = canonical.to_string();
                tokio::spawn(async move {
                    loop {
                        match sub.recv().await {
                            Ok(event) => {
                                let payload = quote_event_to_payload(event);
                                if let Err(err) = live_store.upsert_live_row(&canonical, payload, false).await {
                                    warn!(key = %canonical, error = %err, "failed to upsert quote live row");
                                }
                            }
                            Err(err) => {
                                warn!(key = %canonical, error = %err, "quote forwarder channel closed");
                                break;
                            }
                        }
                    }
                })
            }
            StreamType::Trade => {
                let spec = TradeStreamSpec::new(key.symbol());
                let mut sub = client.subscribe(&spec).await?;
                let live_store = self.live_store.clone();
                let canonical = canonical.to_string();
                tokio::spawn(async move {
                    loop {
                        match sub.recv().await {
                            Ok(event) => {
                                let payload = trade_event_to_payload(event);
                                if let Err(err) = live_store.upsert_live_row(&canonical, payload, false).await {
                                    warn!(key = %canonical, error = %err, "failed to upsert trade live row");
                                }
                            }
                            Err(err) => {
                                warn!(key = %canonical, error = %err, "trade forwarder channel closed");
                                break;
                            }
                        }
                    }
                })
            }
            StreamType::Depth => {
                let spec = DiffDepthStreamSpec::standard(key.symbol());
                let mut sub = client.subscribe(&spec).await?;
                let live_store = self.live_store.clone();
                let canonical = canonical.to_string();
                tokio::spawn(async move {
                    loop {
                        match sub.recv().await {
                            Ok(event) => {
                                let payload = depth_event_to_payload(event);
                                if let Err(err) = live_store.upsert_live_row(&canonical, payload, false).await {
                                    warn!(key = %canonical, error = %err, "failed to upsert depth live row");
                                }
                            }
                            Err(err) => {
                                warn!(key = %canonical, error = %err, "depth forwarder channel closed");
                                break;
                            }
                        }
                    }
                })
            }
            StreamType::Account(_) => {
                // Account keys are handled by `account_stream`, not the market-data commander.
                return Ok(());
            }
        };

        if let Some((_, old)) = self.forwarders.remove(canonical) {
            old.abort();
        }
        self.forwarders.insert(canonical.to_string(), handle);
        Ok(())
    }

    async fn remove_one(&self, canonical: &str) -> Result<()> {
        let key: SubscriptionKey = canonical.parse()?;
        let mut client = self.client.lock().await;

        match key.stream_type() {
            StreamType::Kline => {
                let interval = interval_from_code(key.interval().unwrap_or("1"))?;
                client.unsubscribe(KlineStreamSpec::new(key.symbol(), interval)).await?;
            }
            StreamType::Quotes => client.unsubscribe(BookTickerStreamSpec::new(key.symbol())).await?,
            StreamType::Trade => client.unsubscribe(TradeStreamSpec::new(key.symbol())).await?,
            StreamType::Depth => client.unsubscribe(DiffDepthStreamSpec::standard(key.symbol())).await?,
            StreamType::Account(_) => {}
        }

        if let Some((_, handle)) = self.forwarders.remove(canonical) {
            handle.abort();
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl UpstreamCommander for BinanceMarketDataCommander {
    #[instrument(skip(self, plan))]
    async fn apply(&self, plan: ReconcilePlan) -> Result<()> {
        for key in &plan.add {
            self.add_one(key).await?;
        }
        for key in &plan.remove {
            self.remove_one(key).await?;
        }
        Ok(())
    }
}

fn interval_from_code(code: &str) -> Result<Interval> {
    let interval = match code {
        "1" => Interval::OneMinute,
        "5" => Interval::FiveMinutes,
        "15" => Interval::FifteenMinutes,
        "60" => Interval::OneHour,
        "240" => Interval::FourHours,
        "D" => Interval::OneDay,
        "W" => Interval::OneWeek,
        "M" => Interval::OneMonth,
        other => return Err(anyhow::anyhow!("unsupported kline interval code '{other}'")),
    };
    Ok(interval)
}

fn millis_to_datetime(millis: u64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(millis as i64).unwrap_or_else(Utc::now)
}

fn kline_event_to_payload(event: KlineStreamEvent) -> (Value, bool) {
    let k = event.kline.kline;
    let payload = LivePayload::Kline {
        open_time: millis_to_datetime(k.open_time),
        close_time: millis_to_datetime(k.close_time),
        open: k.open_price,
        high: k.high_price,
        low: k.low_price,
        close: k.close_price,
        volume: k.volume,
        is_closed: event.kline.is_kline_closed,
    };
    (serde_json::to_value(&payload).expect("LivePayload serializes"), event.kline.is_kline_closed)
}

fn quote_event_to_payload(event: BookTickerStreamEvent) -> Value {
    let payload = LivePayload::Quote {
        bid_price: event.ticker.bid_price,
        bid_qty: event.ticker.bid_quantity,
        ask_price: event.ticker.ask_price,
        ask_qty: event.ticker.ask_quantity,
    };
    serde_json::to_value(&payload).expect("LivePayload serializes")
}

fn trade_event_to_payload(event: TradeStreamEvent) -> Value {
    let payload = LivePayload::Trade {
        trade_id: event.trade.id,
        price: event.trade.price,
        qty: event.trade.quantity,
        is_buyer_maker: event.trade.is_buyer_maker,
        traded_at: millis_to_datetime(event.trade.time),
    };
    serde_json::to_value(&payload).expect("LivePayload serializes")
}

fn depth_event_to_payload(event: DiffDepthStreamEvent) -> Value {
    let payload = LivePayload::Depth {
        first_update_id: event.first_update_id,
        final_update_id: event.final_update_id,
        bids: event.bids.into_iter().map(|level| (level.price(), level.quantity())).collect(),
        asks: event.asks.into_iter().map(|level| (level.price(), level.quantity())).collect(),
    };
    serde_json::to_value(&payload).expect("LivePayload serializes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn interval_code_round_trips_common_values() {
        assert!(matches!(interval_from_code("60").unwrap(), Interval::OneHour));
        assert!(matches!(interval_from_code("D").unwrap(), Interval::OneDay));
        assert!(interval_from_code("bogus").is_err());
    }
}
