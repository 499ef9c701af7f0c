use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde_json::Value;
use tokio::sync::Mutex;
use tokio::time::interval;
use tracing::{info, instrument, warn};

use crate::clients::r#trait::BinanceSpotClient;
use crate::model::{Exchange, SubscriptionKey};
use crate::store::LiveStore;
use crate::streams::events::UserDataEvent;
use crate::streams::specs::UserDataStreamSpec;
use crate::streams::BinanceSpotStreamClient;
use crate::{BinanceConfig, Result, StreamConfig};

/// A full authenticated account snapshot, fetched via signed REST.
#[async_trait::async_trait]
pub trait AccountSnapshotSource: Send + Sync {
    async fn fetch_snapshot(&self, exchange: Exchange) -> Result<Value>;
}

/// A listen-key-bound (futures) or signed-WS (spot) incremental user-data stream.
#[async_trait::async_trait]
pub trait AccountDeltaSource: Send + Sync {
    /// Blocks until the next incremental event, carrying only the changed assets/positions.
    async fn next_delta(&mut self, exchange: Exchange) -> Result<AccountDelta>;

    /// Futures-only: renews the REST-issued listen key, due at 55 minutes of its 60-minute TTL.
    async fn renew_listen_key(&mut self, exchange: Exchange) -> Result<()> {
        let _ = exchange;
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct AccountDelta {
    pub event_time: DateTime<Utc>,
    pub changed: Value,
}

/// Futures listen keys: 60-minute TTL, renewed at 55 minutes, capped at a 24-hour absolute age.
const LISTEN_KEY_RENEW_AFTER: Duration = Duration::from_secs(55 * 60);
const LISTEN_KEY_ABSOLUTE_CAP: Duration = Duration::from_secs(24 * 60 * 60);

/**
 * Account User-Stream (§4.7): blends a periodic REST snapshot with an
 * incremental user-data stream for one exchange's `ACCOUNT` key. The
 * incremental stream alone can't reconstruct state (it only ever carries a
 * delta), so a full snapshot is re-fetched every `snapshot_interval` and
 * overwrites the live row outright; overlay and snapshot both reconcile on
 * `event_time` with last-writer-wins.
 */
pub struct AccountStreamManager {
    exchange: Exchange,
    live_store: LiveStore,
    snapshot_source: Box<dyn AccountSnapshotSource>,
    snapshot_interval: Duration,
    last_event_time: Option<DateTime<Utc>>,
    key: SubscriptionKey,
}

impl AccountStreamManager {
    pub fn new(
        exchange: Exchange,
        live_store: LiveStore,
        snapshot_source: Box<dyn AccountSnapshotSource>,
        snapshot_interval: Duration,
    ) -> Result<Self> {
        let key = SubscriptionKey::new("BINANCE", "ACCOUNT", crate::model::StreamType::Account(exchange.market_type()), None)?;
        Ok(Self {
            exchange,
            live_store,
            snapshot_source,
            snapshot_interval,
            last_event_time: None,
            key,
        })
    }

    /// Fetches the initial full snapshot and seeds the live row, per protocol step one.
    #[instrument(skip(self))]
    pub async fn initialize(&mut self) -> Result<()> {
        let snapshot = self.snapshot_source.fetch_snapshot(self.exchange).await?;
        self.live_store.upsert_live_row(self.key.as_canonical(), snapshot, false).await?;
        self.last_event_time = Some(Utc::now());
        info!(key = %self.key, "account live row initialized from snapshot");
        Ok(())
    }

    /// Overlays an incremental delta onto the live row unless a newer snapshot already won.
    #[instrument(skip(self, delta))]
    pub async fn apply_delta(&mut self, delta: AccountDelta) -> Result<()> {
        if let Some(last) = self.last_event_time {
            if delta.event_time < last {
                warn!(key = %self.key, "dropping stale account delta (snapshot already newer)");
                return Ok(());
            }
        }

        let current = self.live_store.fetch_live_row(self.key.as_canonical()).await?.unwrap_or(serde_json::json!({}));
        let merged = merge_overlay(current, delta.changed);
        self.live_store.upsert_live_row(self.key.as_canonical(), merged, false).await?;
        self.last_event_time = Some(delta.event_time);
        Ok(())
    }

    /// Re-fetches a full snapshot and overwrites the live row, tie-breaking on `event_time`.
    #[instrument(skip(self))]
    pub async fn refresh_snapshot(&mut self) -> Result<()> {
        let snapshot = self.snapshot_source.fetch_snapshot(self.exchange).await?;
        self.live_store.upsert_live_row(self.key.as_canonical(), snapshot, false).await?;
        self.last_event_time = Some(Utc::now());
        Ok(())
    }

    /// Runs the `snapshot_interval` refresh loop; the incremental-delta loop is driven
    /// separately by the connection handling that owns the user-data WS socket.
    pub async fn run_snapshot_loop(&mut self) -> Result<()> {
        let mut ticker = interval(self.snapshot_interval);
        loop {
            ticker.tick().await;
            if let Err(err) = self.refresh_snapshot().await {
                warn!(error = %err, "periodic account snapshot refresh failed");
            }
        }
    }

    pub fn key(&self) -> &SubscriptionKey {
        &self.key
    }
}

fn merge_overlay(mut base: Value, delta: Value) -> Value {
    if let (Some(base_obj), Some(delta_obj)) = (base.as_object_mut(), delta.as_object()) {
        for (k, v) in delta_obj {
            base_obj.insert(k.clone(), v.clone());
        }
        base
    } else {
        delta
    }
}

/// [`AccountSnapshotSource`] backed by the teacher's signed `AccountClient::account_info`.
/// Spot-only: the wrapped client has no futures account REST surface, so this source is
/// only ever wired up for [`Exchange::Binance`]'s spot live row.
pub struct BinanceAccountSnapshotSource {
    spot_client: Arc<dyn BinanceSpotClient + Send + Sync>,
}

impl BinanceAccountSnapshotSource {
    pub fn new(spot_client: Arc<dyn BinanceSpotClient + Send + Sync>) -> Self {
        Self { spot_client }
    }
}

#[async_trait::async_trait]
impl AccountSnapshotSource for BinanceAccountSnapshotSource {
    async fn fetch_snapshot(&self, _exchange: Exchange) -> Result<Value> {
        let info = self.spot_client.account_info().await?;
        Ok(serde_json::to_value(&info)?)
    }
}

fn user_data_event_to_delta(event: UserDataEvent) -> Option<AccountDelta> {
    match event {
        UserDataEvent::OutboundAccountPosition(position) => Some(AccountDelta {
            event_time: millis_to_datetime(position.event_time),
            changed: serde_json::json!({ "balances": position.balances }),
        }),
        UserDataEvent::BalanceUpdate(update) => Some(AccountDelta {
            event_time: millis_to_datetime(update.event_time),
            changed: serde_json::json!({
                "balance_delta": { "asset": update.asset, "delta": update.balance_delta }
            }),
        }),
        // Order/list-status/lock events carry no asset or position delta this gateway
        // tracks; the account live row only reflects balances and positions.
        UserDataEvent::ExecutionReport(_)
        | UserDataEvent::ListStatus(_)
        | UserDataEvent::ExternalLockUpdate(_)
        | UserDataEvent::EventStreamTerminated(_) => None,
    }
}

fn millis_to_datetime(millis: u64) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(millis as i64).unwrap_or_else(Utc::now)
}

/**
 * Owns the spot user-data WebSocket connection and forwards every balance-bearing
 * event into `manager.apply_delta`. Kept as a free function (rather than an
 * [`AccountDeltaSource`] impl) because the subscription handle it holds is an
 * internal stream-client type that can't be named outside `crate::streams` — the
 * same reason `BinanceMarketDataCommander`'s per-key forwarders are spawned tasks
 * rather than stored fields.
 */
#[instrument(skip(manager, stream_config))]
pub async fn run_account_delta_loop(
    manager: Arc<Mutex<AccountStreamManager>>,
    stream_config: BinanceConfig<StreamConfig>,
) -> Result<()> {
    let mut client = BinanceSpotStreamClient::new(stream_config)?;
    client.wait_for_connection().await?;
    let mut subscription = client.subscribe(&UserDataStreamSpec::new()).await?;

    loop {
        let event = subscription.recv().await?;
        let Some(delta) = user_data_event_to_delta(event) else {
            continue;
        };
        if let Err(err) = manager.lock().await.apply_delta(delta).await {
            warn!(error = %err, "failed to apply account delta");
        }
    }
}

/// Whether a futures listen key due at `issued_at` needs renewal now.
pub fn listen_key_needs_renewal(issued_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    let age = now - issued_at;
    age >= chrono::Duration::from_std(LISTEN_KEY_RENEW_AFTER).expect("constant duration fits")
}

/// Whether a futures listen key has hit its 24-hour absolute cap and must be reissued.
pub fn listen_key_expired(issued_at: DateTime<Utc>, now: DateTime<Utc>) -> bool {
    let age = now - issued_at;
    age >= chrono::Duration::from_std(LISTEN_KEY_ABSOLUTE_CAP).expect("constant duration fits")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_overlay_only_replaces_changed_keys() {
        let base = serde_json::json!({"balances": {"BTC": "1.0", "ETH": "2.0"}, "positions": []});
        let delta = serde_json::json!({"balances": {"BTC": "1.5"}});
        let merged = merge_overlay(base, delta);
        assert_eq!(merged["balances"]["BTC"], "1.5");
        assert!(merged.get("positions").is_some());
    }

    #[test]
    fn listen_key_renewal_fires_at_fifty_five_minutes() {
        let issued_at = Utc::now() - chrono::Duration::minutes(56);
        assert!(listen_key_needs_renewal(issued_at, Utc::now()));

        let issued_at = Utc::now() - chrono::Duration::minutes(10);
        assert!(!listen_key_needs_renewal(issued_at, Utc::now()));
    }

    #[test]
    fn listen_key_absolute_cap_is_twenty_four_hours() {
        let issued_at = Utc::now() - chrono::Duration::hours(25);
        assert!(listen_key_expired(issued_at, Utc::now()));

        let issued_at = Utc::now() - chrono::Duration::hours(1);
        assert!(!listen_key_expired(issued_at, Utc::now()));
    }
}
