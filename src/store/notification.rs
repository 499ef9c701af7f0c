use serde::Deserialize;
use serde_json::Value;
use uuid::Uuid;

use crate::errors::StoreError;
use crate::model::{SubscriptionKey, TaskType};
use crate::Result;

/**
 * A decoded payload from one of the store's `NOTIFY` channels, classified
 * by channel name. This is the Change-Event Dispatcher's sole input shape;
 * every downstream fan-out lane consumes one of these variants.
 */
#[derive(Debug, Clone, PartialEq)]
pub enum ChangeNotification {
    KlineLive {
        key: SubscriptionKey,
        payload: Value,
        is_closed: bool,
    },
    KlineClosed {
        key: SubscriptionKey,
        payload: Value,
    },
    RealtimeUpdate {
        key: SubscriptionKey,
        payload: Value,
    },
    SubscriptionAdd {
        key: SubscriptionKey,
    },
    SubscriptionRemove {
        key: SubscriptionKey,
    },
    SubscriptionClean,
    TaskNew {
        task_id: Uuid,
        task_type: TaskType,
    },
    TaskCompleted {
        task_id: Uuid,
    },
    AlertConfigNew {
        alert_id: Uuid,
    },
    AlertConfigUpdate {
        alert_id: Uuid,
    },
    AlertConfigDelete {
        alert_id: Uuid,
    },
    SignalNew {
        alert_id: Uuid,
        signal_id: Uuid,
    },
}

#[derive(Deserialize)]
struct KeyPayload {
    key: String,
    payload: Value,
    #[serde(default)]
    is_closed: bool,
}

#[derive(Deserialize)]
struct KeyOnly {
    key: String,
}

#[derive(Deserialize)]
struct TaskNewPayload {
    task_id: Uuid,
    #[serde(rename = "type")]
    task_type: String,
}

#[derive(Deserialize)]
struct TaskCompletedPayload {
    task_id: Uuid,
}

#[derive(Deserialize)]
struct AlertIdPayload {
    alert_id: Uuid,
}

#[derive(Deserialize)]
struct SignalNewPayload {
    alert_id: Uuid,
    signal_id: Uuid,
}

impl ChangeNotification {
    /// Decodes a raw `(channel, payload)` pair as delivered by `PgListener`.
    pub fn decode(channel: &str, payload: &str) -> Result<Self> {
        let malformed = |reason: String| StoreError::malformed(channel, reason);

        Ok(match channel {
            "kline_live" => {
                let p: KeyPayload = serde_json::from_str(payload).map_err(|e| malformed(e.to_string()))?;
                Self::KlineLive {
                    key: p.key.parse().map_err(|e: anyhow::Error| malformed(e.to_string()))?,
                    payload: p.payload,
                    is_closed: p.is_closed,
                }
            }
            "kline_closed" => {
                let p: KeyPayload = serde_json::from_str(payload).map_err(|e| malformed(e.to_string()))?;
                Self::KlineClosed {
                    key: p.key.parse().map_err(|e: anyhow::Error| malformed(e.to_string()))?,
                    payload: p.payload,
                }
            }
            "realtime.update" => {
                let p: KeyPayload = serde_json::from_str(payload).map_err(|e| malformed(e.to_string()))?;
                Self::RealtimeUpdate {
                    key: p.key.parse().map_err(|e: anyhow::Error| malformed(e.to_string()))?,
                    payload: p.payload,
                }
            }
            "subscription.add" => {
                let p: KeyOnly = serde_json::from_str(payload).map_err(|e| malformed(e.to_string()))?;
                Self::SubscriptionAdd {
                    key: p.key.parse().map_err(|e: anyhow::Error| malformed(e.to_string()))?,
                }
            }
            "subscription.remove" => {
                let p: KeyOnly = serde_json::from_str(payload).map_err(|e| malformed(e.to_string()))?;
                Self::SubscriptionRemove {
                    key: p.key.parse().map_err(|e: anyhow::Error| malformed(e.to_string()))?,
                }
            }
            "subscription.clean" => Self::SubscriptionClean,
            "task.new" => {
                let p: TaskNewPayload = serde_json::from_str(payload).map_err(|e| malformed(e.to_string()))?;
                Self::TaskNew {
                    task_id: p.task_id,
                    task_type: p.task_type.parse().map_err(|e: anyhow::Error| malformed(e.to_string()))?,
                }
            }
            "task.completed" => {
                let p: TaskCompletedPayload = serde_json::from_str(payload).map_err(|e| malformed(e.to_string()))?;
                Self::TaskCompleted { task_id: p.task_id }
            }
            "alert_config.new" => {
                let p: AlertIdPayload = serde_json::from_str(payload).map_err(|e| malformed(e.to_string()))?;
                Self::AlertConfigNew { alert_id: p.alert_id }
            }
            "alert_config.update" => {
                let p: AlertIdPayload = serde_json::from_str(payload).map_err(|e| malformed(e.to_string()))?;
                Self::AlertConfigUpdate { alert_id: p.alert_id }
            }
            "alert_config.delete" => {
                let p: AlertIdPayload = serde_json::from_str(payload).map_err(|e| malformed(e.to_string()))?;
                Self::AlertConfigDelete { alert_id: p.alert_id }
            }
            "signal.new" => {
                let p: SignalNewPayload = serde_json::from_str(payload).map_err(|e| malformed(e.to_string()))?;
                Self::SignalNew {
                    alert_id: p.alert_id,
                    signal_id: p.signal_id,
                }
            }
            other => return Err(malformed(format!("unrecognized channel '{other}'")).into()),
        })
    }
}

/// The full set of channels the dispatcher must `LISTEN` on.
pub const ALL_CHANNELS: &[&str] = &[
    "kline_live",
    "kline_closed",
    "realtime.update",
    "subscription.add",
    "subscription.remove",
    "subscription.clean",
    "task.new",
    "task.completed",
    "alert_config.new",
    "alert_config.update",
    "alert_config.delete",
    "signal.new",
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_kline_live_payload() {
        let payload = r#"{"key":"BINANCE:BTCUSDT@KLINE_60","payload":{"close":"50050"},"is_closed":false}"#;
        let decoded = ChangeNotification::decode("kline_live", payload).unwrap();
        match decoded {
            ChangeNotification::KlineLive { key, is_closed, .. } => {
                assert_eq!(key.as_canonical(), "BINANCE:BTCUSDT@KLINE_60");
                assert!(!is_closed);
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn decodes_task_new_payload() {
        let payload = r#"{"task_id":"7c1311e4-2c33-4b1f-9a1e-6e173c1d1f11","type":"RESOLVE_SYMBOL"}"#;
        let decoded = ChangeNotification::decode("task.new", payload).unwrap();
        assert!(matches!(decoded, ChangeNotification::TaskNew { task_type: TaskType::ResolveSymbol, .. }));
    }

    #[test]
    fn subscription_clean_ignores_payload() {
        let decoded = ChangeNotification::decode("subscription.clean", "").unwrap();
        assert_eq!(decoded, ChangeNotification::SubscriptionClean);
    }

    #[test]
    fn rejects_unrecognized_channel() {
        assert!(ChangeNotification::decode("bogus_channel", "{}").is_err());
    }

    #[test]
    fn rejects_malformed_json() {
        assert!(ChangeNotification::decode("kline_live", "not json").is_err());
    }
}
