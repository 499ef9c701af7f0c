use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/**
 * Event shape for an `alert_config.{new,update,delete}` notification.
 *
 * `alert_configs` is owned and mutated by an external CRUD surface; this
 * gateway only observes its change notifications to drive fan-out to
 * sessions subscribed to `SIGNAL:{alert_id}`. No field beyond `alert_id`
 * and `kind` is interpreted here.
 */
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertConfigEvent {
    pub alert_id: Uuid,
    pub kind: AlertConfigEventKind,
    pub payload: Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertConfigEventKind {
    New,
    Update,
    Delete,
}

/**
 * Event shape for a `signal.new` notification: a row inserted by the
 * external strategy/indicator engine into `strategy_signals`. Fanned out
 * verbatim to sessions subscribed to `SIGNAL:{alert_id}`.
 */
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalRowEvent {
    pub signal_id: Uuid,
    pub alert_id: Uuid,
    pub emitted_at: DateTime<Utc>,
    pub payload: Value,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alert_config_event_kind_serializes_snake_case() {
        let json = serde_json::to_value(AlertConfigEventKind::New).unwrap();
        assert_eq!(json, serde_json::json!("new"));
    }
}
