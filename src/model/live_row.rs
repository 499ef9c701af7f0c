use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::model::SubscriptionKey;

/**
 * Payload shape stored in `realtime_data.payload` (jsonb), one variant per
 * [`crate::model::StreamType`]. Kept untagged-adjacent (internally tagged
 * on `kind`) so the column can be queried by stream family without a join.
 */
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LivePayload {
    Kline {
        open_time: DateTime<Utc>,
        close_time: DateTime<Utc>,
        open: Decimal,
        high: Decimal,
        low: Decimal,
        close: Decimal,
        volume: Decimal,
        is_closed: bool,
    },
    Quote {
        bid_price: Decimal,
        bid_qty: Decimal,
        ask_price: Decimal,
        ask_qty: Decimal,
    },
    Trade {
        trade_id: u64,
        price: Decimal,
        qty: Decimal,
        is_buyer_maker: bool,
        traded_at: DateTime<Utc>,
    },
    Depth {
        first_update_id: u64,
        final_update_id: u64,
        bids: Vec<(Decimal, Decimal)>,
        asks: Vec<(Decimal, Decimal)>,
    },
}

impl LivePayload {
    /// `true` for a [`LivePayload::Kline`] whose bar has closed.
    pub fn is_closed_bar(&self) -> bool {
        matches!(self, Self::Kline { is_closed: true, .. })
    }
}

/**
 * One row of `realtime_data`: the latest known state for a subscription
 * key, overwritten in place on every upstream update. `kline_live`
 * notifications carry this shape on every tick; `kline_closed` carries it
 * only at bar-close, immediately before the matching row is archived and
 * deleted (see [`crate::model::ArchiveRow`]).
 */
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveRow {
    pub key: SubscriptionKey,
    pub payload: LivePayload,
    pub received_at: DateTime<Utc>,
    pub sequence: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StreamType;

    #[test]
    fn kline_payload_reports_close_state() {
        let payload = LivePayload::Kline {
            open_time: Utc::now(),
            close_time: Utc::now(),
            open: Decimal::new(100, 0),
            high: Decimal::new(110, 0),
            low: Decimal::new(90, 0),
            close: Decimal::new(105, 0),
            volume: Decimal::new(10, 0),
            is_closed: true,
        };
        assert!(payload.is_closed_bar());
    }

    #[test]
    fn non_kline_payload_is_never_a_closed_bar() {
        let payload = LivePayload::Trade {
            trade_id: 1,
            price: Decimal::new(100, 0),
            qty: Decimal::new(1, 0),
            is_buyer_maker: false,
            traded_at: Utc::now(),
        };
        assert!(!payload.is_closed_bar());
    }

    #[test]
    fn serializes_with_kind_tag() {
        let key = SubscriptionKey::new("BINANCE", "BTCUSDT", StreamType::Quotes, None).unwrap();
        let row = LiveRow {
            key,
            payload: LivePayload::Quote {
                bid_price: Decimal::new(100, 0),
                bid_qty: Decimal::new(1, 0),
                ask_price: Decimal::new(101, 0),
                ask_qty: Decimal::new(1, 0),
            },
            received_at: Utc::now(),
            sequence: 1,
        };
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json["payload"]["kind"], "quote");
    }
}
