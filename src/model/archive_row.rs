use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::model::SubscriptionKey;

/**
 * One closed bar archived into `klines_history`, the append-only
 * time-series table. Rows are written by the `kline_closed` trigger path
 * and are never updated in place; the `(key, open_time)` pair is the
 * natural primary key.
 */
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArchiveRow {
    pub key: SubscriptionKey,
    pub open_time: DateTime<Utc>,
    pub close_time: DateTime<Utc>,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
    pub volume: Decimal,
    pub archived_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::StreamType;

    #[test]
    fn round_trips_through_json() {
        let key = SubscriptionKey::new("BINANCE", "BTCUSDT", StreamType::Kline, Some("60")).unwrap();
        let row = ArchiveRow {
            key,
            open_time: Utc::now(),
            close_time: Utc::now(),
            open: Decimal::new(100, 0),
            high: Decimal::new(110, 0),
            low: Decimal::new(90, 0),
            close: Decimal::new(105, 0),
            volume: Decimal::new(42, 0),
            archived_at: Utc::now(),
        };
        let json = serde_json::to_string(&row).unwrap();
        let back: ArchiveRow = serde_json::from_str(&json).unwrap();
        assert_eq!(back, row);
    }
}
