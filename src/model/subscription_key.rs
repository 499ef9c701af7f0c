use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::InvalidParameter;
use crate::Result;

/**
 * Market an account-stream [`SubscriptionKey`] addresses. Carried alongside
 * [`StreamType::Account`] rather than folded into [`crate::model::Exchange`]
 * because the canonical key's exchange segment stays the bare venue name
 * (`BINANCE`) — it's the `@` suffix that distinguishes `SPOT` from
 * `FUTURES`, per spec's `"BINANCE:ACCOUNT@SPOT"` example.
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarketType {
    Spot,
    Futures,
}

impl MarketType {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Spot => "SPOT",
            Self::Futures => "FUTURES",
        }
    }

    fn from_str_upper(s: &str) -> Option<Self> {
        match s {
            "SPOT" => Some(Self::Spot),
            "FUTURES" => Some(Self::Futures),
            _ => None,
        }
    }
}

impl fmt::Display for MarketType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/**
 * Upstream stream family a [`SubscriptionKey`] addresses.
 *
 * Mirrors the teacher's WebSocket stream taxonomy (`kline`, `trade`,
 * `depth`, ticker variants) collapsed to the families this gateway
 * actually fans out: candles, top-of-book/best-bid-ask quotes, individual
 * trades, order-book depth, and account state (tagged by which market the
 * account snapshot/overlay belongs to).
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StreamType {
    Kline,
    Quotes,
    Trade,
    Depth,
    Account(MarketType),
}

impl StreamType {
    fn as_str(&self) -> &'static str {
        match self {
            Self::Kline => "KLINE",
            Self::Quotes => "QUOTES",
            Self::Trade => "TRADE",
            Self::Depth => "DEPTH",
            Self::Account(market) => market.as_str(),
        }
    }

    fn from_str_upper(s: &str) -> Result<Self> {
        match s {
            "KLINE" => Ok(Self::Kline),
            "QUOTES" => Ok(Self::Quotes),
            "TRADE" => Ok(Self::Trade),
            "DEPTH" => Ok(Self::Depth),
            other => match MarketType::from_str_upper(other) {
                Some(market) => Ok(Self::Account(market)),
                None => Err(InvalidParameter::new("stream_type", format!("unknown stream type '{other}'")).into()),
            },
        }
    }

    /// Whether this stream type produces bar-shaped (openable/closeable) rows.
    pub fn is_bar(&self) -> bool {
        matches!(self, Self::Kline)
    }
}

impl fmt::Display for StreamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/**
 * Canonical, opaque identifier of one upstream stream subscription.
 *
 * Wire/canonical form: `"{EXCHANGE}:{SYMBOL}@{STREAM_TYPE}[_{PARAM}]"`, e.g.
 * `"BINANCE:BTCUSDT@KLINE_60"` or `"BINANCE:ACCOUNT@SPOT"`. Equality is
 * string equality on the canonical form; the struct caches the parsed
 * fields so callers don't need to re-split on every comparison.
 */
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SubscriptionKey {
    exchange: String,
    symbol: String,
    stream_type: StreamType,
    interval: Option<String>,
    canonical: String,
}

impl SubscriptionKey {
    /**
     * Builds a key from structured fields, canonicalizing `exchange` and
     * `symbol` to upper case and the interval to its minutes-or-code form.
     */
    pub fn new(
        exchange: impl Into<String>,
        symbol: impl Into<String>,
        stream_type: StreamType,
        interval: Option<&str>,
    ) -> Result<Self> {
        let exchange = exchange.into().to_ascii_uppercase();
        let symbol = symbol.into().to_ascii_uppercase();

        if exchange.is_empty() {
            return Err(InvalidParameter::empty("exchange").into());
        }
        if symbol.is_empty() {
            return Err(InvalidParameter::empty("symbol").into());
        }

        let interval = match (stream_type, interval) {
            (StreamType::Kline, Some(raw)) => Some(canonicalize_interval(raw)?),
            (StreamType::Kline, None) => {
                return Err(InvalidParameter::required("interval").into());
            }
            (_, Some(_)) => {
                return Err(InvalidParameter::new("interval", "only valid for KLINE stream keys").into());
            }
            (_, None) => None,
        };

        let canonical = match &interval {
            Some(interval) => format!("{exchange}:{symbol}@{stream_type}_{interval}"),
            None => format!("{exchange}:{symbol}@{stream_type}"),
        };

        Ok(Self {
            exchange,
            symbol,
            stream_type,
            interval,
            canonical,
        })
    }

    pub fn exchange(&self) -> &str {
        &self.exchange
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn stream_type(&self) -> StreamType {
        self.stream_type
    }

    pub fn interval(&self) -> Option<&str> {
        self.interval.as_deref()
    }

    pub fn as_canonical(&self) -> &str {
        &self.canonical
    }
}

impl fmt::Display for SubscriptionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.canonical)
    }
}

impl FromStr for SubscriptionKey {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let (exchange, rest) = s
            .split_once(':')
            .ok_or_else(|| InvalidParameter::new("key", "missing '<EXCHANGE>:' prefix"))?;
        let (symbol, stream_part) = rest
            .split_once('@')
            .ok_or_else(|| InvalidParameter::new("key", "missing '@<STREAM_TYPE>' suffix"))?;

        let (stream_type_raw, interval_raw) = match stream_part.split_once('_') {
            Some((ty, interval)) => (ty, Some(interval)),
            None => (stream_part, None),
        };

        let stream_type = StreamType::from_str_upper(stream_type_raw)?;
        Self::new(exchange, symbol, stream_type, interval_raw)
    }
}

impl TryFrom<String> for SubscriptionKey {
    type Error = anyhow::Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<SubscriptionKey> for String {
    fn from(key: SubscriptionKey) -> Self {
        key.canonical
    }
}

/**
 * Canonicalizes a kline interval to its minutes-or-code form:
 * `1|5|15|60|240|D|W|M`.
 */
fn canonicalize_interval(raw: &str) -> Result<String> {
    let upper = raw.to_ascii_uppercase();
    let canonical = match upper.as_str() {
        "1" | "1M" | "1MIN" => "1",
        "5" | "5M" | "5MIN" => "5",
        "15" | "15M" | "15MIN" => "15",
        "60" | "1H" => "60",
        "240" | "4H" => "240",
        "D" | "1D" => "D",
        "W" | "1W" => "W",
        "M" | "1MO" => "M",
        other => return Err(InvalidParameter::new("interval", format!("unsupported interval '{other}'")).into()),
    };
    Ok(canonical.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonicalizes_exchange_and_symbol_case() {
        let key = SubscriptionKey::new("binance", "btcusdt", StreamType::Quotes, None).unwrap();
        assert_eq!(key.as_canonical(), "BINANCE:BTCUSDT@QUOTES");
    }

    #[test]
    fn kline_key_requires_interval() {
        let err = SubscriptionKey::new("BINANCE", "BTCUSDT", StreamType::Kline, None);
        assert!(err.is_err());
    }

    #[test]
    fn non_kline_key_rejects_interval() {
        let err = SubscriptionKey::new("BINANCE", "BTCUSDT", StreamType::Trade, Some("60"));
        assert!(err.is_err());
    }

    #[test]
    fn round_trips_through_display_and_from_str() {
        let key = SubscriptionKey::new("BINANCE", "BTCUSDT", StreamType::Kline, Some("1h")).unwrap();
        assert_eq!(key.as_canonical(), "BINANCE:BTCUSDT@KLINE_60");

        let parsed: SubscriptionKey = key.as_canonical().parse().unwrap();
        assert_eq!(parsed, key);
    }

    #[test]
    fn account_key_has_no_interval() {
        let key = SubscriptionKey::new("BINANCE", "ACCOUNT", StreamType::Account(MarketType::Spot), None).unwrap();
        assert_eq!(key.as_canonical(), "BINANCE:ACCOUNT@SPOT");
        assert!(key.interval().is_none());
    }

    #[test]
    fn futures_account_key_suffixes_futures() {
        let key = SubscriptionKey::new("BINANCE", "ACCOUNT", StreamType::Account(MarketType::Futures), None).unwrap();
        assert_eq!(key.as_canonical(), "BINANCE:ACCOUNT@FUTURES");

        let parsed: SubscriptionKey = key.as_canonical().parse().unwrap();
        assert_eq!(parsed, key);
    }

    #[test]
    fn rejects_malformed_strings() {
        assert!("BINANCE_BTCUSDT".parse::<SubscriptionKey>().is_err());
        assert!("BINANCE:BTCUSDT".parse::<SubscriptionKey>().is_err());
        assert!("BINANCE:BTCUSDT@BOGUS".parse::<SubscriptionKey>().is_err());
    }

    #[test]
    fn equality_is_string_equality_on_canonical_form() {
        let a = SubscriptionKey::new("binance", "ethusdt", StreamType::Kline, Some("D")).unwrap();
        let b = SubscriptionKey::new("BINANCE", "ETHUSDT", StreamType::Kline, Some("1d")).unwrap();
        assert_eq!(a, b);
    }
}
