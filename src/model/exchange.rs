use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::InvalidParameter;
use crate::model::MarketType;
use crate::Result;

/**
 * Venue an exchange-adapter connection speaks to.
 *
 * The adapter maintains one connection pool per variant; spot and futures
 * use disjoint upstream hosts, rate limits, and stream namespaces even
 * though they share the signing/REST/WS client plumbing.
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Exchange {
    BinanceSpot,
    BinanceFutures,
}

impl Exchange {
    fn as_str(&self) -> &'static str {
        match self {
            Self::BinanceSpot => "BINANCE_SPOT",
            Self::BinanceFutures => "BINANCE_FUTURES",
        }
    }

    /// The market an `ACCOUNT` subscription key's `@` suffix should carry for this venue.
    pub fn market_type(&self) -> MarketType {
        match self {
            Self::BinanceSpot => MarketType::Spot,
            Self::BinanceFutures => MarketType::Futures,
        }
    }
}

impl fmt::Display for Exchange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Exchange {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_uppercase().as_str() {
            "BINANCE_SPOT" | "BINANCE" => Ok(Self::BinanceSpot),
            "BINANCE_FUTURES" => Ok(Self::BinanceFutures),
            other => Err(InvalidParameter::new("exchange", format!("unknown exchange '{other}'")).into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_binance_aliases_to_spot() {
        assert_eq!("binance".parse::<Exchange>().unwrap(), Exchange::BinanceSpot);
    }

    #[test]
    fn round_trips_through_display() {
        assert_eq!(Exchange::BinanceFutures.to_string().parse::<Exchange>().unwrap(), Exchange::BinanceFutures);
    }

    #[test]
    fn rejects_unknown_exchange() {
        assert!("coinbase".parse::<Exchange>().is_err());
    }
}
