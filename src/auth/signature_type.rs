use serde::{Deserialize, Serialize};

/**
 * Signing algorithm associated with a set of API credentials.
 *
 * Binance accepts three key types for authenticated requests; the algorithm
 * is a property of the key, not of the request, so it is selected once when
 * credentials are loaded rather than per-call.
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SignatureType {
    /// HMAC-SHA256 over the query string, hex-encoded.
    Hmac,
    /// RSA-PKCS1v15-SHA256 over the query string, base64-encoded.
    Rsa,
    /// Ed25519 over the query string, base64-encoded.
    Ed25519,
}

impl std::str::FromStr for SignatureType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "hmac" => Ok(Self::Hmac),
            "rsa" => Ok(Self::Rsa),
            "ed25519" => Ok(Self::Ed25519),
            other => Err(anyhow::anyhow!("unknown signature type '{other}'")),
        }
    }
}

impl std::fmt::Display for SignatureType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Hmac => "hmac",
            Self::Rsa => "rsa",
            Self::Ed25519 => "ed25519",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_display_and_from_str() {
        for t in [SignatureType::Hmac, SignatureType::Rsa, SignatureType::Ed25519] {
            let s = t.to_string();
            assert_eq!(s.parse::<SignatureType>().unwrap(), t);
        }
    }

    #[test]
    fn rejects_unknown_type() {
        assert!("dsa".parse::<SignatureType>().is_err());
    }
}
