use async_trait::async_trait;
use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::Result;
use crate::auth::SignatureProvider;
use crate::errors::InvalidCredentials;

type HmacSha256 = Hmac<Sha256>;

/**
 * HMAC-SHA256 signature provider, the exchange's default authentication
 * scheme. Signs a payload by hex-encoding the HMAC digest keyed on the
 * account's API secret.
 */
#[derive(Debug)]
pub struct HmacSigner {
    api_key: String,
    secret: Vec<u8>,
}

impl HmacSigner {
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Result<Self> {
        let secret = api_secret.into().into_bytes();
        if secret.is_empty() {
            return Err(InvalidCredentials::new("API secret cannot be empty").into());
        }
        Ok(Self {
            api_key: api_key.into(),
            secret,
        })
    }
}

#[async_trait]
impl SignatureProvider for HmacSigner {
    fn get_api_key(&self) -> &str {
        &self.api_key
    }

    async fn sign(&self, payload: &str) -> Result<String> {
        let mut mac = HmacSha256::new_from_slice(&self.secret)
            .map_err(|e| InvalidCredentials::new(format!("invalid HMAC key: {e}")))?;
        mac.update(payload.as_bytes());
        Ok(hex::encode(mac.finalize().into_bytes()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn produces_deterministic_hex_signature() {
        let signer = HmacSigner::new("key", "secret").unwrap();
        let sig_a = signer.sign("symbol=BTCUSDT&timestamp=1").await.unwrap();
        let sig_b = signer.sign("symbol=BTCUSDT&timestamp=1").await.unwrap();

        assert_eq!(sig_a, sig_b);
        assert_eq!(sig_a.len(), 64);
        assert!(sig_a.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[tokio::test]
    async fn rejects_empty_secret() {
        assert!(HmacSigner::new("key", "").is_err());
    }

    #[tokio::test]
    async fn different_payloads_yield_different_signatures() {
        let signer = HmacSigner::new("key", "secret").unwrap();
        let a = signer.sign("a=1").await.unwrap();
        let b = signer.sign("a=2").await.unwrap();
        assert_ne!(a, b);
    }
}
