use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use ed25519_dalek::pkcs8::DecodePrivateKey;
use ed25519_dalek::{Signer, SigningKey};

use crate::Result;
use crate::auth::SignatureProvider;
use crate::errors::InvalidCredentials;

/**
 * Ed25519 signature provider.
 *
 * Loads a PKCS#8 PEM-encoded Ed25519 private key and signs payloads by
 * signing their raw ASCII bytes directly (no intermediate digest) per the
 * exchange's Ed25519 authentication scheme.
 */
#[derive(Debug)]
pub struct Ed25519Signer {
    api_key: String,
    signing_key: SigningKey,
}

impl Ed25519Signer {
    /**
     * Creates a signer from an API key and a PEM-encoded Ed25519 private key.
     *
     * # Arguments
     * - `api_key`: The API key identifying the account.
     * - `private_key_pem`: PKCS#8 PEM text of the Ed25519 private key.
     */
    pub fn new(api_key: impl Into<String>, private_key_pem: &str) -> Result<Self> {
        let signing_key = SigningKey::from_pkcs8_pem(private_key_pem).map_err(|e| {
            InvalidCredentials::new(format!("failed to parse Ed25519 private key: {e}"))
        })?;

        Ok(Self {
            api_key: api_key.into(),
            signing_key,
        })
    }
}

#[async_trait]
impl SignatureProvider for Ed25519Signer {
    fn get_api_key(&self) -> &str {
        &self.api_key
    }

    async fn sign(&self, payload: &str) -> Result<String> {
        let signature = self.signing_key.sign(payload.as_bytes());
        Ok(BASE64.encode(signature.to_bytes()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ed25519_dalek::pkcs8::EncodePrivateKey;

    fn test_key_pem() -> String {
        let mut rng = rand::rngs::OsRng;
        let signing_key = SigningKey::generate(&mut rng);
        signing_key
            .to_pkcs8_pem(Default::default())
            .unwrap()
            .to_string()
    }

    #[tokio::test]
    async fn signs_and_exposes_api_key() {
        let pem = test_key_pem();
        let signer = Ed25519Signer::new("test_key", &pem).unwrap();

        assert_eq!(signer.get_api_key(), "test_key");

        let signature = signer.sign("symbol=BTCUSDT&timestamp=1").await.unwrap();
        assert!(!signature.is_empty());
        assert!(BASE64.decode(&signature).is_ok());
    }

    #[test]
    fn rejects_garbage_pem() {
        let result = Ed25519Signer::new("key", "not a pem");
        assert!(result.is_err());
    }
}
