use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD as BASE64;
use rsa::RsaPrivateKey;
use rsa::pkcs1v15::SigningKey;
use rsa::pkcs8::DecodePrivateKey;
use rsa::sha2::Sha256;
use rsa::signature::{SignatureEncoding, Signer};

use crate::Result;
use crate::auth::SignatureProvider;
use crate::errors::InvalidCredentials;

/**
 * RSA-PKCS1v15-SHA256 signature provider.
 *
 * Loads a PKCS#8 PEM-encoded RSA private key and signs the SHA-256 digest
 * of the payload, base64-encoding the resulting signature.
 */
pub struct RsaSigner {
    api_key: String,
    signing_key: SigningKey<Sha256>,
}

impl std::fmt::Debug for RsaSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RsaSigner")
            .field("api_key", &self.api_key)
            .finish_non_exhaustive()
    }
}

impl RsaSigner {
    pub fn new(api_key: impl Into<String>, private_key_pem: &str) -> Result<Self> {
        let private_key = RsaPrivateKey::from_pkcs8_pem(private_key_pem)
            .map_err(|e| InvalidCredentials::new(format!("failed to parse RSA private key: {e}")))?;
        let signing_key = SigningKey::<Sha256>::new(private_key);

        Ok(Self {
            api_key: api_key.into(),
            signing_key,
        })
    }
}

#[async_trait]
impl SignatureProvider for RsaSigner {
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
    use rsa::pkcs8::EncodePrivateKey;

    fn test_key_pem() -> String {
        let mut rng = rsa::rand_core::OsRng;
        let key = RsaPrivateKey::new(&mut rng, 2048).unwrap();
        key.to_pkcs8_pem(Default::default()).unwrap().to_string()
    }

    #[tokio::test]
    async fn signs_and_exposes_api_key() {
        let pem = test_key_pem();
        let signer = RsaSigner::new("test_key", &pem).unwrap();

        assert_eq!(signer.get_api_key(), "test_key");
        let sig = signer.sign("symbol=BTCUSDT&timestamp=1").await.unwrap();
        assert!(!sig.is_empty());
    }

    #[test]
    fn rejects_garbage_pem() {
        assert!(RsaSigner::new("key", "not a pem").is_err());
    }
}
