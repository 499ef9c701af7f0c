mod ed25519_signer;
mod hmac_signer;
mod rsa_signer;
mod signature_provider;
mod signature_type;

pub use ed25519_signer::Ed25519Signer;
pub use hmac_signer::HmacSigner;
pub use rsa_signer::RsaSigner;
pub use signature_provider::SignatureProvider;
pub use signature_type::SignatureType;

use std::sync::Arc;

use crate::Result;

/**
 * Builds the signer matching a configured [`SignatureType`] from an API key
 * and the raw private-key material (a PEM for RSA/Ed25519, the plain API
 * secret for HMAC).
 */
pub fn build_signer(
    signature_type: SignatureType,
    api_key: impl Into<String>,
    private_key_material: &str,
) -> Result<Arc<dyn SignatureProvider>> {
    let api_key = api_key.into();
    Ok(match signature_type {
        SignatureType::Hmac => Arc::new(HmacSigner::new(api_key, private_key_material)?) as Arc<dyn SignatureProvider>,
        SignatureType::Rsa => Arc::new(RsaSigner::new(api_key, private_key_material)?) as Arc<dyn SignatureProvider>,
        SignatureType::Ed25519 => {
            Arc::new(Ed25519Signer::new(api_key, private_key_material)?) as Arc<dyn SignatureProvider>
        }
    })
}
