use anyhow::Context;
use indexmap::IndexMap;
use serde::Serialize;

use crate::Result;
use crate::auth::SignatureProvider;

/**
 * Generates timestamp and signature for authenticated API requests.
 *
 * The signature payload preserves the *insertion order* of `params` rather
 * than sorting them — the exchange's signature check is order-sensitive,
 * and pre-existing behavior here is explicit: do not sort the parameters.
 *
 * # Arguments
 * - `params`: Serializable parameters for the request, in the order they
 *   should appear in the signed query string.
 * - `signer`: Signature provider for generating the signature.
 * - `recv_window`: Request timing window in milliseconds.
 * - `include_api_key`: Whether to include the API key in the signature.
 *
 * # Returns
 * - `(String, String)`: Tuple of (signature, signature_payload).
 */
pub async fn generate_signature<T: Serialize>(
    params: &T,
    signer: &dyn SignatureProvider,
    recv_window: u64,
    include_api_key: bool,
) -> Result<(String, String)> {
    let timestamp = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_millis() as u64;

    let params_query = serde_urlencoded::to_string(params).context("Failed to serialize parameters")?;

    let mut ordered_params: IndexMap<String, String> = IndexMap::new();

    if !params_query.is_empty() {
        for pair in params_query.split('&') {
            if let Some((key, value)) = pair.split_once('=') {
                ordered_params.insert(key.to_string(), value.to_string());
            }
        }
    }

    if include_api_key {
        ordered_params.insert("apiKey".to_string(), signer.get_api_key().to_string());
    }

    ordered_params.insert("timestamp".to_string(), timestamp.to_string());
    ordered_params.insert("recvWindow".to_string(), recv_window.to_string());

    let signature_payload = ordered_params
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&");

    let signature = signer.sign(&signature_payload).await?;
    Ok((signature, signature_payload))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct MockSigner;

    #[async_trait::async_trait]
    impl SignatureProvider for MockSigner {
        fn get_api_key(&self) -> &str {
            "mock_key"
        }

        async fn sign(&self, payload: &str) -> Result<String> {
            Ok(payload.to_string())
        }
    }

    #[derive(Serialize)]
    struct Params {
        symbol: String,
        side: String,
        #[serde(rename = "type")]
        order_type: String,
    }

    #[tokio::test]
    async fn preserves_field_declaration_order_rather_than_sorting() {
        let signer = MockSigner;
        let params = Params {
            symbol: "BTCUSDT".to_string(),
            side: "BUY".to_string(),
            order_type: "LIMIT".to_string(),
        };

        let (signature, _payload) = generate_signature(&params, &signer, 5000, false)
            .await
            .unwrap();

        // The mock signer echoes the payload back; alphabetical sorting would
        // place `recvWindow` before `side`, `symbol`, `timestamp`, `type` --
        // insertion order keeps `symbol` first as declared on the struct.
        let symbol_pos = signature.find("symbol=").unwrap();
        let side_pos = signature.find("side=").unwrap();
        let type_pos = signature.find("type=").unwrap();
        let recv_window_pos = signature.find("recvWindow=").unwrap();

        assert!(symbol_pos < side_pos);
        assert!(side_pos < type_pos);
        assert!(type_pos < recv_window_pos);
    }

    #[tokio::test]
    async fn appends_timestamp_and_recv_window_last() {
        let signer = MockSigner;
        let params = Params {
            symbol: "ETHUSDT".to_string(),
            side: "SELL".to_string(),
            order_type: "MARKET".to_string(),
        };

        let (signature, _payload) = generate_signature(&params, &signer, 3000, false)
            .await
            .unwrap();

        assert!(signature.ends_with(&format!("recvWindow=3000")));
    }
}
