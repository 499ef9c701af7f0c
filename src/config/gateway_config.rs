use std::str::FromStr;

use clap::Parser;

use crate::auth::SignatureType;
use crate::config::{BinanceConfig, RestConfig, StreamConfig};
use crate::errors::InvalidConfig;
use crate::Result;

fn default_task_worker_count() -> usize {
    std::thread::available_parallelism().map(|n| n.get()).unwrap_or(1)
}

/**
 * Every field in §6's "Configuration (exhaustive)" list, loaded from the
 * environment (the crate parses no config files — out of scope per §1).
 * Each field maps 1:1 to a `clap` arg with an `env` fallback so the binary
 * doubles as its own `--help`.
 */
#[derive(Debug, Clone, Parser)]
#[command(name = "binance-gateway", about = "Database-coordinated market-data and trading-signal gateway")]
pub struct GatewayConfig {
    /// Address the Client Gateway's WebSocket server binds to.
    #[arg(long, env = "GATEWAY_LISTEN_ADDRESS", default_value = "0.0.0.0:8080")]
    pub listen_address: String,

    /// Upstream REST base URL for the spot endpoint family. Empty uses the Binance default.
    #[arg(long, env = "GATEWAY_SPOT_REST_URL", default_value = "")]
    pub spot_rest_url: String,

    /// Upstream REST base URL for the futures endpoint family. Empty uses the Binance default.
    #[arg(long, env = "GATEWAY_FUTURES_REST_URL", default_value = "")]
    pub futures_rest_url: String,

    /// Upstream market-data stream URL. Empty uses the Binance default.
    #[arg(long, env = "GATEWAY_STREAM_URL", default_value = "")]
    pub stream_url: String,

    /// PostgreSQL connection string backing the coordination substrate.
    #[arg(long, env = "GATEWAY_DB_CONNECTION")]
    pub db_connection: String,

    /// API key identifying the upstream credential set.
    #[arg(long, env = "GATEWAY_API_KEY")]
    pub api_key: String,

    /// Raw private-key material: a PEM for RSA/Ed25519, the plain secret for HMAC.
    #[arg(long, env = "GATEWAY_PRIVATE_KEY_MATERIAL")]
    pub private_key_material: String,

    /// Signing algorithm for `api_key` / `private_key_material`.
    #[arg(long, env = "GATEWAY_SIGNATURE_TYPE", default_value = "ed25519")]
    pub signature_type: String,

    /// Testnet vs. mainnet upstream endpoints.
    #[arg(long, env = "GATEWAY_TESTNET", default_value_t = false)]
    pub testnet: bool,

    /// Interval (seconds) between full account REST snapshots (§4.7).
    #[arg(long, env = "GATEWAY_SNAPSHOT_INTERVAL_S", default_value_t = 300)]
    pub snapshot_interval_s: u64,

    /// Coalescing window (milliseconds) for the reconciliation loop (§4.5).
    #[arg(long, env = "GATEWAY_RECONCILE_WINDOW_MS", default_value_t = 250)]
    pub reconcile_window_ms: u64,

    /// Bounded capacity of each session's outbound frame queue (§4.4).
    #[arg(long, env = "GATEWAY_SESSION_OUTBOUND_CAPACITY", default_value_t = 1024)]
    pub session_outbound_capacity: usize,

    /// Grace period (milliseconds) before a stalled session is treated as a slow consumer.
    #[arg(long, env = "GATEWAY_SLOW_CONSUMER_GRACE_MS", default_value_t = 5000)]
    pub slow_consumer_grace_ms: u64,

    /// Client heartbeat ping interval (seconds).
    #[arg(long, env = "GATEWAY_PING_INTERVAL_S", default_value_t = 20)]
    pub ping_interval_s: u64,

    /// Client heartbeat ping timeout (seconds).
    #[arg(long, env = "GATEWAY_PING_TIMEOUT_S", default_value_t = 60)]
    pub ping_timeout_s: u64,

    /// Number of adapter workers draining the task queue. Defaults to the CPU count.
    #[arg(long, env = "GATEWAY_TASK_WORKER_COUNT")]
    pub task_worker_count: Option<usize>,

    /// Maximum attempts (including the first) before a transient task failure gives up.
    #[arg(long, env = "GATEWAY_TASK_MAX_ATTEMPTS", default_value_t = 3)]
    pub task_max_attempts: i32,

    /// Max Postgres pool connections shared by the registry/task-queue/dispatcher query side.
    #[arg(long, env = "GATEWAY_DB_MAX_CONNECTIONS", default_value_t = 10)]
    pub db_max_connections: u32,
}

impl GatewayConfig {
    pub fn signature_type(&self) -> Result<SignatureType> {
        SignatureType::from_str(&self.signature_type)
            .map_err(|_| InvalidConfig::new("signature_type", "must be one of hmac, rsa, ed25519").into())
    }

    pub fn task_worker_count(&self) -> usize {
        self.task_worker_count.unwrap_or_else(default_task_worker_count)
    }

    /// Builds the teacher's per-surface signed REST config for the spot endpoint family.
    pub fn spot_rest_config(&self) -> Result<BinanceConfig<RestConfig>> {
        let mut builder = BinanceConfig::<RestConfig>::builder()
            .with_credentials(self.api_key.clone(), self.private_key_material.clone())
            .with_signature_type(self.signature_type()?);
        builder = if self.testnet { builder.with_testnet() } else { builder.with_mainnet() };
        if !self.spot_rest_url.is_empty() {
            builder = builder.with_url(self.spot_rest_url.clone());
        }
        builder.build()
    }

    /// Builds the teacher's per-surface signed REST config for the futures endpoint family.
    ///
    /// The wrapped client has no futures REST surface (see `TaskType::GetFuturesAccount`);
    /// this exists so the endpoint is at least configurable for a future adapter.
    pub fn futures_rest_config(&self) -> Result<BinanceConfig<RestConfig>> {
        let mut builder = BinanceConfig::<RestConfig>::builder()
            .with_credentials(self.api_key.clone(), self.private_key_material.clone())
            .with_signature_type(self.signature_type()?);
        builder = if self.testnet { builder.with_testnet() } else { builder.with_mainnet() };
        if !self.futures_rest_url.is_empty() {
            builder = builder.with_url(self.futures_rest_url.clone());
        }
        builder.build()
    }

    /// Builds the teacher's dynamic-mode market-data stream config.
    pub fn market_data_stream_config(&self) -> Result<BinanceConfig<StreamConfig>> {
        let mut builder = BinanceConfig::<StreamConfig>::builder()
            .with_credentials(self.api_key.clone(), self.private_key_material.clone());
        builder = if self.testnet { builder.with_testnet() } else { builder.with_mainnet() };
        if !self.stream_url.is_empty() {
            builder = builder.with_market_data_url(self.stream_url.clone());
        }
        let builder = builder.with_market_data().with_dynamic_streams();
        builder.build()
    }

    /// Builds the teacher's user-data stream config backing the spot account live row.
    pub fn user_data_stream_config(&self) -> Result<BinanceConfig<StreamConfig>> {
        let mut builder = BinanceConfig::<StreamConfig>::builder()
            .with_credentials(self.api_key.clone(), self.private_key_material.clone());
        builder = if self.testnet { builder.with_testnet() } else { builder.with_mainnet() };
        let builder = builder.with_user_data();
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_config() -> GatewayConfig {
        GatewayConfig {
            listen_address: "0.0.0.0:8080".into(),
            spot_rest_url: String::new(),
            futures_rest_url: String::new(),
            stream_url: String::new(),
            db_connection: "postgres://localhost/gateway".into(),
            api_key: "key".into(),
            private_key_material: "secret".into(),
            signature_type: "hmac".into(),
            testnet: true,
            snapshot_interval_s: 300,
            reconcile_window_ms: 250,
            session_outbound_capacity: 1024,
            slow_consumer_grace_ms: 5000,
            ping_interval_s: 20,
            ping_timeout_s: 60,
            task_worker_count: None,
            task_max_attempts: 3,
            db_max_connections: 10,
        }
    }

    #[test]
    fn rejects_unknown_signature_type() {
        let mut config = sample_config();
        config.signature_type = "dsa".into();
        assert!(config.signature_type().is_err());
    }

    #[test]
    fn task_worker_count_falls_back_to_cpu_count_when_unset() {
        let config = sample_config();
        assert!(config.task_worker_count() >= 1);
    }

    #[test]
    fn spot_rest_config_builds_with_hmac_credentials() {
        let config = sample_config();
        let rest = config.spot_rest_config().expect("rest config builds");
        assert!(rest.has_authentication());
    }
}
