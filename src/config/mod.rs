mod binance_config;
mod gateway_config;
mod rest_config;
mod stream_config;
mod websocket_config;

pub use binance_config::BinanceConfig;
pub use gateway_config::GatewayConfig;
pub use rest_config::RestConfig;
pub use stream_config::{StreamConfig, StreamMode, StreamType};
pub use websocket_config::WebSocketConfig;