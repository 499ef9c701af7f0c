mod common;
mod endpoint;
mod handler;
mod market_data_manager;
mod router;
mod state;
mod types;
mod user_data_manager;
mod websocket;

pub use common::ConnectionManager;
pub use market_data_manager::MarketDataConnectionManager;
pub use types::{ConnectionStatus, StreamMessage, ValueReceiver, ValueSender};
pub use user_data_manager::UserDataConnectionManager;
