/// Type-state markers for the request specs below: `Unvalidated` fresh off a builder,
/// `Validated` after `build()` has checked its invariants. Only `Validated` specs are
/// accepted by the client trait methods that send a request.
#[derive(Debug, Clone)]
pub struct Unvalidated;

#[derive(Debug, Clone)]
pub struct Validated;

mod aggregate_trades_spec;
mod all_orders_spec;
mod allocation_spec;
mod average_price_spec;
mod commission_rates_spec;
mod exchange_info_spec;
mod historical_trades_spec;
mod klines_spec;
mod my_trades_spec;
mod open_orders_spec;
mod order_book_spec;
mod prevented_matches_spec;
mod query_order_spec;
mod recent_trades_spec;
mod ticker_24hr_spec;
mod ticker_book_spec;
mod ticker_price_spec;
mod ticker_rolling_window_spec;
mod ticker_trading_day_spec;

pub use aggregate_trades_spec::*;
pub use all_orders_spec::*;
pub use allocation_spec::*;
pub use average_price_spec::*;
pub use commission_rates_spec::*;
pub use exchange_info_spec::*;
pub use historical_trades_spec::*;
pub use klines_spec::*;
pub use my_trades_spec::*;
pub use open_orders_spec::*;
pub use order_book_spec::*;
pub use prevented_matches_spec::*;
pub use query_order_spec::*;
pub use recent_trades_spec::*;
pub use ticker_24hr_spec::*;
pub use ticker_book_spec::*;
pub use ticker_price_spec::*;
pub use ticker_rolling_window_spec::*;
pub use ticker_trading_day_spec::*;
