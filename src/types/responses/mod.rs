mod account_info;
mod account_trade;
mod aggregate_trade;
mod allocation;
mod average_price;
mod balance;
mod commission_rates;
mod discount_info;
mod exchange_info;
mod fill;
mod kline;
mod order;
mod order_book;
mod order_book_level;
mod prevented_match;
mod rate_limit;
mod server_time;
mod symbol_commission_rates;
mod symbol_info;
mod ticker_book;
mod ticker_price;
mod ticker_statistics;
mod trade;

pub use account_info::*;
pub use account_trade::*;
pub use aggregate_trade::*;
pub use allocation::*;
pub use average_price::*;
pub use balance::*;
pub use commission_rates::*;
pub use discount_info::*;
pub use exchange_info::*;
pub use fill::*;
pub use kline::*;
pub use order::*;
pub use order_book::*;
pub use order_book_level::*;
pub use prevented_match::*;
pub use rate_limit::*;
pub use server_time::*;
pub use symbol_commission_rates::*;
pub use symbol_info::*;
pub use ticker_book::*;
pub use ticker_price::*;
pub use ticker_statistics::*;
pub use trade::*;
