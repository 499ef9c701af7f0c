#![allow(unused_variables)]
mod interval;
mod timezone_offset;
mod update_speed;
mod window_size;

mod aggregate_trade_stream_spec;
mod all_mini_tickers_stream_spec;
mod all_rolling_window_tickers_stream_spec;
mod all_tickers_stream_spec;
mod average_price_stream_spec;
mod book_ticker_stream_spec;
mod diff_depth_stream_spec;
mod kline_stream_spec;
mod kline_with_timezone_stream_spec;
mod mini_ticker_stream_spec;
mod partial_book_depth_stream_spec;
mod rolling_window_ticker_stream_spec;
mod ticker_stream_spec;
mod trade_stream_spec;

#[allow(unused_imports)]
pub use aggregate_trade_stream_spec::AggregateTradeStreamSpec;
#[allow(unused_imports)]
pub use all_mini_tickers_stream_spec::AllMiniTickersStreamSpec;
#[allow(unused_imports)]
pub use all_rolling_window_tickers_stream_spec::AllRollingWindowTickersStreamSpec;
#[allow(unused_imports)]
pub use all_tickers_stream_spec::AllTickersStreamSpec;
#[allow(unused_imports)]
pub use average_price_stream_spec::AveragePriceStreamSpec;
#[allow(unused_imports)]
pub use book_ticker_stream_spec::BookTickerStreamSpec;
#[allow(unused_imports)]
pub use diff_depth_stream_spec::DiffDepthStreamSpec;
#[allow(unused_imports)]
pub use interval::Interval;
#[allow(unused_imports)]
pub use kline_stream_spec::KlineStreamSpec;
#[allow(unused_imports)]
pub use kline_with_timezone_stream_spec::KlineWithTimezoneStreamSpec;
#[allow(unused_imports)]
pub use mini_ticker_stream_spec::MiniTickerStreamSpec;
#[allow(unused_imports)]
pub use partial_book_depth_stream_spec::PartialBookDepthStreamSpec;
#[allow(unused_imports)]
pub use rolling_window_ticker_stream_spec::RollingWindowTickerStreamSpec;
#[allow(unused_imports)]
pub use ticker_stream_spec::TickerStreamSpec;
#[allow(unused_imports)]
pub use trade_stream_spec::TradeStreamSpec;
#[allow(unused_imports)]
pub use update_speed::UpdateSpeed;
#[allow(unused_imports)]
pub use window_size::WindowSize;
