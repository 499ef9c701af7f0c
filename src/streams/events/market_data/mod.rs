mod aggregate_trade;
mod average_price;
mod book_ticker;
mod depth;
mod kline;
mod mini_ticker;
mod rolling_window;
mod ticker;
mod trade;

#[allow(unused_imports)]
pub use aggregate_trade::*;
#[allow(unused_imports)]
pub use average_price::*;
#[allow(unused_imports)]
pub use book_ticker::*;
#[allow(unused_imports)]
pub use depth::*;
#[allow(unused_imports)]
pub use kline::*;
#[allow(unused_imports)]
pub use mini_ticker::*;
#[allow(unused_imports)]
pub use rolling_window::*;
#[allow(unused_imports)]
pub use ticker::*;
#[allow(unused_imports)]
pub use trade::*;
