mod iceberg_parts_filter;
mod lot_size_filter;
mod market_lot_size_filter;
mod max_num_algo_orders_filter;
mod max_num_iceberg_orders_filter;
mod max_num_order_amends_filter;
mod max_num_order_lists_filter;
mod max_num_orders_filter;
mod max_position_filter;
mod min_notional_filter;
mod notional_filter;
mod percent_price_by_side_filter;
mod percent_price_filter;
mod price_filter;
mod trailing_delta_filter;

pub use iceberg_parts_filter::*;
pub use lot_size_filter::*;
pub use market_lot_size_filter::*;
pub use max_num_algo_orders_filter::*;
pub use max_num_iceberg_orders_filter::*;
pub use max_num_order_amends_filter::*;
pub use max_num_order_lists_filter::*;
pub use max_num_orders_filter::*;
pub use max_position_filter::*;
pub use min_notional_filter::*;
pub use notional_filter::*;
pub use percent_price_by_side_filter::*;
pub use percent_price_filter::*;
pub use price_filter::*;
pub use trailing_delta_filter::*;
