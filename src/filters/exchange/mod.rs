mod exchange_max_num_algo_orders_filter;
mod exchange_max_num_iceberg_orders_filter;
mod exchange_max_num_orders_filter;

pub use exchange_max_num_algo_orders_filter::*;
pub use exchange_max_num_iceberg_orders_filter::*;
pub use exchange_max_num_orders_filter::*;
