pub mod market_data;
#[allow(clippy::module_inception)]
mod r#trait;
pub mod user_data;

pub use market_data::*;
pub use r#trait::StreamSpec;
pub use user_data::UserDataStreamSpec;
