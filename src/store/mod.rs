/**
 * The coordination substrate: a Postgres pool, the LISTEN/NOTIFY listener
 * wrapper, and the row contracts each upstream component reads/writes
 * (subscriptions, tasks, live/archived bars). Row-level triggers that turn
 * writes into channel notifications live in `migrations/0001_init.sql`, not
 * in Rust — this module is the client side of that contract.
 */
mod exchange_info_store;
mod listener;
mod live_store;
mod notification;
mod pool;
mod registry_store;
mod task_store;

pub use exchange_info_store::ExchangeInfoStore;
pub use listener::NotificationListener;
pub use live_store::{HistoryBar, LiveStore};
pub use notification::{ChangeNotification, ALL_CHANNELS};
pub use pool::{connect, run_migrations};
pub use registry_store::{RefCountTransition, RegistryStore};
pub use task_store::TaskStore;
