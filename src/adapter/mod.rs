mod account_stream;
mod binance_commander;
mod connection_state;
mod reconcile;
mod task_executor;
mod workers;

pub use account_stream::{
    run_account_delta_loop, AccountDelta, AccountDeltaSource, AccountSnapshotSource,
    AccountStreamManager, BinanceAccountSnapshotSource,
};
pub use binance_commander::BinanceMarketDataCommander;
pub use connection_state::AdapterConnectionState;
pub use reconcile::{run_reconcile_loop, ReconcilePlan, Reconciler, UpstreamCommander};
pub use task_executor::BinanceTaskExecutor;
pub use workers::{TaskExecutor, TaskOutcome, WorkerPool};
