/**
 * Gateway binary: wires the coordination substrate (Postgres pool,
 * migrations, LISTEN/NOTIFY listener) to the Subscription Registry, Task
 * Queue, Change-Event Dispatcher, Exchange Adapter, and Client Gateway, then
 * supervises the resulting set of long-running loops until a clean shutdown
 * signal or a fatal failure, per spec.md §6's exit-code contract.
 */
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use binance_gateway::adapter::{
    run_account_delta_loop, run_reconcile_loop, AccountStreamManager, BinanceAccountSnapshotSource,
    BinanceMarketDataCommander, BinanceTaskExecutor, UpstreamCommander, WorkerPool,
};
use binance_gateway::BinanceSpotClient;
use binance_gateway::dispatcher::{ChangeEventDispatcher, ReconcileSignal};
use binance_gateway::gateway::{router, serve, GatewayHandlers, SessionPolicy, SessionTable};
use binance_gateway::model::Exchange;
use binance_gateway::registry::SubscriptionRegistry;
use binance_gateway::store::{connect, run_migrations, ExchangeInfoStore, LiveStore, NotificationListener, RegistryStore, TaskStore};
use binance_gateway::streams::BinanceSpotStreamClient;
use binance_gateway::tasks::TaskQueue;
use binance_gateway::GatewayConfig;
use clap::Parser;
use futures::stream::FuturesUnordered;
use futures::{future::BoxFuture, FutureExt, StreamExt};
use tokio::sync::{mpsc, Mutex};
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

/// Orphan-task sweep cadence. Not spec-configurable: it's a safety net behind the
/// `task.new` listener, not a tunable the client protocol ever needs to touch.
const ORPHAN_SWEEP_INTERVAL: Duration = Duration::from_secs(30);
/// Worker poll cadence behind the `task.new` wake channel, same rationale as above.
const WORKER_POLL_INTERVAL: Duration = Duration::from_secs(5);

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();
    install_panic_hook();

    let config = match GatewayConfig::try_parse() {
        Ok(config) => config,
        Err(err) => {
            let _ = err.print();
            return ExitCode::from(1);
        }
    };

    match run(config).await {
        Ok(()) => ExitCode::from(0),
        Err(Fatal::Config(err)) => {
            error!(error = %err, "fatal configuration error");
            ExitCode::from(1)
        }
        Err(Fatal::Store(err)) => {
            error!(error = %err, "unrecoverable store connectivity loss");
            ExitCode::from(2)
        }
        Err(Fatal::Panic(name)) => {
            error!(task = name, "a supervised task panicked");
            ExitCode::from(64)
        }
    }
}

enum Fatal {
    Config(anyhow::Error),
    Store(anyhow::Error),
    Panic(&'static str),
}

async fn run(config: GatewayConfig) -> Result<(), Fatal> {
    let pool = connect(&config.db_connection, config.db_max_connections)
        .await
        .map_err(Fatal::Store)?;
    run_migrations(&pool).await.map_err(Fatal::Store)?;

    let registry = Arc::new(SubscriptionRegistry::new(RegistryStore::new(pool.clone())));
    let task_queue = Arc::new(TaskQueue::new(TaskStore::new(pool.clone()), config.task_max_attempts));
    let live_store = LiveStore::new(pool.clone());
    let exchange_info_store = ExchangeInfoStore::new(pool.clone());

    // `BinanceSpotRestClient` itself isn't nameable outside `crate::clients::rest` (its
    // module is private there); the constructor function is the only public surface, so
    // the client is held purely behind the `BinanceSpotClient` trait object from here on.
    let spot_client: Arc<dyn BinanceSpotClient + Send + Sync> =
        Arc::new(binance_gateway::rest::client(config.spot_rest_config().map_err(Fatal::Config)?).map_err(Fatal::Config)?);

    let task_executor = Arc::new(BinanceTaskExecutor::new(spot_client.clone(), live_store.clone(), exchange_info_store));
    let worker_pool = Arc::new(WorkerPool::new(task_queue.clone(), task_executor, config.task_worker_count(), WORKER_POLL_INTERVAL));
    let (task_wake_tx, task_wake_rx) = mpsc::channel(64);
    let worker_handles = worker_pool.spawn(task_wake_rx);

    let sessions = SessionTable::new(config.session_outbound_capacity);
    let gateway_handlers = Arc::new(GatewayHandlers::new(sessions.clone(), registry.clone(), task_queue.clone()));

    let listener = NotificationListener::connect(&pool).await.map_err(Fatal::Store)?;
    let (reconcile_tx, reconcile_rx) = mpsc::channel(256);
    // Pre-existing registry rows never produce a delta notification of their own, so the
    // adapter needs one full resync kicked off before it starts trusting incremental
    // `subscription.add`/`subscription.remove` deltas.
    reconcile_tx.try_send(ReconcileSignal::Clean).expect("fresh channel has capacity for the startup signal");
    let mut dispatcher = ChangeEventDispatcher::new(
        listener,
        sessions.clone(),
        TaskStore::new(pool.clone()),
        reconcile_tx,
        task_wake_tx,
    );

    let market_data_client =
        BinanceSpotStreamClient::new(config.market_data_stream_config().map_err(Fatal::Config)?).map_err(Fatal::Config)?;
    let commander: Arc<dyn UpstreamCommander> =
        Arc::new(BinanceMarketDataCommander::new(market_data_client, live_store.clone()));

    let account_snapshot_source = Box::new(BinanceAccountSnapshotSource::new(spot_client.clone()));
    let mut account_manager = AccountStreamManager::new(
        Exchange::BinanceSpot,
        live_store,
        account_snapshot_source,
        Duration::from_secs(config.snapshot_interval_s),
    )
    .map_err(Fatal::Config)?;
    if let Err(err) = account_manager.initialize().await {
        warn!(error = %err, "initial account snapshot failed, relying on the refresh loop to recover");
    }
    let account_manager = Arc::new(Mutex::new(account_manager));

    let user_data_stream_config = config.user_data_stream_config().map_err(Fatal::Config)?;
    let reconcile_window = Duration::from_millis(config.reconcile_window_ms);
    let policy = SessionPolicy {
        ping_interval: Duration::from_secs(config.ping_interval_s),
        ping_timeout: Duration::from_secs(config.ping_timeout_s),
        slow_consumer_grace: Duration::from_millis(config.slow_consumer_grace_ms),
    };
    let router = router(sessions, gateway_handlers, policy);
    let listen_address = config.listen_address.clone();

    let mut supervised: FuturesUnordered<BoxFuture<'static, (&'static str, Outcome)>> = FuturesUnordered::new();

    supervised.push(supervise("dispatcher", tokio::spawn(async move { dispatcher.run().await })).boxed());
    supervised.push(
        supervise(
            "reconcile",
            tokio::spawn(async move { run_reconcile_loop(reconcile_rx, registry, commander, reconcile_window).await }),
        )
        .boxed(),
    );
    supervised.push(
        supervise(
            "account-delta",
            tokio::spawn(run_account_delta_loop(account_manager.clone(), user_data_stream_config)),
        )
        .boxed(),
    );
    let snapshot_interval = Duration::from_secs(config.snapshot_interval_s);
    supervised.push(
        supervise("account-snapshot", tokio::spawn(run_account_snapshot_loop(account_manager, snapshot_interval))).boxed(),
    );
    supervised.push(supervise("orphan-sweep", tokio::spawn(run_orphan_sweep_loop(task_queue))).boxed());
    supervised.push(supervise("client-gateway", tokio::spawn(async move { serve(&listen_address, router).await })).boxed());
    for handle in worker_handles {
        supervised.push(supervise_unit("task-worker", handle).boxed());
    }

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("shutdown signal received, exiting cleanly");
            Ok(())
        }
        Some((name, outcome)) = supervised.next() => {
            match outcome {
                Outcome::Panicked => Err(Fatal::Panic(name)),
                Outcome::Failed(err) => Err(Fatal::Store(err.context(format!("{name} loop exited with an error")))),
                Outcome::Exited => Err(Fatal::Store(anyhow::anyhow!("{name} loop exited unexpectedly"))),
            }
        }
    }
}

enum Outcome {
    Exited,
    Failed(anyhow::Error),
    Panicked,
}

async fn supervise(name: &'static str, handle: JoinHandle<binance_gateway::Result<()>>) -> (&'static str, Outcome) {
    match handle.await {
        Ok(Ok(())) => (name, Outcome::Exited),
        Ok(Err(err)) => (name, Outcome::Failed(err)),
        Err(join_err) if join_err.is_panic() => (name, Outcome::Panicked),
        Err(join_err) => (name, Outcome::Failed(anyhow::anyhow!(join_err))),
    }
}

async fn supervise_unit(name: &'static str, handle: JoinHandle<()>) -> (&'static str, Outcome) {
    match handle.await {
        Ok(()) => (name, Outcome::Exited),
        Err(join_err) if join_err.is_panic() => (name, Outcome::Panicked),
        Err(join_err) => (name, Outcome::Failed(anyhow::anyhow!(join_err))),
    }
}

/// Drives `AccountStreamManager::refresh_snapshot` on `snapshot_interval`. Locks the
/// manager only for the duration of a single refresh so it never blocks the
/// concurrently running incremental-delta loop for longer than one REST round trip.
async fn run_account_snapshot_loop(manager: Arc<Mutex<AccountStreamManager>>, snapshot_interval: Duration) -> binance_gateway::Result<()> {
    let mut ticker = tokio::time::interval(snapshot_interval);
    loop {
        ticker.tick().await;
        if let Err(err) = manager.lock().await.refresh_snapshot().await {
            warn!(error = %err, "periodic account snapshot refresh failed");
        }
    }
}

async fn run_orphan_sweep_loop(tasks: Arc<TaskQueue>) -> binance_gateway::Result<()> {
    let mut ticker = tokio::time::interval(ORPHAN_SWEEP_INTERVAL);
    loop {
        ticker.tick().await;
        if let Err(err) = tasks.sweep_orphans().await {
            warn!(error = %err, "orphan task sweep failed");
        }
    }
}

fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .json()
        .init();
}

fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        error!(%info, "panic in a supervised task");
        default_hook(info);
    }));
}
