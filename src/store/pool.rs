use std::time::Duration;

use anyhow::Context;
use sqlx::postgres::{PgPool, PgPoolOptions};
use tracing::{info, instrument};

use crate::Result;

/**
 * Opens the Postgres connection pool backing the coordination substrate.
 *
 * Pool sizing is deliberately small: the store is not a high-throughput
 * OLTP workload here, it's a small number of long-lived executors (the
 * registry, the task queue, the dispatcher's query side) sharing a pool
 * while the dispatcher's LISTEN side holds its own dedicated connection
 * (see [`crate::store::NotificationListener`]).
 */
#[instrument(skip(database_url))]
pub async fn connect(database_url: &str, max_connections: u32) -> Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(Duration::from_secs(10))
        .connect(database_url)
        .await
        .context("failed to connect to the coordination database")?;

    info!(max_connections, "connected to coordination database");
    Ok(pool)
}

/// Runs the embedded schema migrations, idempotently.
#[instrument(skip(pool))]
pub async fn run_migrations(pool: &PgPool) -> Result<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .context("failed to run schema migrations")?;
    Ok(())
}
