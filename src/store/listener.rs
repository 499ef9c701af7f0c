use anyhow::Context;
use sqlx::postgres::{PgListener, PgPool};
use tracing::{info, instrument, warn};

use crate::store::notification::{ChangeNotification, ALL_CHANNELS};
use crate::Result;

/**
 * Wraps a dedicated `PgListener` connection subscribed to every channel the
 * Change-Event Dispatcher must consume. `recv` reconnects transparently on
 * connection loss and synthesizes a [`ChangeNotification::SubscriptionClean`]
 * on the first successful reconnect, forcing downstream consumers to fall
 * back to a state-based resync (notifications are not durable across a
 * dispatcher restart).
 */
pub struct NotificationListener {
    pool: PgPool,
    inner: PgListener,
}

impl NotificationListener {
    #[instrument(skip(pool))]
    pub async fn connect(pool: &PgPool) -> Result<Self> {
        let mut inner = PgListener::connect_with(pool)
            .await
            .context("failed to open notification listener connection")?;
        inner
            .listen_all(ALL_CHANNELS.iter().copied())
            .await
            .context("failed to LISTEN on coordination channels")?;

        Ok(Self { pool: pool.clone(), inner })
    }

    /**
     * Awaits the next notification, reconnecting (with a forced
     * `subscription.clean`) on channel loss. Never returns `Ok` for a
     * notification it fails to decode — malformed payloads are logged and
     * skipped so one bad row doesn't wedge the dispatcher loop.
     */
    #[instrument(skip(self))]
    pub async fn recv(&mut self) -> Result<ChangeNotification> {
        loop {
            match self.inner.try_recv().await {
                Ok(Some(notification)) => {
                    match ChangeNotification::decode(notification.channel(), notification.payload()) {
                        Ok(decoded) => return Ok(decoded),
                        Err(err) => {
                            warn!(channel = notification.channel(), error = %err, "dropping malformed notification");
                            continue;
                        }
                    }
                }
                Ok(None) => {
                    warn!("notification channel closed, reconnecting");
                    self.reconnect().await?;
                    return Ok(ChangeNotification::SubscriptionClean);
                }
                Err(err) => {
                    warn!(error = %err, "notification channel error, reconnecting");
                    self.reconnect().await?;
                    return Ok(ChangeNotification::SubscriptionClean);
                }
            }
        }
    }

    async fn reconnect(&mut self) -> Result<()> {
        let mut inner = PgListener::connect_with(&self.pool)
            .await
            .context("failed to reconnect notification listener")?;
        inner
            .listen_all(ALL_CHANNELS.iter().copied())
            .await
            .context("failed to re-LISTEN on coordination channels after reconnect")?;
        self.inner = inner;
        info!("notification listener reconnected");
        Ok(())
    }
}
