use tokio::sync::mpsc;
use tracing::{info, instrument, warn};

use crate::gateway::{ErrorCode, ServerFrame, SessionTable};
use crate::model::TaskStatus;
use crate::store::{ChangeNotification, NotificationListener, TaskStore};
use crate::Result;

/// A subscription-delta or full-resync signal forwarded to the Exchange Adapter's
/// reconciliation loop (§4.5).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReconcileSignal {
    Add(String),
    Remove(String),
    /// Forces a full diff against `SubscriptionRegistry::snapshot` — emitted on dispatcher
    /// reconnect and on an explicit `subscription.clean`.
    Clean,
}

/**
 * Change-Event Dispatcher (§4.4): the sole consumer of the store's
 * notification channels. Decodes, classifies, and routes each
 * notification into one of three in-process lanes: session fan-out (live
 * ticks, realtime updates, signal events), the task correlator (task
 * completion routed back to the originating session), and the Exchange
 * Adapter's reconciliation queue (subscription deltas, task wake-ups).
 *
 * `kline_closed` is logged but not forwarded in-process — its consumer is
 * the external signal engine, which `LISTEN`s on the same channel
 * directly. `alert_config.*` notifications fan out to `SIGNAL:{id}`
 * subscribers in addition to that external consumer.
 */
pub struct ChangeEventDispatcher {
    listener: NotificationListener,
    sessions: SessionTable,
    tasks: TaskStore,
    reconcile_tx: mpsc::Sender<ReconcileSignal>,
    task_wake_tx: mpsc::Sender<()>,
}

impl ChangeEventDispatcher {
    pub fn new(
        listener: NotificationListener,
        sessions: SessionTable,
        tasks: TaskStore,
        reconcile_tx: mpsc::Sender<ReconcileSignal>,
        task_wake_tx: mpsc::Sender<()>,
    ) -> Self {
        Self { listener, sessions, tasks, reconcile_tx, task_wake_tx }
    }

    /// Runs the dispatch loop until the listener is shut down (it never returns `Err` for
    /// transient channel loss — that's absorbed by `NotificationListener::recv`'s reconnect).
    #[instrument(skip(self))]
    pub async fn run(&mut self) -> Result<()> {
        loop {
            let notification = self.listener.recv().await?;
            if let Err(err) = self.dispatch(notification).await {
                warn!(error = %err, "failed to route notification");
            }
        }
    }

    async fn dispatch(&self, notification: ChangeNotification) -> Result<()> {
        match notification {
            ChangeNotification::KlineLive { key, payload, is_closed } => {
                let mut data = payload;
                if let Some(object) = data.as_object_mut() {
                    object.insert("is_closed".to_string(), serde_json::json!(is_closed));
                }
                self.sessions
                    .fanout(key.as_canonical(), ServerFrame::update(now_millis(), data))
                    .await;
            }
            ChangeNotification::RealtimeUpdate { key, payload } => {
                self.sessions.fanout(key.as_canonical(), ServerFrame::update(now_millis(), payload)).await;
            }
            ChangeNotification::KlineClosed { .. } => {
                // Consumed directly by the external signal engine; nothing to route here.
            }
            ChangeNotification::SubscriptionAdd { key } => {
                let _ = self.reconcile_tx.send(ReconcileSignal::Add(key.as_canonical().to_string())).await;
            }
            ChangeNotification::SubscriptionRemove { key } => {
                let _ = self.reconcile_tx.send(ReconcileSignal::Remove(key.as_canonical().to_string())).await;
            }
            ChangeNotification::SubscriptionClean => {
                info!("forwarding full-resync signal to exchange adapter");
                let _ = self.reconcile_tx.send(ReconcileSignal::Clean).await;
            }
            ChangeNotification::TaskNew { .. } => {
                let _ = self.task_wake_tx.send(()).await;
            }
            ChangeNotification::TaskCompleted { task_id } => {
                self.route_task_completion(task_id).await?;
            }
            ChangeNotification::AlertConfigNew { alert_id } => {
                self.fanout_alert_config(alert_id, "created").await;
            }
            ChangeNotification::AlertConfigUpdate { alert_id } => {
                self.fanout_alert_config(alert_id, "updated").await;
            }
            ChangeNotification::AlertConfigDelete { alert_id } => {
                self.fanout_alert_config(alert_id, "deleted").await;
            }
            ChangeNotification::SignalNew { alert_id, signal_id } => {
                let key = format!("SIGNAL:{alert_id}");
                let data = serde_json::json!({ "alert_id": alert_id, "signal_id": signal_id });
                self.sessions.fanout(&key, ServerFrame::update(now_millis(), data)).await;
            }
        }
        Ok(())
    }

    async fn fanout_alert_config(&self, alert_id: uuid::Uuid, action: &str) {
        let key = format!("SIGNAL:{alert_id}");
        let data = serde_json::json!({ "alert_id": alert_id, "action": action });
        self.sessions.fanout(&key, ServerFrame::update(now_millis(), data)).await;
    }

    async fn route_task_completion(&self, task_id: uuid::Uuid) -> Result<()> {
        let Some(task) = self.tasks.get(task_id).await? else {
            warn!(%task_id, "task.completed notification for unknown task");
            return Ok(());
        };

        if !task.status.is_terminal() {
            return Ok(());
        }

        let now = now_millis();
        let frame = match task.status {
            TaskStatus::Succeeded => {
                ServerFrame::success(&task.origin_request_id, now, task.result.unwrap_or(serde_json::json!(null)))
            }
            TaskStatus::Failed => {
                let message = task
                    .result
                    .as_ref()
                    .and_then(|r| r.get("error"))
                    .and_then(|e| e.as_str())
                    .unwrap_or("task failed")
                    .to_string();
                ServerFrame::error(&task.origin_request_id, now, ErrorCode::Upstream, message)
            }
            _ => return Ok(()),
        };

        self.sessions.deliver(task.origin_session_id, frame).await;
        Ok(())
    }
}

fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reconcile_signal_equality_distinguishes_add_and_remove() {
        assert_ne!(ReconcileSignal::Add("A".into()), ReconcileSignal::Remove("A".into()));
        assert_eq!(ReconcileSignal::Clean, ReconcileSignal::Clean);
    }
}
