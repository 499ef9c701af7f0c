use std::time::Duration;

use serde_json::Value;
use tokio::time::sleep;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::model::{Task, TaskType};
use crate::store::TaskStore;
use crate::Result;

/// Whether a task failure should retry (with backoff) or fail terminally, per §4.3.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Network blip, rate limit: abandon with exponential backoff.
    Transient,
    /// Bad symbol, auth rejection: complete FAILED immediately, no retry.
    Permanent,
}

/**
 * Task Queue & Router (§4.3): durable one-shot work with exactly-one claim
 * semantics, backed by [`crate::store::TaskStore`]'s row-locking `claim`.
 * Owns the retry/backoff policy and the orphan janitor; claim/complete
 * themselves are pure passthroughs to the store, since the locking
 * guarantee is a property of the SQL, not of this layer.
 */
pub struct TaskQueue {
    store: TaskStore,
    max_attempts: i32,
}

impl TaskQueue {
    pub fn new(store: TaskStore, max_attempts: i32) -> Self {
        Self { store, max_attempts }
    }

    #[instrument(skip(self, payload))]
    pub async fn enqueue(
        &self,
        task_type: TaskType,
        payload: Value,
        origin_session_id: Uuid,
        origin_request_id: &str,
    ) -> Result<Uuid> {
        self.store.enqueue(task_type, payload, origin_session_id, origin_request_id).await
    }

    #[instrument(skip(self))]
    pub async fn claim(&self, worker_id: &str, task_type: TaskType) -> Result<Option<Task>> {
        self.store.claim(worker_id, task_type).await
    }

    #[instrument(skip(self, result))]
    pub async fn complete(&self, task_id: Uuid, result: Value) -> Result<()> {
        self.store.complete(task_id, result, true).await
    }

    /**
     * Reports a failed task execution. `Transient` failures are abandoned
     * back to `PENDING` with exponential backoff (sleeping the calling
     * worker before returning, since a worker that just failed a task is
     * the right place to throttle its own retry loop); `Permanent`
     * failures complete the task as `FAILED` immediately, bypassing the
     * retry counter.
     */
    #[instrument(skip(self))]
    pub async fn fail(&self, task: &Task, kind: FailureKind, reason: &str) -> Result<()> {
        match kind {
            FailureKind::Permanent => {
                self.store
                    .complete(task.task_id, serde_json::json!({ "error": reason }), false)
                    .await
            }
            FailureKind::Transient => {
                self.store.abandon(task.task_id, reason, self.max_attempts).await?;
                let backoff = backoff_delay(task.attempts);
                warn!(task_id = %task.task_id, attempt = task.attempts, delay_ms = backoff.as_millis() as u64, reason, "retrying task after backoff");
                sleep(backoff).await;
                Ok(())
            }
        }
    }

    /// Sweeps orphaned `CLAIMED` tasks (claimed > 3x their type's deadline) back to retry or
    /// terminal failure. Run periodically as the safety net behind the `task.new` listener.
    #[instrument(skip(self))]
    pub async fn sweep_orphans(&self) -> Result<usize> {
        let swept = self.store.sweep_orphans(self.max_attempts).await?;
        if swept > 0 {
            info!(count = swept, "swept orphaned tasks");
        }
        Ok(swept)
    }
}

/// Exponential backoff (1s, 4s, 16s, ...) capped at 30s, per §4.3's retry policy.
fn backoff_delay(attempts: i32) -> Duration {
    let exponent = attempts.max(1).min(10) as u32 - 1;
    let seconds = 1u64.saturating_mul(4u64.saturating_pow(exponent));
    Duration::from_secs(seconds.min(30))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backoff_grows_exponentially_and_caps_at_thirty_seconds() {
        assert_eq!(backoff_delay(1), Duration::from_secs(1));
        assert_eq!(backoff_delay(2), Duration::from_secs(4));
        assert_eq!(backoff_delay(3), Duration::from_secs(16));
        assert_eq!(backoff_delay(4), Duration::from_secs(30));
        assert_eq!(backoff_delay(10), Duration::from_secs(30));
    }
}
