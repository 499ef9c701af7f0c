use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use tokio::sync::mpsc;
use tokio::time::interval;
use tracing::{info, instrument, warn};

use crate::model::{Task, TaskType};
use crate::tasks::{FailureKind, TaskQueue};
use crate::Result;

/// All task types an adapter worker is willing to claim, in no particular priority order.
const CLAIMABLE_TYPES: &[TaskType] = &[
    TaskType::FetchHistory,
    TaskType::ResolveSymbol,
    TaskType::FetchExchangeInfo,
    TaskType::GetSpotAccount,
    TaskType::GetFuturesAccount,
];

/// Outcome of executing one task's REST call against the upstream exchange.
pub enum TaskOutcome {
    Success(Value),
    Failure { kind: FailureKind, reason: String },
}

/**
 * Executes the REST call a claimed [`Task`] represents. One implementation
 * per task family, composed over the teacher's signed/public REST clients;
 * kept as a trait so the worker pool's claim/retry bookkeeping stays
 * independent of which exchange endpoint actually answers a given
 * `TaskType`.
 */
#[async_trait::async_trait]
pub trait TaskExecutor: Send + Sync {
    async fn execute(&self, task: &Task) -> TaskOutcome;
}

/**
 * Pool of adapter workers (§4.5): each worker loops claiming one task at a
 * time across every claimable type, executes it via the injected
 * [`TaskExecutor`], and writes the result back. Woken by the dispatcher's
 * `task.new` forwarding, with a periodic poll as the safety net the spec
 * calls for independent of notification delivery.
 */
pub struct WorkerPool {
    tasks: Arc<TaskQueue>,
    executor: Arc<dyn TaskExecutor>,
    worker_count: usize,
    poll_interval: Duration,
}

impl WorkerPool {
    pub fn new(tasks: Arc<TaskQueue>, executor: Arc<dyn TaskExecutor>, worker_count: usize, poll_interval: Duration) -> Self {
        Self { tasks, executor, worker_count, poll_interval }
    }

    /// Spawns `worker_count` workers sharing one wake channel; returns their join handles.
    pub fn spawn(self: Arc<Self>, wake_rx: mpsc::Receiver<()>) -> Vec<tokio::task::JoinHandle<()>> {
        let wake_rx = Arc::new(tokio::sync::Mutex::new(wake_rx));
        (0..self.worker_count)
            .map(|index| {
                let pool = self.clone();
                let wake_rx = wake_rx.clone();
                tokio::spawn(async move { pool.run_worker(format!("worker-{index}"), wake_rx).await })
            })
            .collect()
    }

    #[instrument(skip(self, wake_rx), fields(worker_id = %worker_id))]
    async fn run_worker(&self, worker_id: String, wake_rx: Arc<tokio::sync::Mutex<mpsc::Receiver<()>>>) {
        let mut ticker = interval(self.poll_interval);
        loop {
            tokio::select! {
                woken = async {
                    let mut rx = wake_rx.lock().await;
                    rx.recv().await
                } => {
                    if woken.is_none() {
                        return;
                    }
                }
                _ = ticker.tick() => {}
            }

            if let Err(err) = self.drain_claimable(&worker_id).await {
                warn!(error = %err, "worker iteration failed");
            }
        }
    }

    async fn drain_claimable(&self, worker_id: &str) -> Result<()> {
        loop {
            let mut claimed_any = false;
            for task_type in CLAIMABLE_TYPES {
                let Some(task) = self.tasks.claim(worker_id, *task_type).await? else {
                    continue;
                };
                claimed_any = true;
                self.execute_one(task).await?;
            }
            if !claimed_any {
                return Ok(());
            }
        }
    }

    async fn execute_one(&self, task: Task) -> Result<()> {
        match self.executor.execute(&task).await {
            TaskOutcome::Success(result) => {
                info!(task_id = %task.task_id, task_type = %task.task_type, "task completed");
                self.tasks.complete(task.task_id, result).await
            }
            TaskOutcome::Failure { kind, reason } => self.tasks.fail(&task, kind, &reason).await,
        }
    }
}
