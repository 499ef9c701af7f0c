use chrono::Utc;
use serde_json::Value;
use sqlx::postgres::PgPool;
use sqlx::Row;
use tracing::instrument;
use uuid::Uuid;

use crate::model::{Task, TaskStatus, TaskType};
use crate::Result;

/**
 * SQL-backed implementation of the Task Queue & Router (§4.3): durable
 * `tasks` rows, `FOR UPDATE SKIP LOCKED` claims, and the retry/backoff
 * bookkeeping `abandon` needs.
 */
pub struct TaskStore {
    pool: PgPool,
}

impl TaskStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[instrument(skip(self, payload))]
    pub async fn enqueue(
        &self,
        task_type: TaskType,
        payload: Value,
        origin_session_id: Uuid,
        origin_request_id: &str,
    ) -> Result<Uuid> {
        let task_id: Uuid = sqlx::query_scalar(
            "INSERT INTO tasks (type, payload, status, origin_session_id, origin_request_id) \
             VALUES ($1, $2, 'PENDING', $3, $4) RETURNING task_id",
        )
        .bind(task_type.to_string())
        .bind(payload)
        .bind(origin_session_id)
        .bind(origin_request_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(task_id)
    }

    /// Atomically claims one `PENDING` task of `task_type`, or `None` if the queue is empty.
    #[instrument(skip(self))]
    pub async fn claim(&self, worker_id: &str, task_type: TaskType) -> Result<Option<Task>> {
        let row = sqlx::query(
            "UPDATE tasks SET status = 'CLAIMED', claimed_at = now(), worker_id = $1 \
             WHERE task_id = ( \
                SELECT task_id FROM tasks \
                WHERE status = 'PENDING' AND type = $2 \
                ORDER BY created_at \
                FOR UPDATE SKIP LOCKED \
                LIMIT 1 \
             ) \
             RETURNING task_id, type, payload, status, result, origin_session_id, origin_request_id, \
                       attempts, worker_id, created_at, claimed_at, completed_at",
        )
        .bind(worker_id)
        .bind(task_type.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(row_to_task).transpose()
    }

    #[instrument(skip(self, result))]
    pub async fn complete(&self, task_id: Uuid, result: Value, succeeded: bool) -> Result<()> {
        let status = if succeeded { "SUCCEEDED" } else { "FAILED" };
        sqlx::query("UPDATE tasks SET status = $1, result = $2, completed_at = now() WHERE task_id = $3")
            .bind(status)
            .bind(result)
            .bind(task_id)
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    /// Returns a `CLAIMED` task to `PENDING`, bumping `attempts`; past `max_attempts` it
    /// transitions straight to `FAILED` with `reason` as the terminal result.
    #[instrument(skip(self))]
    pub async fn abandon(&self, task_id: Uuid, reason: &str, max_attempts: i32) -> Result<()> {
        let attempts: i32 =
            sqlx::query_scalar("UPDATE tasks SET attempts = attempts + 1 WHERE task_id = $1 RETURNING attempts")
                .bind(task_id)
                .fetch_one(&self.pool)
                .await?;

        if attempts >= max_attempts {
            sqlx::query(
                "UPDATE tasks SET status = 'FAILED', result = $1, completed_at = now() WHERE task_id = $2",
            )
            .bind(serde_json::json!({ "error": reason, "attempts": attempts }))
            .bind(task_id)
            .execute(&self.pool)
            .await?;
        } else {
            sqlx::query(
                "UPDATE tasks SET status = 'PENDING', claimed_at = NULL, worker_id = NULL WHERE task_id = $1",
            )
            .bind(task_id)
            .execute(&self.pool)
            .await?;
        }
        Ok(())
    }

    /// Fetches a task row by id, for the dispatcher to resolve `task.completed`'s origin.
    #[instrument(skip(self))]
    pub async fn get(&self, task_id: Uuid) -> Result<Option<Task>> {
        let row = sqlx::query(
            "SELECT task_id, type, payload, status, result, origin_session_id, origin_request_id, \
                    attempts, worker_id, created_at, claimed_at, completed_at \
             FROM tasks WHERE task_id = $1",
        )
        .bind(task_id)
        .fetch_optional(&self.pool)
        .await?;
        row.map(row_to_task).transpose()
    }

    /// Sweeps `CLAIMED` tasks claimed longer ago than 3x their type's deadline, abandoning each
    /// as `UPSTREAM_TIMEOUT` — the janitor safety net behind the `task.new` listener.
    #[instrument(skip(self))]
    pub async fn sweep_orphans(&self, max_attempts: i32) -> Result<usize> {
        let claimed: Vec<Task> = sqlx::query(
            "SELECT task_id, type, payload, status, result, origin_session_id, origin_request_id, \
                    attempts, worker_id, created_at, claimed_at, completed_at \
             FROM tasks WHERE status = 'CLAIMED'",
        )
        .fetch_all(&self.pool)
        .await?
        .into_iter()
        .map(row_to_task)
        .collect::<Result<_>>()?;

        let now = Utc::now();
        let mut swept = 0;
        for task in claimed {
            if task.is_orphaned(now) {
                self.abandon(task.task_id, "UPSTREAM_TIMEOUT", max_attempts).await?;
                swept += 1;
            }
        }
        Ok(swept)
    }
}

fn row_to_task(row: sqlx::postgres::PgRow) -> Result<Task> {
    let task_type: String = row.try_get("type")?;
    let status: String = row.try_get("status")?;
    Ok(Task {
        task_id: row.try_get("task_id")?,
        task_type: task_type.parse()?,
        payload: row.try_get("payload")?,
        status: status_from_str(&status)?,
        result: row.try_get("result")?,
        origin_session_id: row.try_get("origin_session_id")?,
        origin_request_id: row.try_get("origin_request_id")?,
        attempts: row.try_get("attempts")?,
        worker_id: row.try_get("worker_id")?,
        created_at: row.try_get("created_at")?,
        claimed_at: row.try_get("claimed_at")?,
        completed_at: row.try_get("completed_at")?,
    })
}

fn status_from_str(s: &str) -> Result<TaskStatus> {
    Ok(match s {
        "PENDING" => TaskStatus::Pending,
        "CLAIMED" => TaskStatus::Claimed,
        "SUCCEEDED" => TaskStatus::Succeeded,
        "FAILED" => TaskStatus::Failed,
        other => return Err(crate::errors::StoreError::malformed("tasks", format!("unknown status '{other}'")).into()),
    })
}
