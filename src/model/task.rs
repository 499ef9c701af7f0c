use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

use crate::errors::InvalidParameter;
use crate::Result;

/// Kind of one-shot work an adapter worker can execute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskType {
    FetchHistory,
    ResolveSymbol,
    FetchExchangeInfo,
    GetSpotAccount,
    GetFuturesAccount,
}

impl TaskType {
    /// Soft deadline before a claimed task is eligible for orphan abandonment (at 3x this).
    pub fn deadline(&self) -> std::time::Duration {
        use std::time::Duration;
        match self {
            Self::FetchHistory => Duration::from_secs(30),
            Self::ResolveSymbol => Duration::from_secs(10),
            Self::GetSpotAccount | Self::GetFuturesAccount => Duration::from_secs(10),
            Self::FetchExchangeInfo => Duration::from_secs(120),
        }
    }

    fn as_str(&self) -> &'static str {
        match self {
            Self::FetchHistory => "FETCH_HISTORY",
            Self::ResolveSymbol => "RESOLVE_SYMBOL",
            Self::FetchExchangeInfo => "FETCH_EXCHANGE_INFO",
            Self::GetSpotAccount => "GET_SPOT_ACCOUNT",
            Self::GetFuturesAccount => "GET_FUTURES_ACCOUNT",
        }
    }
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskType {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "FETCH_HISTORY" => Ok(Self::FetchHistory),
            "RESOLVE_SYMBOL" => Ok(Self::ResolveSymbol),
            "FETCH_EXCHANGE_INFO" => Ok(Self::FetchExchangeInfo),
            "GET_SPOT_ACCOUNT" => Ok(Self::GetSpotAccount),
            "GET_FUTURES_ACCOUNT" => Ok(Self::GetFuturesAccount),
            other => Err(InvalidParameter::new("task_type", format!("unknown task type '{other}'")).into()),
        }
    }
}

/// Lifecycle status of a [`Task`] row. Transitions: `Pending -> Claimed -> {Succeeded, Failed}`,
/// with `Claimed -> Pending` on abandonment (retried) until `max_attempts` is exhausted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    Pending,
    Claimed,
    Succeeded,
    Failed,
}

impl TaskStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Succeeded | Self::Failed)
    }
}

/**
 * A one-shot unit of work routed through the task queue: history fetch,
 * symbol resolution, exchange-metadata refresh, or an authenticated
 * account snapshot. Claimed by exactly one adapter worker at a time under
 * a row-level lock; see [`crate::tasks::TaskQueue::claim`].
 */
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub task_id: Uuid,
    pub task_type: TaskType,
    pub payload: Value,
    pub status: TaskStatus,
    pub result: Option<Value>,
    pub origin_session_id: Uuid,
    pub origin_request_id: String,
    pub attempts: i32,
    pub worker_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub claimed_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Whether a `Claimed` task has outlived 3x its type's soft deadline and is an orphan.
    pub fn is_orphaned(&self, now: DateTime<Utc>) -> bool {
        let Some(claimed_at) = self.claimed_at else {
            return false;
        };
        if self.status != TaskStatus::Claimed {
            return false;
        }
        let orphan_after = self.task_type.deadline() * 3;
        (now - claimed_at).to_std().map(|age| age > orphan_after).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration as ChronoDuration;

    fn base_task(status: TaskStatus, claimed_at: Option<DateTime<Utc>>) -> Task {
        Task {
            task_id: Uuid::new_v4(),
            task_type: TaskType::ResolveSymbol,
            payload: serde_json::json!({}),
            status,
            result: None,
            origin_session_id: Uuid::new_v4(),
            origin_request_id: "r1".to_string(),
            attempts: 1,
            worker_id: Some("w1".to_string()),
            created_at: Utc::now(),
            claimed_at,
            completed_at: None,
        }
    }

    #[test]
    fn pending_task_is_never_orphaned() {
        let task = base_task(TaskStatus::Pending, None);
        assert!(!task.is_orphaned(Utc::now()));
    }

    #[test]
    fn claimed_task_past_triple_deadline_is_orphaned() {
        // ResolveSymbol deadline is 10s, so the orphan threshold is 30s.
        let claimed_at = Utc::now() - ChronoDuration::seconds(20);
        let task = base_task(TaskStatus::Claimed, Some(claimed_at));
        assert!(!task.is_orphaned(Utc::now()));

        let claimed_at = Utc::now() - ChronoDuration::seconds(31);
        let task = base_task(TaskStatus::Claimed, Some(claimed_at));
        assert!(task.is_orphaned(Utc::now()));
    }

    #[test]
    fn task_type_round_trips_through_display() {
        assert_eq!("GET_SPOT_ACCOUNT".parse::<TaskType>().unwrap(), TaskType::GetSpotAccount);
        assert_eq!(TaskType::FetchExchangeInfo.to_string(), "FETCH_EXCHANGE_INFO");
    }

    #[test]
    fn terminal_statuses_are_succeeded_or_failed() {
        assert!(TaskStatus::Succeeded.is_terminal());
        assert!(TaskStatus::Failed.is_terminal());
        assert!(!TaskStatus::Claimed.is_terminal());
    }
}
