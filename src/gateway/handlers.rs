use std::sync::Arc;

use chrono::Utc;
use serde_json::Value;
use tracing::{instrument, warn};
use uuid::Uuid;

use crate::gateway::protocol::{ClientRequest, DataType, ErrorCode, RequestAction, ServerFrame};
use crate::gateway::session_table::SessionTable;
use crate::model::{SubscriptionKey, TaskType};
use crate::registry::SubscriptionRegistry;
use crate::tasks::TaskQueue;

fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Maps a one-shot `data.type` to the task it enqueues, or `None` for control/local reads.
fn task_type_for(data_type: DataType) -> Option<TaskType> {
    match data_type {
        DataType::Klines => Some(TaskType::FetchHistory),
        DataType::ResolveSymbol | DataType::SearchSymbols => Some(TaskType::ResolveSymbol),
        DataType::GetSpotAccount => Some(TaskType::GetSpotAccount),
        DataType::GetFuturesAccount => Some(TaskType::GetFuturesAccount),
        _ => None,
    }
}

/**
 * The four request handlers of §4.1: control/local reads, one-shot get
 * (task-backed), subscribe, unsubscribe. Every path sends `ack` before this
 * is even invoked (see [`crate::gateway::server`]); this returns the
 * eventual `success`/`error` frame for handlers that resolve synchronously,
 * or `None` when the result will arrive later via a `task.completed`
 * notification routed by [`crate::dispatcher`].
 */
pub struct GatewayHandlers {
    sessions: SessionTable,
    registry: Arc<SubscriptionRegistry>,
    tasks: Arc<TaskQueue>,
}

impl GatewayHandlers {
    pub fn new(sessions: SessionTable, registry: Arc<SubscriptionRegistry>, tasks: Arc<TaskQueue>) -> Self {
        Self { sessions, registry, tasks }
    }

    #[instrument(skip(self, request))]
    pub async fn handle(&self, session_id: Uuid, request: ClientRequest) {
        let now = now_millis();
        self.sessions.deliver(session_id, ServerFrame::ack(request.request_id.clone(), now)).await;

        let response = match request.action {
            RequestAction::Get => self.handle_get(session_id, &request, now).await,
            RequestAction::Subscribe => self.handle_subscribe(session_id, &request, now).await,
            RequestAction::Unsubscribe => self.handle_unsubscribe(session_id, &request, now).await,
        };

        if let Some(frame) = response {
            self.sessions.deliver(session_id, frame).await;
        }
    }

    async fn handle_get(&self, session_id: Uuid, request: &ClientRequest, now: i64) -> Option<ServerFrame> {
        let data_type = request.data.data_type;

        if let Some(frame) = self.answer_locally(session_id, &request.request_id, data_type, now).await {
            return Some(frame);
        }

        let Some(task_type) = task_type_for(data_type) else {
            return Some(ServerFrame::error(
                &request.request_id,
                now,
                ErrorCode::UnknownType,
                format!("unrecognized data.type for a get request: {data_type:?}"),
            ));
        };

        match self
            .tasks
            .enqueue(task_type, request.data.body.clone(), session_id, &request.request_id)
            .await
        {
            Ok(task_id) => {
                if let Some(entry) = self.sessions.get(session_id) {
                    let mut state = entry.state.lock().await;
                    state.track_request(request.request_id.clone(), Utc::now(), Some(task_id));
                }
                None
            }
            Err(err) => Some(ServerFrame::error(
                &request.request_id,
                now,
                ErrorCode::StoreUnavailable,
                err.to_string(),
            )),
        }
    }

    /// Control/local reads answered without a task row: `config`, `server_time`,
    /// `subscriptions`, `metrics`. Returns `None` for anything else so `handle_get` falls
    /// through to the task-backed path.
    async fn answer_locally(&self, session_id: Uuid, request_id: &str, data_type: DataType, now: i64) -> Option<ServerFrame> {
        let data = match data_type {
            DataType::ServerTime => serde_json::json!({ "server_time": now }),
            DataType::Config => serde_json::json!({ "protocol_version": crate::gateway::protocol::PROTOCOL_VERSION }),
            DataType::Subscriptions => {
                let entry = self.sessions.get(session_id)?;
                let state = entry.state.lock().await;
                let keys: Vec<String> = state.subscriptions.iter().map(SubscriptionKey::as_canonical).map(String::from).collect();
                serde_json::json!({ "subscriptions": keys })
            }
            DataType::Metrics => {
                let entry = self.sessions.get(session_id)?;
                let state = entry.state.lock().await;
                serde_json::json!({ "subscription_count": state.subscriptions.len() })
            }
            _ => return None,
        };
        Some(ServerFrame::success(request_id, now, data))
    }

    async fn handle_subscribe(&self, session_id: Uuid, request: &ClientRequest, now: i64) -> Option<ServerFrame> {
        let Some(raw_keys) = request.data.body.get("keys").and_then(Value::as_array) else {
            return Some(ServerFrame::error(&request.request_id, now, ErrorCode::InvalidRequest, "subscribe requires a 'keys' array"));
        };

        let mut accepted = Vec::new();
        for raw in raw_keys {
            let Some(raw_key) = raw.as_str() else {
                continue;
            };
            let key: SubscriptionKey = match raw_key.parse() {
                Ok(key) => key,
                Err(err) => {
                    warn!(key = raw_key, error = %err, "rejecting unparseable subscription key");
                    continue;
                }
            };

            let Some(entry) = self.sessions.get(session_id) else {
                continue;
            };
            let newly_added = {
                let mut state = entry.state.lock().await;
                state.add_subscription(key.clone())
            };

            if newly_added {
                match self.registry.acquire(session_id, key.as_canonical()).await {
                    Ok(_) => {
                        self.sessions.index_subscription(session_id, key.as_canonical());
                        accepted.push(key.as_canonical().to_string());
                    }
                    Err(err) => warn!(key = %key, error = %err, "registry acquire failed"),
                }
            } else {
                accepted.push(key.as_canonical().to_string());
            }
        }

        Some(ServerFrame::success(&request.request_id, now, serde_json::json!({ "accepted": accepted })))
    }

    async fn handle_unsubscribe(&self, session_id: Uuid, request: &ClientRequest, now: i64) -> Option<ServerFrame> {
        let Some(raw_keys) = request.data.body.get("keys").and_then(Value::as_array) else {
            return Some(ServerFrame::error(&request.request_id, now, ErrorCode::InvalidRequest, "unsubscribe requires a 'keys' array"));
        };

        let mut released = Vec::new();
        for raw in raw_keys {
            let Some(raw_key) = raw.as_str() else {
                continue;
            };
            let key: SubscriptionKey = match raw_key.parse() {
                Ok(key) => key,
                Err(_) => continue,
            };

            let Some(entry) = self.sessions.get(session_id) else {
                continue;
            };
            let was_held = {
                let mut state = entry.state.lock().await;
                state.remove_subscription(&key)
            };

            if was_held {
                match self.registry.release(session_id, key.as_canonical()).await {
                    Ok(_) => {
                        self.sessions.deindex_subscription(session_id, key.as_canonical());
                        released.push(key.as_canonical().to_string());
                    }
                    Err(err) => warn!(key = %key, error = %err, "registry release failed"),
                }
            }
            // NOT_SUBSCRIBED is idempotent success -- unsubscribing an unheld key is a no-op.
        }

        Some(ServerFrame::success(&request.request_id, now, serde_json::json!({ "released": released })))
    }

    /// Session teardown: releases every registry reference the session holds and drops it
    /// from the table. Pending tasks are left to complete; their results are discarded
    /// because the session row is gone by the time `task.completed` would resolve them.
    #[instrument(skip(self))]
    pub async fn teardown(&self, session_id: Uuid) {
        if let Err(err) = self.registry.release_all(session_id).await {
            warn!(%session_id, error = %err, "failed to release subscriptions on teardown");
        }
        self.sessions.remove(session_id);
    }
}
