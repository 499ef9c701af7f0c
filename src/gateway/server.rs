use std::sync::Arc;
use std::time::Duration;

use axum::extract::ws::{Message, WebSocket, WebSocketUpgrade};
use axum::extract::State;
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use chrono::Utc;
use futures_util::{SinkExt, StreamExt};
use tokio::net::TcpListener;
use tokio::sync::Mutex;
use tokio::time::interval;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::gateway::handlers::GatewayHandlers;
use crate::gateway::protocol::{ClientRequest, ErrorCode, ServerFrame};
use crate::gateway::session_table::SessionTable;
use crate::Result;

/// Gateway-wide heartbeat and backpressure tunables (§4.1, §4.4, §6 defaults).
#[derive(Debug, Clone, Copy)]
pub struct SessionPolicy {
    pub ping_interval: Duration,
    pub ping_timeout: Duration,
    pub slow_consumer_grace: Duration,
}

impl Default for SessionPolicy {
    fn default() -> Self {
        Self {
            ping_interval: Duration::from_secs(20),
            ping_timeout: Duration::from_secs(60),
            slow_consumer_grace: Duration::from_secs(5),
        }
    }
}

#[derive(Clone)]
struct ServerState {
    sessions: SessionTable,
    handlers: Arc<GatewayHandlers>,
    policy: SessionPolicy,
}

/// Builds the axum router fronting the Client Gateway: a single duplex WebSocket endpoint.
pub fn router(sessions: SessionTable, handlers: Arc<GatewayHandlers>, policy: SessionPolicy) -> Router {
    let state = ServerState { sessions, handlers, policy };
    Router::new().route("/ws", get(upgrade_handler)).with_state(state)
}

pub async fn serve(listen_address: &str, router: Router) -> Result<()> {
    let listener = TcpListener::bind(listen_address).await?;
    info!(listen_address, "client gateway listening");
    axum::serve(listener, router).await?;
    Ok(())
}

async fn upgrade_handler(ws: WebSocketUpgrade, State(state): State<ServerState>) -> Response {
    ws.on_upgrade(move |socket| handle_socket(socket, state))
}

#[instrument(skip(socket, state))]
async fn handle_socket(socket: WebSocket, state: ServerState) {
    let session_id = Uuid::new_v4();
    let entry = state.sessions.register(session_id);
    info!(%session_id, "session connected");

    let (outbound_sink, mut inbound_stream) = socket.split();
    let outbound_sink = Arc::new(Mutex::new(outbound_sink));

    let writer_entry = entry.clone();
    let writer_sink = outbound_sink.clone();
    let mut writer_task = tokio::spawn(async move {
        loop {
            let frames = writer_entry.outbound.drain().await;
            for frame in frames {
                let Ok(text) = serde_json::to_string(&frame) else {
                    continue;
                };
                if writer_sink.lock().await.send(Message::Text(text)).await.is_err() {
                    return;
                }
            }
        }
    });

    // Sends a real WS-level ping so well-behaved clients reply with a Pong the reader task
    // can observe; app-level `update` frames wouldn't trigger a client's transport-level reply.
    let heartbeat_sessions = state.sessions.clone();
    let heartbeat_sink = outbound_sink.clone();
    let ping_interval = state.policy.ping_interval;
    let mut heartbeat_task = tokio::spawn(async move {
        let mut ticker = interval(ping_interval);
        loop {
            ticker.tick().await;
            if heartbeat_sessions.get(session_id).is_none() {
                return;
            }
            if heartbeat_sink.lock().await.send(Message::Ping(Vec::new())).await.is_err() {
                return;
            }
        }
    });

    let handlers = state.handlers.clone();
    let reader_sessions = state.sessions.clone();
    let reader_entry = entry.clone();
    let mut reader_task = tokio::spawn(async move {
        while let Some(message) = inbound_stream.next().await {
            match message {
                Ok(Message::Text(text)) => match serde_json::from_str::<ClientRequest>(&text) {
                    Ok(request) => handlers.handle(session_id, request).await,
                    Err(err) => {
                        warn!(%session_id, error = %err, "rejecting unparseable request frame");
                        reader_sessions
                            .deliver(
                                session_id,
                                ServerFrame::error("", 0, ErrorCode::InvalidRequest, err.to_string()),
                            )
                            .await;
                    }
                },
                Ok(Message::Pong(_)) => {
                    reader_entry.state.lock().await.last_heartbeat = Utc::now();
                }
                Ok(Message::Close(_)) => break,
                Ok(_) => {}
                Err(err) => {
                    warn!(%session_id, error = %err, "websocket read error");
                    break;
                }
            }
        }
    });

    // Races the peer's heartbeat against `ping_timeout` and the outbound queue's backpressure
    // against `slow_consumer_grace`; either trips a close per §4.4/§7.
    let watchdog_entry = entry.clone();
    let ping_timeout = chrono::Duration::from_std(state.policy.ping_timeout).expect("configured ping_timeout fits chrono::Duration");
    let slow_consumer_grace =
        chrono::Duration::from_std(state.policy.slow_consumer_grace).expect("configured slow_consumer_grace fits chrono::Duration");
    let mut watchdog_task = tokio::spawn(async move {
        let mut ticker = interval(Duration::from_secs(1));
        loop {
            ticker.tick().await;
            let now = Utc::now();

            if watchdog_entry.state.lock().await.is_heartbeat_stale(now, ping_timeout) {
                warn!(%session_id, "heartbeat timed out, closing session");
                return;
            }

            if watchdog_entry.outbound.is_slow_consumer(now, slow_consumer_grace).await {
                warn!(%session_id, "slow consumer exceeded backpressure grace window, closing session");
                watchdog_entry
                    .outbound
                    .push(ServerFrame::error(
                        "",
                        now.timestamp_millis(),
                        ErrorCode::SlowConsumer,
                        "outbound queue saturated past grace window",
                    ))
                    .await;
                return;
            }
        }
    });

    tokio::select! {
        _ = &mut writer_task => {},
        _ = &mut reader_task => {},
        _ = &mut heartbeat_task => {},
        _ = &mut watchdog_task => {},
    }

    writer_task.abort();
    reader_task.abort();
    heartbeat_task.abort();
    watchdog_task.abort();

    state.handlers.teardown(session_id).await;
    info!(%session_id, "session disconnected");
}
