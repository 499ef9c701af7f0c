use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Handler selector: `data.type` on the wire, see §4.1's four-handler dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataType {
    Config,
    ServerTime,
    SearchSymbols,
    ResolveSymbol,
    Klines,
    Quotes,
    Subscribe,
    Unsubscribe,
    Subscriptions,
    Metrics,
    GetSpotAccount,
    GetFuturesAccount,
    CreateAlertConfig,
    UpdateAlertConfig,
    DeleteAlertConfig,
    EnableAlertConfig,
    DisableAlertConfig,
    ListAlertConfigs,
    ListSignals,
    GetStrategyMetadata,
}

impl DataType {
    /// `true` for handlers answered from in-memory/registry state — no task row, no upstream call.
    pub fn is_local(&self) -> bool {
        matches!(
            self,
            Self::Config | Self::ServerTime | Self::Subscriptions | Self::Metrics | Self::Subscribe | Self::Unsubscribe
        )
    }
}

/// Inbound client request: `{protocol_version, action, request_id, timestamp, data}`.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientRequest {
    pub protocol_version: u32,
    pub action: RequestAction,
    pub request_id: String,
    pub timestamp: i64,
    pub data: RequestData,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestAction {
    Get,
    Subscribe,
    Unsubscribe,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RequestData {
    #[serde(rename = "type")]
    pub data_type: DataType,
    #[serde(flatten)]
    pub body: Value,
}

/// One frame the gateway sends to a session: `ack`/`success`/`error` (request-correlated) or
/// `update` (unsolicited, server-initiated push — carries no `request_id`).
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ServerFrame {
    Ack {
        request_id: String,
        protocol_version: u32,
        timestamp: i64,
    },
    Success {
        request_id: String,
        protocol_version: u32,
        timestamp: i64,
        data: Value,
    },
    Error {
        request_id: String,
        protocol_version: u32,
        timestamp: i64,
        error: ErrorBody,
    },
    Update {
        protocol_version: u32,
        timestamp: i64,
        data: Value,
    },
}

#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    pub code: ErrorCode,
    pub message: String,
}

/// Canonical error codes from §7 — contract categories, not implementation-language constructs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    InvalidRequest,
    UnknownType,
    UnknownKey,
    NotSubscribed,
    UpstreamTransient,
    UpstreamPermanent,
    Upstream,
    Timeout,
    SlowConsumer,
    StoreUnavailable,
}

pub const PROTOCOL_VERSION: u32 = 1;

impl ServerFrame {
    pub fn ack(request_id: impl Into<String>, now_millis: i64) -> Self {
        Self::Ack {
            request_id: request_id.into(),
            protocol_version: PROTOCOL_VERSION,
            timestamp: now_millis,
        }
    }

    pub fn success(request_id: impl Into<String>, now_millis: i64, data: Value) -> Self {
        Self::Success {
            request_id: request_id.into(),
            protocol_version: PROTOCOL_VERSION,
            timestamp: now_millis,
            data,
        }
    }

    pub fn error(request_id: impl Into<String>, now_millis: i64, code: ErrorCode, message: impl Into<String>) -> Self {
        Self::Error {
            request_id: request_id.into(),
            protocol_version: PROTOCOL_VERSION,
            timestamp: now_millis,
            error: ErrorBody {
                code,
                message: message.into(),
            },
        }
    }

    pub fn update(now_millis: i64, data: Value) -> Self {
        Self::Update {
            protocol_version: PROTOCOL_VERSION,
            timestamp: now_millis,
            data,
        }
    }

    pub fn is_closed_bar_update(&self) -> bool {
        match self {
            Self::Update { data, .. } => data.get("is_closed").and_then(Value::as_bool).unwrap_or(false),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_frame_carries_no_request_id() {
        let frame = ServerFrame::update(0, serde_json::json!({"close": "50050"}));
        let json = serde_json::to_value(&frame).unwrap();
        assert_eq!(json["action"], "update");
        assert!(json.get("request_id").is_none());
    }

    #[test]
    fn closed_bar_detection_reads_the_is_closed_field() {
        let closed = ServerFrame::update(0, serde_json::json!({"is_closed": true}));
        let open = ServerFrame::update(0, serde_json::json!({"is_closed": false}));
        assert!(closed.is_closed_bar_update());
        assert!(!open.is_closed_bar_update());
    }

    #[test]
    fn local_data_types_match_control_and_registry_handlers() {
        assert!(DataType::Config.is_local());
        assert!(DataType::Subscribe.is_local());
        assert!(!DataType::Klines.is_local());
        assert!(!DataType::GetSpotAccount.is_local());
    }
}
