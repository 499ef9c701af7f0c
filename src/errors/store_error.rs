use thiserror::Error;

/**
 * Store/coordination-substrate error.
 *
 * Wraps failures from the database pool, the LISTEN/NOTIFY channel, or a
 * malformed notification payload. Transport errors (`sqlx::Error`) are not
 * wrapped directly so this type stays `Clone`-able for retry bookkeeping;
 * callers that need the underlying error use `anyhow::Error`'s source chain.
 */
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StoreError {
    #[error("database operation failed: {0}")]
    Query(String),

    #[error("notification channel '{channel}' disconnected: {reason}")]
    ChannelLost { channel: String, reason: String },

    #[error("malformed notification payload on '{channel}': {reason}")]
    MalformedPayload { channel: String, reason: String },

    #[error("row not found: {0}")]
    NotFound(String),
}

impl StoreError {
    pub fn query(err: impl std::fmt::Display) -> Self {
        Self::Query(err.to_string())
    }

    pub fn malformed(channel: impl Into<String>, reason: impl std::fmt::Display) -> Self {
        Self::MalformedPayload {
            channel: channel.into(),
            reason: reason.to_string(),
        }
    }
}
