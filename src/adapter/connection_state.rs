use std::fmt;

/**
 * Per-upstream-connection state machine (§4.5). Distinct from
 * [`crate::streams::connection::state::ConnectionState`] (the teacher's
 * subscription bookkeeping, kept for the raw WS plumbing it wraps): this
 * tracks the adapter-level lifecycle that drives reconnect/resync and
 * (for private streams) listen-key renewal decisions.
 *
 * Transitions: `Connecting -> Authenticated -> Active`; any state ->
 * `Degraded` on heartbeat miss; `Degraded -> Active` on renew/reconnect;
 * any state -> `Closed` on terminal error, after which a fresh connection
 * starts back at `Connecting`.
 */
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdapterConnectionState {
    Connecting,
    Authenticated,
    Active,
    Degraded,
    Closed,
}

impl AdapterConnectionState {
    pub fn on_handshake_ok(self, requires_auth: bool) -> Self {
        if requires_auth {
            Self::Authenticated
        } else {
            Self::Active
        }
    }

    pub fn on_authenticated(self) -> Self {
        Self::Active
    }

    pub fn on_heartbeat_miss(self) -> Self {
        Self::Degraded
    }

    pub fn on_renewed(self) -> Self {
        Self::Active
    }

    pub fn on_terminal_error(self) -> Self {
        Self::Closed
    }

    pub fn is_usable(self) -> bool {
        matches!(self, Self::Active | Self::Degraded)
    }
}

impl fmt::Display for AdapterConnectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Connecting => "CONNECTING",
            Self::Authenticated => "AUTHENTICATED",
            Self::Active => "ACTIVE",
            Self::Degraded => "DEGRADED",
            Self::Closed => "CLOSED",
        };
        f.write_str(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthenticated_handshake_goes_straight_to_active() {
        assert_eq!(AdapterConnectionState::Connecting.on_handshake_ok(false), AdapterConnectionState::Active);
    }

    #[test]
    fn authenticated_handshake_waits_for_auth_step() {
        assert_eq!(AdapterConnectionState::Connecting.on_handshake_ok(true), AdapterConnectionState::Authenticated);
    }

    #[test]
    fn degraded_is_still_usable_pending_renewal() {
        assert!(AdapterConnectionState::Degraded.is_usable());
        assert!(!AdapterConnectionState::Closed.is_usable());
        assert!(!AdapterConnectionState::Connecting.is_usable());
    }

    #[test]
    fn closed_always_restarts_at_connecting_conceptually() {
        // `on_terminal_error` lands the state machine at `Closed`; the adapter's
        // reconnect loop is what opens a fresh connection starting at `Connecting`.
        assert_eq!(AdapterConnectionState::Active.on_terminal_error(), AdapterConnectionState::Closed);
    }
}
