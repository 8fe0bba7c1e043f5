#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Realtime session status, populated by the session SDK bridge.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub connection_status: ConnectionStatus,
}

/// Realtime connection status.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionStatus {
    #[default]
    Disconnected,
    Connecting,
    Connected,
}
