use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum OverlayError {
    /// A window label did not name any of the four arrow directions.
    #[error("'{0}' does not name an arrow direction")]
    InvalidDirection(String),
    /// The OS refused the global keyboard listener (missing permission,
    /// no display server, ...).
    #[error("failed to register global keyboard hook: {0}")]
    HookRegistration(String),
    #[error("keyboard listener stopped unexpectedly")]
    ListenerStopped,
}

pub type Result<T> = std::result::Result<T, OverlayError>;
