//! Runner error types.

/// Errors that can occur while running the action.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Input validation errors.
    #[error(transparent)]
    Config(#[from] crate::config::ConfigError),

    /// Event payload loading errors.
    #[error(transparent)]
    Event(#[from] crate::event::EventError),

    /// GitHub client initialization errors.
    #[error(transparent)]
    Host(#[from] crate::github::HostError),

    /// Fatal sync failures.
    #[error(transparent)]
    Sync(#[from] crate::sync::SyncError),

    /// Step output errors.
    #[error(transparent)]
    Output(#[from] crate::outputs::OutputError),
}

impl RunnerError {
    /// Returns true if the sync itself failed, as opposed to setup or
    /// reporting.
    #[must_use]
    pub fn is_sync_failure(&self) -> bool {
        matches!(self, Self::Sync(_))
    }
}
