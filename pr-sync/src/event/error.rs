//! Event loading error types.

use thiserror::Error;

/// Errors that can occur while loading the trigger event.
#[derive(Debug, Error)]
pub enum EventError {
    /// Failed to read the payload file.
    #[error("Failed to read event payload '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Payload is not a pull request event.
    #[error("Failed to parse pull request event '{path}': {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}
