//! Git error types.

use thiserror::Error;

/// Errors that can occur while running git.
#[derive(Debug, Error)]
pub enum GitError {
    /// A git command could not be spawned or exited unsuccessfully.
    #[error("{command} failed: {message}")]
    CommandFailed { command: String, message: String },
}
