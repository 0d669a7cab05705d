//! Sync error types.

use crate::git::GitError;
use crate::github::HostError;
use thiserror::Error;

/// Fatal errors that fail a sync run.
///
/// Best-effort metadata failures never surface here.
#[derive(Debug, Error)]
pub enum SyncError {
    /// Branch creation, remote registration or push failed.
    #[error(transparent)]
    Git(#[from] GitError),

    /// Pull request creation failed.
    #[error(transparent)]
    Host(#[from] HostError),
}
