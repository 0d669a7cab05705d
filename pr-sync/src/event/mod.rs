//! Pull request webhook payloads.
//!
//! This module models the subset of the `pull_request` event that a sync run
//! reads. Unknown fields are ignored, so full GitHub payloads parse as-is.

mod error;
mod pull_request;

pub use error::EventError;
pub use pull_request::{BranchRef, Label, Milestone, PullRequest, User};

use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// The `pull_request` webhook event that triggers a sync run.
#[derive(Debug, Clone, Deserialize)]
pub struct PullRequestEvent {
    /// Event action (e.g. "closed").
    #[serde(default)]
    pub action: String,

    /// Pull request number in the source repository.
    #[serde(default)]
    pub number: u64,

    /// The pull request the event is about.
    pub pull_request: PullRequest,
}

impl PullRequestEvent {
    /// Loads an event payload from a JSON file.
    ///
    /// On GitHub Actions the path is provided through `GITHUB_EVENT_PATH`.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::Io`] if the file cannot be read, or
    /// [`EventError::Parse`] if it is not a pull request payload.
    pub fn from_path(path: &Path) -> Result<Self, EventError> {
        debug!(path = %path.display(), "Loading event payload");

        let content = std::fs::read_to_string(path).map_err(|e| EventError::Io {
            path: path.display().to_string(),
            source: e,
        })?;

        Self::from_json(&content).map_err(|e| match e {
            EventError::Parse { source, .. } => EventError::Parse {
                path: path.display().to_string(),
                source,
            },
            other => other,
        })
    }

    /// Parses an event payload from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`EventError::Parse`] if the JSON is not a pull request payload.
    pub fn from_json(json: &str) -> Result<Self, EventError> {
        serde_json::from_str(json).map_err(|e| EventError::Parse {
            path: "<inline>".to_string(),
            source: e,
        })
    }
}
