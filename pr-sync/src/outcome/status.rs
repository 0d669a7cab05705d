//! Best-effort step status.

use serde::Serialize;

/// Status of a best-effort metadata step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum MetadataStatus {
    /// The destination accepted the update.
    Applied,

    /// The update failed; the run still succeeds.
    Failed {
        /// Error message.
        error: String,
    },
}

impl MetadataStatus {
    /// Builds a status from a step result, discarding the error type.
    pub fn from_result<E: std::fmt::Display>(result: Result<(), E>) -> Self {
        match result {
            Ok(()) => Self::Applied,
            Err(e) => Self::Failed {
                error: e.to_string(),
            },
        }
    }

    /// Returns the status as a string.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Applied => "applied",
            Self::Failed { .. } => "failed",
        }
    }

    /// Returns true if the step succeeded.
    #[must_use]
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}
