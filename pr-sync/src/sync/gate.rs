//! Guards that decide whether a pull request is mirrored at all.

use crate::event::PullRequest;
use crate::outcome::SyncOutcome;

/// Result of evaluating the guards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gate {
    /// Mirror the pull request.
    Continue,

    /// Stop without side effects.
    Stop(SyncOutcome),
}

/// Evaluates the merge and ignore-label guards, in that order.
#[must_use]
pub fn gate(pull_request: &PullRequest, ignore_label: &str) -> Gate {
    if !pull_request.merged {
        return Gate::Stop(SyncOutcome::NotMerged);
    }

    if pull_request.has_label(ignore_label) {
        return Gate::Stop(SyncOutcome::Ignored);
    }

    Gate::Continue
}
