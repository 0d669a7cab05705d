//! Run outcome types.

mod status;

pub use status::MetadataStatus;

/// Message reported when the pull request was closed without merging.
pub const NOT_MERGED_MESSAGE: &str = "PR was closed without merging. Terminating...";

/// Message reported when the pull request carries the ignore label.
pub const IGNORED_MESSAGE: &str = "PR contained an ignore label. Terminating...";

/// Message reported after a successful sync.
pub const SYNCED_MESSAGE: &str = "Successfully synced PRs";

/// How a sync run ended, short of a fatal error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOutcome {
    /// The source pull request was closed without merging.
    NotMerged,

    /// The source pull request carries the ignore label.
    Ignored,

    /// The pull request was mirrored.
    Synced {
        /// Destination pull request number.
        number: u64,
        /// Destination pull request URL.
        url: String,
        /// Mirror branch pushed to the destination.
        branch: String,
        /// Assignees/labels/milestone update status.
        assignment: MetadataStatus,
        /// Reviewer request status.
        review: MetadataStatus,
    },
}

impl SyncOutcome {
    /// Returns the message reported for this outcome.
    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            Self::NotMerged => NOT_MERGED_MESSAGE,
            Self::Ignored => IGNORED_MESSAGE,
            Self::Synced { .. } => SYNCED_MESSAGE,
        }
    }

    /// Returns the destination pull request URL if synced.
    #[must_use]
    pub fn url(&self) -> Option<&str> {
        match self {
            Self::Synced { url, .. } => Some(url),
            _ => None,
        }
    }

    /// Returns true if a destination pull request was created.
    #[must_use]
    pub fn is_synced(&self) -> bool {
        matches!(self, Self::Synced { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_exact_messages() {
        assert_eq!(
            SyncOutcome::NotMerged.message(),
            "PR was closed without merging. Terminating..."
        );
        assert_eq!(
            SyncOutcome::Ignored.message(),
            "PR contained an ignore label. Terminating..."
        );
    }

    #[test]
    fn only_synced_has_url() {
        let synced = SyncOutcome::Synced {
            number: 5,
            url: "https://github.com/org/dest/pull/5".to_string(),
            branch: "sync-add-login".to_string(),
            assignment: MetadataStatus::Applied,
            review: MetadataStatus::Failed {
                error: "not a collaborator".to_string(),
            },
        };

        assert_eq!(synced.message(), "Successfully synced PRs");
        assert_eq!(synced.url(), Some("https://github.com/org/dest/pull/5"));
        assert!(synced.is_synced());
        assert_eq!(SyncOutcome::NotMerged.url(), None);
        assert_eq!(SyncOutcome::Ignored.url(), None);
    }
}
