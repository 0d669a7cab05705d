//! Request and response types for the destination repository.

use serde::Serialize;

/// A pull request to open in the destination repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPullRequest {
    /// Pull request title.
    pub title: String,

    /// Pull request body, sent verbatim.
    pub body: Option<String>,

    /// Branch holding the changes.
    pub head: String,

    /// Branch the changes are merged into.
    pub base: String,
}

/// A pull request created in the destination repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedPullRequest {
    /// Pull request number.
    pub number: u64,

    /// Pull request web URL.
    pub url: String,
}

/// Issue fields copied from the source pull request.
///
/// `milestone` serializes as `null` when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IssueMetadata {
    /// Assignee logins.
    pub assignees: Vec<String>,

    /// Label names.
    pub labels: Vec<String>,

    /// Milestone number.
    pub milestone: Option<u64>,
}

/// Body of a review request.
#[derive(Debug, Serialize)]
pub(crate) struct ReviewRequest<'a> {
    pub reviewers: &'a [String],
}
