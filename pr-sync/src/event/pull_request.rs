//! Source pull request payload types.

use serde::Deserialize;

/// The source pull request carried by the trigger event.
#[derive(Debug, Clone, Deserialize)]
pub struct PullRequest {
    /// Pull request number.
    #[serde(default)]
    pub number: u64,

    /// Pull request title.
    pub title: String,

    /// Pull request body, `None` when empty.
    #[serde(default)]
    pub body: Option<String>,

    /// Whether the pull request was merged when it was closed.
    #[serde(default)]
    pub merged: bool,

    /// Head (source) branch.
    pub head: BranchRef,

    /// Base (target) branch.
    #[serde(default)]
    pub base: Option<BranchRef>,

    /// Pull request author.
    #[serde(default)]
    pub user: Option<User>,

    /// Labels on the pull request.
    #[serde(default)]
    pub labels: Vec<Label>,

    /// Assigned users, in payload order.
    #[serde(default)]
    pub assignees: Vec<User>,

    /// Milestone, if one is set.
    #[serde(default)]
    pub milestone: Option<Milestone>,
}

/// A branch reference.
#[derive(Debug, Clone, Deserialize)]
pub struct BranchRef {
    /// Branch name.
    #[serde(rename = "ref")]
    pub ref_name: String,
}

/// A GitHub user.
#[derive(Debug, Clone, Deserialize)]
pub struct User {
    /// Login name.
    pub login: String,
}

/// An issue/pull request label.
#[derive(Debug, Clone, Deserialize)]
pub struct Label {
    /// Label name.
    pub name: String,
}

/// A milestone.
#[derive(Debug, Clone, Deserialize)]
pub struct Milestone {
    /// Milestone number within its repository.
    pub number: u64,
}

impl PullRequest {
    /// Returns true if a label named exactly `name` is present.
    ///
    /// Matching is case-sensitive.
    #[must_use]
    pub fn has_label(&self, name: &str) -> bool {
        self.labels.iter().any(|label| label.name == name)
    }

    /// Returns all label names, in payload order.
    #[must_use]
    pub fn label_names(&self) -> Vec<String> {
        self.labels.iter().map(|label| label.name.clone()).collect()
    }

    /// Returns all assignee logins, in payload order.
    #[must_use]
    pub fn assignee_logins(&self) -> Vec<String> {
        self.assignees.iter().map(|user| user.login.clone()).collect()
    }

    /// Returns the milestone number, if a milestone is set.
    #[must_use]
    pub fn milestone_number(&self) -> Option<u64> {
        self.milestone.as_ref().map(|milestone| milestone.number)
    }

    /// Returns the author's login, if the payload carries one.
    #[must_use]
    pub fn author_login(&self) -> Option<&str> {
        self.user.as_ref().map(|user| user.login.as_str())
    }
}
