//! Mirrors a merged pull request into the destination repository.
//!
//! A run is an ordered pipeline:
//!
//! 1. Stop if the pull request was closed without merging.
//! 2. Stop if it carries the ignore label.
//! 3. Create and check out `sync-<head.ref>` from the current checkout.
//! 4. Register the destination as a remote and push the branch.
//! 5. Open the destination pull request.
//! 6. Copy assignees, labels, milestone and request the author's review.
//!
//! Failures in steps 3-5 fail the run. Step 6 is best-effort: its failures
//! are logged and recorded in the outcome, never propagated.

mod error;
mod gate;

pub use error::SyncError;
pub use gate::{gate, Gate};

use crate::config::SyncConfig;
use crate::event::{PullRequest, PullRequestEvent};
use crate::git::SourceControl;
use crate::github::{CreatedPullRequest, IssueMetadata, NewPullRequest, PullRequestHost};
use crate::naming::{mirror_branch_name, mirror_pr_title, DEFAULT_REMOTE_NAME};
use crate::outcome::{MetadataStatus, SyncOutcome};
use tracing::{debug, info, info_span, Instrument};

/// Runs the sync pipeline against a source-control and a host backend.
pub struct Syncer<G, H> {
    config: SyncConfig,
    git: G,
    host: H,
}

impl<G: SourceControl, H: PullRequestHost> Syncer<G, H> {
    /// Creates a syncer for one run.
    pub fn new(config: SyncConfig, git: G, host: H) -> Self {
        Self { config, git, host }
    }

    /// Returns the source-control backend.
    pub fn git(&self) -> &G {
        &self.git
    }

    /// Returns the host backend.
    pub fn host(&self) -> &H {
        &self.host
    }

    /// Executes the pipeline for a trigger event.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError`] if branch creation, remote registration, push
    /// or pull request creation fails.
    pub async fn run(&self, event: &PullRequestEvent) -> Result<SyncOutcome, SyncError> {
        let pull_request = &event.pull_request;
        let span = info_span!(
            "sync",
            source_pr = pull_request.number,
            dest_repo = %self.config.dest_repo()
        );

        async {
            if let Gate::Stop(outcome) = gate(pull_request, self.config.ignore_label()) {
                info!(reason = outcome.message(), "Skipping sync");
                return Ok(outcome);
            }

            let branch = mirror_branch_name(&pull_request.head.ref_name);
            info!(branch = %branch, "Mirroring merged pull request");

            self.git.create_branch(&branch).await?;
            self.git
                .add_remote(DEFAULT_REMOTE_NAME, &self.config.remote_url())
                .await?;
            self.git.push(DEFAULT_REMOTE_NAME, &branch).await?;

            let created = self
                .host
                .create_pull_request(&self.new_pull_request(pull_request, &branch))
                .await?;

            let (assignment, review) = futures::join!(
                self.copy_metadata(pull_request, &created),
                self.request_author_review(pull_request, &created)
            );

            info!(pr_number = created.number, url = %created.url, "Sync complete");
            Ok(SyncOutcome::Synced {
                number: created.number,
                url: created.url,
                branch,
                assignment,
                review,
            })
        }
        .instrument(span)
        .await
    }

    fn new_pull_request(&self, pull_request: &PullRequest, branch: &str) -> NewPullRequest {
        NewPullRequest {
            title: mirror_pr_title(&pull_request.title),
            body: pull_request.body.clone(),
            head: branch.to_string(),
            base: self.config.dest_branch().to_string(),
        }
    }

    /// Copies assignees, labels and milestone. Best-effort.
    async fn copy_metadata(
        &self,
        pull_request: &PullRequest,
        created: &CreatedPullRequest,
    ) -> MetadataStatus {
        let metadata = IssueMetadata {
            assignees: pull_request.assignee_logins(),
            labels: pull_request.label_names(),
            milestone: pull_request.milestone_number(),
        };

        let status = MetadataStatus::from_result(
            self.host
                .update_issue_metadata(created.number, &metadata)
                .await,
        );
        if let MetadataStatus::Failed { error } = &status {
            debug!(pr_number = created.number, error = %error, "Failed to copy issue metadata");
        }
        status
    }

    /// Requests a review from the source pull request's author. Best-effort.
    async fn request_author_review(
        &self,
        pull_request: &PullRequest,
        created: &CreatedPullRequest,
    ) -> MetadataStatus {
        let reviewers: Vec<String> = pull_request
            .author_login()
            .map(str::to_string)
            .into_iter()
            .collect();

        let status = MetadataStatus::from_result(
            self.host
                .request_reviewers(created.number, &reviewers)
                .await,
        );
        if let MetadataStatus::Failed { error } = &status {
            debug!(pr_number = created.number, error = %error, "Failed to request reviewers");
        }
        status
    }
}
