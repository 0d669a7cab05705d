//! Destination repository API.
//!
//! [`PullRequestHost`] is the seam the sync pipeline uses to open the mirrored
//! pull request and copy metadata onto it. [`OctocrabHost`] implements it
//! against the GitHub REST API.

mod error;
mod types;

pub use error::HostError;

use error::map_octocrab_error;
pub use types::{CreatedPullRequest, IssueMetadata, NewPullRequest};

use crate::config::SyncConfig;
use async_trait::async_trait;
use octocrab::Octocrab;
use tracing::{debug, info};
use types::ReviewRequest;

/// Pull request operations against the destination repository.
#[async_trait]
pub trait PullRequestHost: Send + Sync {
    /// Opens a pull request.
    async fn create_pull_request(
        &self,
        request: &NewPullRequest,
    ) -> Result<CreatedPullRequest, HostError>;

    /// Sets assignees, labels and milestone on a pull request's issue.
    async fn update_issue_metadata(
        &self,
        number: u64,
        metadata: &IssueMetadata,
    ) -> Result<(), HostError>;

    /// Requests reviews from the given users.
    async fn request_reviewers(&self, number: u64, reviewers: &[String]) -> Result<(), HostError>;
}

/// [`PullRequestHost`] backed by octocrab.
pub struct OctocrabHost {
    octocrab: Octocrab,
    config: SyncConfig,
}

impl OctocrabHost {
    /// Builds an authenticated client for the configured API endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`HostError::Api`] if the client cannot be constructed.
    pub fn new(config: &SyncConfig) -> Result<Self, HostError> {
        let octocrab = Octocrab::builder()
            .personal_token(config.token().to_string())
            .base_uri(config.api_url().as_str())
            .map_err(|e| map_octocrab_error("build client", &e))?
            .build()
            .map_err(|e| map_octocrab_error("build client", &e))?;

        Ok(Self {
            octocrab,
            config: config.clone(),
        })
    }

    fn issue_route(&self, number: u64) -> String {
        let repo = self.config.dest_repo();
        format!("/repos/{}/{}/issues/{number}", repo.owner, repo.name)
    }

    fn reviewers_route(&self, number: u64) -> String {
        let repo = self.config.dest_repo();
        format!(
            "/repos/{}/{}/pulls/{number}/requested_reviewers",
            repo.owner, repo.name
        )
    }
}

#[async_trait]
impl PullRequestHost for OctocrabHost {
    async fn create_pull_request(
        &self,
        request: &NewPullRequest,
    ) -> Result<CreatedPullRequest, HostError> {
        let repo = self.config.dest_repo();
        debug!(
            repo = %repo,
            head = %request.head,
            base = %request.base,
            "Creating pull request"
        );

        let pr = self
            .octocrab
            .pulls(&repo.owner, &repo.name)
            .create(&request.title, &request.head, &request.base)
            .body::<String>(request.body.clone())
            .maintainer_can_modify(true)
            .draft(false)
            .send()
            .await
            .map_err(|e| map_octocrab_error("create pull request", &e))?;

        let url = pr
            .html_url
            .as_ref()
            .map(|u| u.to_string())
            .unwrap_or_else(|| self.config.pull_request_url(pr.number));

        info!(pr_number = pr.number, url = %url, "Pull request created");
        Ok(CreatedPullRequest {
            number: pr.number,
            url,
        })
    }

    async fn update_issue_metadata(
        &self,
        number: u64,
        metadata: &IssueMetadata,
    ) -> Result<(), HostError> {
        debug!(
            pr_number = number,
            assignees = ?metadata.assignees,
            labels = ?metadata.labels,
            milestone = ?metadata.milestone,
            "Updating issue metadata"
        );

        let _issue: serde_json::Value = self
            .octocrab
            .patch(self.issue_route(number), Some(metadata))
            .await
            .map_err(|e| map_octocrab_error("update issue", &e))?;
        Ok(())
    }

    async fn request_reviewers(&self, number: u64, reviewers: &[String]) -> Result<(), HostError> {
        debug!(pr_number = number, reviewers = ?reviewers, "Requesting reviewers");

        let _pr: serde_json::Value = self
            .octocrab
            .post(
                self.reviewers_route(number),
                Some(&ReviewRequest { reviewers }),
            )
            .await
            .map_err(|e| map_octocrab_error("request reviewers", &e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::parse_url;
    use serde_json::json;
    use wiremock::matchers::{body_json, body_partial_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn host_for(server: &MockServer) -> OctocrabHost {
        // Another test may have installed it already.
        let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();
        let config = SyncConfig::new("org/dest", "main", "no-sync", "t")
            .unwrap()
            .with_api_url(parse_url(&server.uri()).unwrap());
        OctocrabHost::new(&config).unwrap()
    }

    fn pull_request_json(number: u64, html_url: Option<&str>) -> serde_json::Value {
        json!({
            "url": format!("https://api.github.com/repos/org/dest/pulls/{number}"),
            "id": 1000 + number,
            "number": number,
            "html_url": html_url,
            "title": "[Sync] Add login flow",
            "state": "open",
            "head": { "ref": "sync-add-login", "sha": "abc123", "label": "org:sync-add-login" },
            "base": { "ref": "main", "sha": "def456", "label": "org:main" }
        })
    }

    #[tokio::test]
    async fn creates_pull_request() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/repos/org/dest/pulls"))
            .and(body_partial_json(json!({
                "title": "[Sync] Add login flow",
                "head": "sync-add-login",
                "base": "main",
                "body": "desc",
                "draft": false,
                "maintainer_can_modify": true
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(pull_request_json(
                5,
                Some("https://github.com/org/dest/pull/5"),
            )))
            .expect(1)
            .mount(&server)
            .await;

        let created = host_for(&server)
            .create_pull_request(&NewPullRequest {
                title: "[Sync] Add login flow".to_string(),
                body: Some("desc".to_string()),
                head: "sync-add-login".to_string(),
                base: "main".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(created.number, 5);
        assert_eq!(created.url, "https://github.com/org/dest/pull/5");
    }

    #[tokio::test]
    async fn falls_back_to_web_url_without_html_url() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/repos/org/dest/pulls"))
            .respond_with(ResponseTemplate::new(201).set_body_json(pull_request_json(9, None)))
            .mount(&server)
            .await;

        let created = host_for(&server)
            .create_pull_request(&NewPullRequest {
                title: "[Sync] x".to_string(),
                body: None,
                head: "sync-x".to_string(),
                base: "main".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(created.url, "https://github.com/org/dest/pull/9");
    }

    #[tokio::test]
    async fn surfaces_creation_failure() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/repos/org/dest/pulls"))
            .respond_with(ResponseTemplate::new(422).set_body_json(json!({
                "message": "Validation Failed",
                "errors": [{
                    "resource": "PullRequest",
                    "code": "custom",
                    "message": "A pull request already exists for org:sync-x."
                }],
                "documentation_url": "https://docs.github.com/rest/pulls/pulls#create-a-pull-request"
            })))
            .mount(&server)
            .await;

        let result = host_for(&server)
            .create_pull_request(&NewPullRequest {
                title: "[Sync] x".to_string(),
                body: None,
                head: "sync-x".to_string(),
                base: "main".to_string(),
            })
            .await;

        match result {
            Err(HostError::Rejected {
                operation,
                status,
                message,
            }) => {
                assert_eq!(operation, "create pull request");
                assert_eq!(status, 422);
                assert_eq!(
                    message,
                    "Validation Failed (A pull request already exists for org:sync-x.)"
                );
            }
            other => panic!("expected rejection, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn updates_issue_metadata_with_null_milestone() {
        let server = MockServer::start().await;

        Mock::given(method("PATCH"))
            .and(path("/repos/org/dest/issues/5"))
            .and(body_json(json!({
                "assignees": ["alice"],
                "labels": ["enhancement"],
                "milestone": null
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "number": 5 })))
            .expect(1)
            .mount(&server)
            .await;

        host_for(&server)
            .update_issue_metadata(
                5,
                &IssueMetadata {
                    assignees: vec!["alice".to_string()],
                    labels: vec!["enhancement".to_string()],
                    milestone: None,
                },
            )
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn requests_reviewers() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/repos/org/dest/pulls/5/requested_reviewers"))
            .and(body_json(json!({ "reviewers": ["alice"] })))
            .respond_with(ResponseTemplate::new(201).set_body_json(json!({ "number": 5 })))
            .expect(1)
            .mount(&server)
            .await;

        host_for(&server)
            .request_reviewers(5, &["alice".to_string()])
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn surfaces_reviewer_failure() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/repos/org/dest/pulls/5/requested_reviewers"))
            .respond_with(ResponseTemplate::new(422).set_body_json(json!({
                "message": "Reviews may only be requested from collaborators.",
                "documentation_url": "https://docs.github.com/rest"
            })))
            .mount(&server)
            .await;

        let result = host_for(&server)
            .request_reviewers(5, &["stranger".to_string()])
            .await;

        assert!(matches!(
            result,
            Err(HostError::Rejected { status: 422, .. })
        ));
    }
}
