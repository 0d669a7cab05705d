//! Run configuration.
//!
//! All inputs of a sync run live in [`SyncConfig`]. The library never reads
//! them from the environment itself; the binary collects them and passes
//! them in.

mod error;
mod repository;

pub use error::ConfigError;
pub use repository::DestinationRepository;

use url::Url;

/// Default web host for repositories.
pub const DEFAULT_SERVER_URL: &str = "https://github.com";

/// Default REST API endpoint.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

/// Configuration for a single sync run.
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Repository the pull request is mirrored into.
    dest_repo: DestinationRepository,
    /// Base branch of the mirrored pull request.
    dest_branch: String,
    /// Label that suppresses mirroring.
    ignore_label: String,
    /// Token used for destination API calls.
    token: String,
    /// Web host used for the push remote.
    server_url: Url,
    /// REST API endpoint.
    api_url: Url,
}

impl SyncConfig {
    /// Creates a configuration targeting github.com.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidRepository`] if `dest_repo` is not
    /// `owner/name`.
    pub fn new(
        dest_repo: &str,
        dest_branch: impl Into<String>,
        ignore_label: impl Into<String>,
        token: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            dest_repo: DestinationRepository::parse(dest_repo)?,
            dest_branch: dest_branch.into(),
            ignore_label: ignore_label.into(),
            token: token.into(),
            server_url: parse_url(DEFAULT_SERVER_URL)?,
            api_url: parse_url(DEFAULT_API_URL)?,
        })
    }

    /// Sets a custom web host (GitHub Enterprise Server).
    #[must_use]
    pub fn with_server_url(mut self, server_url: Url) -> Self {
        self.server_url = server_url;
        self
    }

    /// Sets a custom REST API endpoint.
    #[must_use]
    pub fn with_api_url(mut self, api_url: Url) -> Self {
        self.api_url = api_url;
        self
    }

    /// Returns the destination repository.
    pub fn dest_repo(&self) -> &DestinationRepository {
        &self.dest_repo
    }

    /// Returns the destination base branch.
    pub fn dest_branch(&self) -> &str {
        &self.dest_branch
    }

    /// Returns the ignore label.
    pub fn ignore_label(&self) -> &str {
        &self.ignore_label
    }

    /// Returns the configured token.
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Returns the web host.
    pub fn server_url(&self) -> &Url {
        &self.server_url
    }

    /// Returns the REST API endpoint.
    pub fn api_url(&self) -> &Url {
        &self.api_url
    }

    /// Returns the git URL of the destination repository.
    ///
    /// Format: `{server_url}/{owner}/{name}.git`
    #[must_use]
    pub fn remote_url(&self) -> String {
        format!(
            "{}/{}.git",
            self.server_url.as_str().trim_end_matches('/'),
            self.dest_repo
        )
    }

    /// Returns the web URL of a pull request in the destination repository.
    #[must_use]
    pub fn pull_request_url(&self, number: u64) -> String {
        format!(
            "{}/{}/pull/{number}",
            self.server_url.as_str().trim_end_matches('/'),
            self.dest_repo
        )
    }
}

/// Parses a URL, mapping failures to [`ConfigError::InvalidUrl`].
///
/// # Errors
///
/// Returns [`ConfigError::InvalidUrl`] if `value` is not an absolute URL.
pub fn parse_url(value: &str) -> Result<Url, ConfigError> {
    Url::parse(value).map_err(|e| ConfigError::InvalidUrl {
        value: value.to_string(),
        source: e,
    })
}
