#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod config;
pub mod event;
pub mod git;
pub mod github;
pub mod naming;
pub mod outcome;
pub mod outputs;
pub mod runner;
pub mod sync;

pub use config::{parse_url, ConfigError, DestinationRepository, SyncConfig};
pub use event::{EventError, PullRequest, PullRequestEvent};
pub use git::{GitCli, GitError, SourceControl};
pub use github::{
    CreatedPullRequest, HostError, IssueMetadata, NewPullRequest, OctocrabHost, PullRequestHost,
};
pub use naming::{mirror_branch_name, mirror_pr_title, DEFAULT_REMOTE_NAME};
pub use outcome::{MetadataStatus, SyncOutcome};
pub use outputs::{ActionOutputs, OutputError};
pub use runner::{Runner, RunnerConfig, RunnerError};
pub use sync::{gate, Gate, SyncError, Syncer};
