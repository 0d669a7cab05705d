//! Local git operations.
//!
//! A sync run only needs three commands: create the mirror branch, register
//! the destination remote and push. [`SourceControl`] is the seam the sync
//! pipeline talks to; [`GitCli`] backs it with the `git` binary.

mod error;

pub use error::GitError;

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// Source-control operations used by a sync run.
#[async_trait]
pub trait SourceControl: Send + Sync {
    /// Creates a branch from the current checkout and checks it out.
    async fn create_branch(&self, branch_name: &str) -> Result<(), GitError>;

    /// Registers a named remote.
    async fn add_remote(&self, remote_name: &str, url: &str) -> Result<(), GitError>;

    /// Pushes a local branch to a remote under the same name.
    async fn push(&self, remote_name: &str, branch_name: &str) -> Result<(), GitError>;
}

/// [`SourceControl`] backed by the `git` command line.
#[derive(Debug, Clone)]
pub struct GitCli {
    workdir: PathBuf,
}

impl GitCli {
    /// Creates a git runner for the checkout at `workdir`.
    pub fn new(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
        }
    }
}

#[async_trait]
impl SourceControl for GitCli {
    async fn create_branch(&self, branch_name: &str) -> Result<(), GitError> {
        debug!(branch = %branch_name, "Creating branch");
        run_git_command(&self.workdir, &["checkout", "-b", branch_name]).await
    }

    async fn add_remote(&self, remote_name: &str, url: &str) -> Result<(), GitError> {
        debug!(remote = %remote_name, url = %url, "Adding remote");
        run_git_command(&self.workdir, &["remote", "add", remote_name, url]).await
    }

    async fn push(&self, remote_name: &str, branch_name: &str) -> Result<(), GitError> {
        debug!(remote = %remote_name, branch = %branch_name, "Pushing branch");
        run_git_command(&self.workdir, &["push", remote_name, branch_name]).await
    }
}

/// Runs a git command.
async fn run_git_command(path: &Path, args: &[&str]) -> Result<(), GitError> {
    let command = format!("git {}", args.join(" "));

    let output = Command::new("git")
        .args(args)
        .current_dir(path)
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .await
        .map_err(|e| GitError::CommandFailed {
            command: command.clone(),
            message: format!("failed to execute: {e}"),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(GitError::CommandFailed {
            command,
            message: stderr.trim().to_string(),
        });
    }

    Ok(())
}
