//! Orchestrates a single action run.
//!
//! The runner is the only place that touches the filesystem for inputs and
//! outputs: it loads the event payload, hands it to the [`Syncer`] and writes
//! the resulting outputs.

mod config;
mod error;

pub use config::RunnerConfig;
pub use error::RunnerError;

use crate::event::PullRequestEvent;
use crate::git::GitCli;
use crate::github::OctocrabHost;
use crate::outcome::SyncOutcome;
use crate::outputs::ActionOutputs;
use crate::sync::Syncer;
use tracing::info;

/// Runs the action against real git and GitHub backends.
pub struct Runner {
    config: RunnerConfig,
    syncer: Syncer<GitCli, OctocrabHost>,
    outputs: ActionOutputs,
}

impl Runner {
    /// Builds a runner from the provided configuration.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::Host`] if the GitHub client cannot be built.
    pub fn new(config: RunnerConfig, outputs: ActionOutputs) -> Result<Self, RunnerError> {
        let host = OctocrabHost::new(config.sync())?;
        let git = GitCli::new(config.workdir());
        let syncer = Syncer::new(config.sync().clone(), git, host);
        Ok(Self {
            config,
            syncer,
            outputs,
        })
    }

    /// Executes the run and writes its outputs.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError`] if the event cannot be loaded, the sync fails,
    /// or outputs cannot be written. No `url` output is written on failure.
    pub async fn run(&self) -> Result<SyncOutcome, RunnerError> {
        info!(path = %self.config.event_path().display(), "Loading event");
        let event = PullRequestEvent::from_path(self.config.event_path())?;

        let outcome = self.syncer.run(&event).await?;
        self.outputs.write_outcome(&outcome)?;

        info!(outcome = outcome.message(), "Run finished");
        Ok(outcome)
    }
}
