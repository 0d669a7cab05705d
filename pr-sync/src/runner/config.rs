//! Runner configuration.

use crate::config::SyncConfig;
use std::path::{Path, PathBuf};

/// Configuration for running the action.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Path to the webhook event payload.
    event_path: PathBuf,
    /// Checkout the mirror branch is created in.
    workdir: PathBuf,
    /// Sync inputs.
    sync: SyncConfig,
}

impl RunnerConfig {
    /// Creates a new configuration for a run.
    pub fn new(event_path: PathBuf, workdir: PathBuf, sync: SyncConfig) -> Self {
        Self {
            event_path,
            workdir,
            sync,
        }
    }

    /// Returns the event payload path.
    pub fn event_path(&self) -> &Path {
        &self.event_path
    }

    /// Returns the checkout directory.
    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// Returns the sync inputs.
    pub fn sync(&self) -> &SyncConfig {
        &self.sync
    }
}
