//! CLI for PR Sync.
//!
//! This tool mirrors a merged pull request into a destination repository.
//! It is meant to run as a GitHub Action step on `pull_request` `closed`
//! events; every input can also be given on the command line.

use clap::Parser;
use pr_sync::{ActionOutputs, Runner, RunnerConfig, RunnerError, SyncConfig, SyncOutcome};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::error;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use url::Url;

/// PR Sync - Mirror merged pull requests into another repository.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Destination repository, as "owner/name".
    #[arg(long, env = "INPUT_DEST_REPO")]
    dest_repo: String,

    /// Base branch of the mirrored pull request.
    #[arg(long, env = "INPUT_DEST_BRANCH")]
    dest_branch: String,

    /// Label that prevents a pull request from being mirrored.
    #[arg(long, env = "INPUT_IGNORE_LABEL")]
    ignore_label: String,

    /// GitHub token with access to the destination repository.
    #[arg(long, env = "INPUT_TOKEN", hide_env_values = true)]
    token: String,

    /// Path to the pull request event payload.
    #[arg(long, env = "GITHUB_EVENT_PATH")]
    event_path: PathBuf,

    /// Checkout in which the mirror branch is created.
    #[arg(long, env = "GITHUB_WORKSPACE", default_value = ".")]
    workdir: PathBuf,

    /// GitHub web host.
    #[arg(long, env = "GITHUB_SERVER_URL", default_value = pr_sync::config::DEFAULT_SERVER_URL)]
    server_url: Url,

    /// GitHub REST API endpoint.
    #[arg(long, env = "GITHUB_API_URL", default_value = pr_sync::config::DEFAULT_API_URL)]
    api_url: Url,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize tracing
    init_tracing();

    // Octocrab's TLS stack needs a process-wide crypto provider
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    // Parse arguments
    let args = Args::parse();

    // Run the main logic
    match run(args).await {
        Ok(outcome) => {
            print_summary(&outcome);
            ExitCode::from(0)
        }
        Err(e) => {
            error!(error = %e, "Sync failed");
            ActionOutputs::fail(&e.to_string());
            if e.is_sync_failure() {
                ExitCode::from(1)
            } else {
                ExitCode::from(2)
            }
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting (single-line output)
/// - Log level filtering via `RUST_LOG` env var (defaults to "info", or
///   "debug" when the workflow runs with step debug logging enabled)
fn init_tracing() {
    let default_level = if std::env::var("ACTIONS_STEP_DEBUG").is_ok_and(|v| v == "true") {
        "debug"
    } else {
        "info"
    };

    tracing_subscriber::registry()
        .with(fmt::layer().compact().with_target(false))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();
}

/// Main execution logic.
async fn run(args: Args) -> Result<SyncOutcome, RunnerError> {
    let sync = SyncConfig::new(
        &args.dest_repo,
        args.dest_branch,
        args.ignore_label,
        args.token,
    )?
    .with_server_url(args.server_url)
    .with_api_url(args.api_url);

    let config = RunnerConfig::new(args.event_path, args.workdir, sync);
    let runner = Runner::new(config, ActionOutputs::from_env())?;
    runner.run().await
}

/// Prints the final run summary.
fn print_summary(outcome: &SyncOutcome) {
    println!("\nSummary:");
    println!("  Result: {}", outcome.message());

    if let SyncOutcome::Synced {
        url,
        branch,
        assignment,
        review,
        ..
    } = outcome
    {
        println!("  Branch: {branch}");
        println!("  Pull request: {url}");
        println!("  Assignees/labels/milestone: {}", assignment.as_str());
        println!("  Reviewer request: {}", review.as_str());
    }
}
