//! GitHub Actions outputs and annotations.
//!
//! Outputs are appended to the file named by `GITHUB_OUTPUT`. Outside of
//! Actions there is no such file and outputs are only logged.

mod error;

pub use error::OutputError;

use crate::outcome::SyncOutcome;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::info;

/// Environment variable naming the step output file.
pub const OUTPUT_FILE_ENV: &str = "GITHUB_OUTPUT";

/// Writer for step outputs.
#[derive(Debug, Clone, Default)]
pub struct ActionOutputs {
    output_file: Option<PathBuf>,
}

impl ActionOutputs {
    /// Creates a writer for an explicit output file.
    pub fn new(output_file: Option<PathBuf>) -> Self {
        Self { output_file }
    }

    /// Creates a writer from `GITHUB_OUTPUT`, ignoring it when empty.
    pub fn from_env() -> Self {
        let output_file = std::env::var_os(OUTPUT_FILE_ENV)
            .filter(|value| !value.is_empty())
            .map(PathBuf::from);
        Self::new(output_file)
    }

    /// Returns the output file, if any.
    pub fn output_file(&self) -> Option<&Path> {
        self.output_file.as_deref()
    }

    /// Sets a step output.
    ///
    /// # Errors
    ///
    /// Returns [`OutputError::Io`] if the output file cannot be written.
    pub fn set_output(&self, name: &str, value: &str) -> Result<(), OutputError> {
        self.write_entries(&[(name, value)])
    }

    /// Writes `message` and, for a successful sync, `url`.
    ///
    /// Both entries go out in a single write, so `url` is never set without
    /// `message`.
    ///
    /// # Errors
    ///
    /// Returns [`OutputError::Io`] if the output file cannot be written.
    pub fn write_outcome(&self, outcome: &SyncOutcome) -> Result<(), OutputError> {
        let mut entries = vec![("message", outcome.message())];
        if let Some(url) = outcome.url() {
            entries.push(("url", url));
        }
        self.write_entries(&entries)
    }

    fn write_entries(&self, entries: &[(&str, &str)]) -> Result<(), OutputError> {
        for (name, value) in entries {
            info!(name, value, "Setting output");
        }

        let Some(path) = &self.output_file else {
            return Ok(());
        };

        let contents: String = entries
            .iter()
            .map(|(name, value)| format_output(name, value))
            .collect();

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| OutputError::Io {
                path: path.display().to_string(),
                source: e,
            })?;

        file.write_all(contents.as_bytes())
            .map_err(|e| OutputError::Io {
                path: path.display().to_string(),
                source: e,
            })
    }

    /// Emits an error annotation marking the step as failed.
    ///
    /// The caller is responsible for exiting with a non-zero status.
    pub fn fail(message: &str) {
        println!("{}", error_command(message));
    }
}

/// Formats a `name=value` entry, switching to the heredoc form for
/// multi-line values.
fn format_output(name: &str, value: &str) -> String {
    if !value.contains('\n') && !value.contains('\r') {
        return format!("{name}={value}\n");
    }

    let mut delimiter = format!("ghadelimiter_{}", std::process::id());
    while value.contains(&delimiter) {
        delimiter.push('_');
    }
    format!("{name}<<{delimiter}\n{value}\n{delimiter}\n")
}

/// Builds an `::error::` workflow command.
fn error_command(message: &str) -> String {
    let escaped = message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A");
    format!("::error::{escaped}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::MetadataStatus;
    use tempfile::TempDir;

    fn read(path: &Path) -> String {
        std::fs::read_to_string(path).unwrap()
    }

    #[test]
    fn writes_single_line_output() {
        assert_eq!(format_output("message", "done"), "message=done\n");
    }

    #[test]
    fn writes_multi_line_output_as_heredoc() {
        let formatted = format_output("body", "a\nb");
        let delimiter = format!("ghadelimiter_{}", std::process::id());
        assert_eq!(
            formatted,
            format!("body<<{delimiter}\na\nb\n{delimiter}\n")
        );
    }

    #[test]
    fn escapes_error_command() {
        assert_eq!(
            error_command("push failed: 100%\nremote rejected"),
            "::error::push failed: 100%25%0Aremote rejected"
        );
    }

    #[test]
    fn synced_outcome_sets_url_and_message() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("output");
        let outputs = ActionOutputs::new(Some(path.clone()));

        outputs
            .write_outcome(&SyncOutcome::Synced {
                number: 5,
                url: "https://github.com/org/dest/pull/5".to_string(),
                branch: "sync-add-login".to_string(),
                assignment: MetadataStatus::Applied,
                review: MetadataStatus::Applied,
            })
            .unwrap();

        assert_eq!(
            read(&path),
            "message=Successfully synced PRs\nurl=https://github.com/org/dest/pull/5\n"
        );
    }

    #[test]
    fn unwritable_output_file_sets_nothing_for_synced_outcome() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing/output");
        let outputs = ActionOutputs::new(Some(path.clone()));

        let result = outputs.write_outcome(&SyncOutcome::Synced {
            number: 5,
            url: "https://github.com/org/dest/pull/5".to_string(),
            branch: "sync-add-login".to_string(),
            assignment: MetadataStatus::Applied,
            review: MetadataStatus::Applied,
        });

        assert!(matches!(result, Err(OutputError::Io { .. })));
        assert!(!path.exists());
    }

    #[test]
    fn skipped_outcome_sets_only_message() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("output");
        let outputs = ActionOutputs::new(Some(path.clone()));

        outputs.write_outcome(&SyncOutcome::Ignored).unwrap();

        assert_eq!(
            read(&path),
            "message=PR contained an ignore label. Terminating...\n"
        );
    }

    #[test]
    fn reads_output_file_from_env() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("output");

        temp_env::with_var(OUTPUT_FILE_ENV, Some(&path), || {
            let outputs = ActionOutputs::from_env();
            assert_eq!(outputs.output_file(), Some(path.as_path()));
            outputs.write_outcome(&SyncOutcome::NotMerged).unwrap();
        });

        assert_eq!(
            read(&path),
            "message=PR was closed without merging. Terminating...\n"
        );
    }

    #[test]
    fn empty_env_means_no_output_file() {
        temp_env::with_var(OUTPUT_FILE_ENV, Some(""), || {
            let outputs = ActionOutputs::from_env();
            assert_eq!(outputs.output_file(), None);
            outputs.set_output("message", "logged only").unwrap();
        });
    }

    #[test]
    fn unwritable_output_file_is_an_error() {
        let temp = TempDir::new().unwrap();
        let outputs = ActionOutputs::new(Some(temp.path().join("missing/output")));

        let result = outputs.set_output("message", "x");
        assert!(matches!(result, Err(OutputError::Io { .. })));
    }
}
