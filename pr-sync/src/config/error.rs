//! Configuration error types.

use thiserror::Error;

/// Errors that can occur while building the run configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Destination repository is not in `owner/name` form.
    #[error("Invalid destination repository '{value}': expected 'owner/name'")]
    InvalidRepository { value: String },

    /// A configured URL could not be parsed or joined.
    #[error("Invalid URL '{value}': {source}")]
    InvalidUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },
}
