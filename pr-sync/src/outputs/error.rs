//! Output error types.

use thiserror::Error;

/// Errors that can occur while writing step outputs.
#[derive(Debug, Error)]
pub enum OutputError {
    /// Failed to write the output file.
    #[error("Failed to write output file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
