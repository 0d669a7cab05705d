//! GitHub host error types.

use thiserror::Error;

/// Errors that can occur while talking to the destination repository host.
#[derive(Debug, Error)]
pub enum HostError {
    /// GitHub answered with an error status.
    #[error("{operation} failed with status {status}: {message}")]
    Rejected {
        operation: String,
        status: u16,
        message: String,
    },

    /// The request could not be completed (transport, decoding, client setup).
    #[error("{operation} failed: {message}")]
    Api { operation: String, message: String },
}

/// Maps an octocrab error, keeping GitHub's own message and error details.
pub(crate) fn map_octocrab_error(operation: &str, error: &octocrab::Error) -> HostError {
    if let octocrab::Error::GitHub { source, .. } = error {
        let details = source
            .errors
            .as_deref()
            .map(error_details)
            .unwrap_or_default();

        let message = if details.is_empty() {
            source.message.clone()
        } else {
            format!("{} ({})", source.message, details.join("; "))
        };

        return HostError::Rejected {
            operation: operation.to_string(),
            status: source.status_code.as_u16(),
            message,
        };
    }

    HostError::Api {
        operation: operation.to_string(),
        message: error.to_string(),
    }
}

/// Extracts readable text from the `errors` array of a GitHub error body.
///
/// Entries are either plain strings or objects; objects without a `message`
/// are kept as compact JSON.
fn error_details(errors: &[serde_json::Value]) -> Vec<String> {
    errors
        .iter()
        .map(|entry| match entry {
            serde_json::Value::String(text) => text.clone(),
            other => other
                .get("message")
                .and_then(serde_json::Value::as_str)
                .map_or_else(|| other.to_string(), str::to_string),
        })
        .collect()
}
