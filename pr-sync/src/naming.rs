//! Names derived from the source pull request.

/// Remote name under which the destination repository is registered.
pub const DEFAULT_REMOTE_NAME: &str = "sync-destination";

/// Generates the mirror branch name.
///
/// Format: "sync-{head_ref}"
#[must_use]
pub fn mirror_branch_name(head_ref: &str) -> String {
    format!("sync-{head_ref}")
}

/// Generates the mirrored pull request title.
///
/// Format: "[Sync] {title}"
#[must_use]
pub fn mirror_pr_title(title: &str) -> String {
    format!("[Sync] {title}")
}
