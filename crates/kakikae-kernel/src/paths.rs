//! Home directory expansion for caller-supplied paths.

use std::path::PathBuf;

/// Expand a leading `~` to the caller's home directory.
///
/// `~` and `~/rest` are expanded; everything else (including `~user/...`)
/// comes back unchanged. Existence is not checked here, the filesystem call
/// that follows reports that.
pub fn expand_path(path: &str) -> PathBuf {
    if path == "~" || path.starts_with("~/") {
        PathBuf::from(shellexpand::tilde(path).as_ref())
    } else {
        PathBuf::from(path)
    }
}
