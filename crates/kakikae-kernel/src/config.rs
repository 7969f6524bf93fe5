//! Engine configuration.

use serde::Deserialize;

/// Default recursion depth for directory listings.
pub const DEFAULT_LIST_DEPTH: usize = 2;

/// Default character budget for rendered file views.
pub const DEFAULT_MAX_VIEW_CHARS: usize = 16_000;

/// Tunables for the file tool engines.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ToolConfig {
    /// How many directory levels `view` lists (1 = the directory itself only).
    pub list_depth: usize,
    /// Rendered file views longer than this many characters are truncated.
    pub max_view_chars: usize,
    /// Entry names the listing skips, in addition to dot-entries.
    pub ignored_dirs: Vec<String>,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            list_depth: DEFAULT_LIST_DEPTH,
            max_view_chars: DEFAULT_MAX_VIEW_CHARS,
            ignored_dirs: vec!["node_modules".to_string()],
        }
    }
}

impl ToolConfig {
    /// Whether a directory entry name is hidden from listings.
    pub fn is_ignored(&self, name: &str) -> bool {
        name.starts_with('.') || self.ignored_dirs.iter().any(|ignored| ignored == name)
    }
}
