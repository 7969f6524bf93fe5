//! StrReplace: exact, unique substring replacement.

use serde::Serialize;

use super::FileTools;
use crate::error::{ToolError, ToolResult};
use crate::lines::{lines_containing, preview};
use crate::paths::expand_path;

/// Characters of `old_str` echoed back in a not-found error.
const PREVIEW_CHARS: usize = 100;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReplaceOutcome {
    pub success: bool,
    pub path: String,
    pub replacements: usize,
}

/// Count non-overlapping literal occurrences, scanning left to right.
///
/// An empty needle never matches.
pub fn count_occurrences(haystack: &str, needle: &str) -> usize {
    if needle.is_empty() {
        return 0;
    }
    haystack.matches(needle).count()
}

/// Replace the single occurrence of `old` in `content` with `new`.
///
/// Fails on an empty file before searching, when `old` is absent, and when
/// it occurs more than once.
pub fn replace_unique(content: &str, old: &str, new: &str) -> ToolResult<String> {
    if content.is_empty() {
        return Err(ToolError::EmptyFile);
    }

    match count_occurrences(content, old) {
        0 => Err(ToolError::NotFound {
            preview: preview(old, PREVIEW_CHARS),
        }),
        1 => Ok(content.replacen(old, new, 1)),
        count => Err(ToolError::NotUnique {
            count,
            lines: lines_containing(content, old),
        }),
    }
}

impl FileTools {
    /// Replace the unique occurrence of `old_str` with `new_str`.
    ///
    /// A missing `new_str` deletes the match.
    #[tracing::instrument(skip(self, old_str, new_str), name = "engine.str_replace")]
    pub async fn str_replace(
        &self,
        path: &str,
        old_str: &str,
        new_str: Option<&str>,
    ) -> ToolResult<ReplaceOutcome> {
        let target = expand_path(path);
        let content = tokio::fs::read_to_string(&target)
            .await
            .map_err(|e| ToolError::io("read", &target, e))?;

        let updated = replace_unique(&content, old_str, new_str.unwrap_or_default())?;

        tokio::fs::write(&target, &updated)
            .await
            .map_err(|e| ToolError::io("write", &target, e))?;

        let shown = target.display().to_string();
        tracing::debug!(path = %shown, "replaced 1 occurrence");
        Ok(ReplaceOutcome {
            success: true,
            path: shown,
            replacements: 1,
        })
    }
}
