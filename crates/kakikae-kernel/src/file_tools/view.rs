//! View: read a file with line numbers, or list a directory.

use serde::Serialize;

use super::FileTools;
use crate::error::{ToolError, ToolResult};
use crate::lines::{render_numbered, split_lines, truncate_chars};
use crate::listing::list_directory;
use crate::paths::expand_path;

/// What `view` found at the path.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ViewOutcome {
    Directory(DirectoryView),
    File(FileView),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectoryView {
    pub path: String,
    pub entries: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileView {
    pub path: String,
    pub total_lines: usize,
    /// The clamped `[start, end]` range actually rendered.
    pub viewed_range: [i64; 2],
    pub content: String,
}

impl FileTools {
    /// View a file or directory.
    ///
    /// `range` is a 1-indexed inclusive `[start, end]` pair for files; it is
    /// clamped to the file and ignored for directories.
    #[tracing::instrument(skip(self), name = "engine.view")]
    pub async fn view(&self, path: &str, range: Option<[i64; 2]>) -> ToolResult<ViewOutcome> {
        let target = expand_path(path);
        let meta = tokio::fs::metadata(&target)
            .await
            .map_err(|e| ToolError::io("stat", &target, e))?;
        let shown = target.display().to_string();

        if meta.is_dir() {
            let entries = list_directory(&target, self.config()).await?;
            tracing::debug!(path = %shown, entries = entries.len(), "listed directory");
            return Ok(ViewOutcome::Directory(DirectoryView {
                path: shown,
                entries,
            }));
        }

        let content = tokio::fs::read_to_string(&target)
            .await
            .map_err(|e| ToolError::io("read", &target, e))?;
        let lines = split_lines(&content);
        let total = lines.len() as i64;

        let (start, end) = match range {
            Some([start, end]) => (start.max(1), end.min(total)),
            None => (1, total),
        };

        // start >= 1 after clamping, so only an inverted range can be empty.
        let rendered = if start <= end {
            render_numbered(&lines, start as usize, end as usize)
        } else {
            String::new()
        };
        let rendered = truncate_chars(rendered, self.config().max_view_chars);

        tracing::debug!(path = %shown, start, end, total, "viewed file");
        Ok(ViewOutcome::File(FileView {
            path: shown,
            total_lines: lines.len(),
            viewed_range: [start, end],
            content: rendered,
        }))
    }
}
