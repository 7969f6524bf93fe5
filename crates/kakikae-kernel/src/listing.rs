//! Directory listing for `view`.
//!
//! Produces a flat, indented listing: `name/` for directories, `name` for
//! everything else. Children of a listed directory follow it, prefixed with
//! two spaces and `parent/`. Dot-entries and configured names are skipped.
//! Subdirectories are walked one after another so output order is stable.

use std::path::{Path, PathBuf};

use futures::future::{BoxFuture, FutureExt};

use crate::config::ToolConfig;
use crate::error::{ToolError, ToolResult};

/// List `path` down to `config.list_depth` levels.
pub async fn list_directory(path: &Path, config: &ToolConfig) -> ToolResult<Vec<String>> {
    list_level(path.to_path_buf(), config.list_depth, config).await
}

fn list_level(dir: PathBuf, depth: usize, config: &ToolConfig) -> BoxFuture<'_, ToolResult<Vec<String>>> {
    async move {
        if depth == 0 {
            return Ok(Vec::new());
        }

        let mut reader = tokio::fs::read_dir(&dir)
            .await
            .map_err(|e| ToolError::io("read directory", &dir, e))?;

        let mut items = Vec::new();
        while let Some(entry) = reader
            .next_entry()
            .await
            .map_err(|e| ToolError::io("read directory", &dir, e))?
        {
            let name = entry.file_name().to_string_lossy().into_owned();
            if config.is_ignored(&name) {
                continue;
            }
            // Not following symlinks: a link to a directory lists as a file.
            let is_dir = entry
                .file_type()
                .await
                .map_err(|e| ToolError::io("stat", &entry.path(), e))?
                .is_dir();
            items.push((name, is_dir));
        }
        items.sort_by(|a, b| a.0.cmp(&b.0));

        let mut entries = Vec::with_capacity(items.len());
        for (name, is_dir) in items {
            if !is_dir {
                entries.push(name);
                continue;
            }
            entries.push(format!("{name}/"));
            if depth > 1 {
                let nested = list_level(dir.join(&name), depth - 1, config).await?;
                entries.extend(nested.into_iter().map(|sub| format!("  {name}/{sub}")));
            }
        }
        Ok(entries)
    }
    .boxed()
}
