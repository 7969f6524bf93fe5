//! Create: write or overwrite a whole file.

use serde::Serialize;

use super::FileTools;
use crate::error::{ToolError, ToolResult};
use crate::paths::expand_path;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOutcome {
    pub success: bool,
    pub path: String,
    /// UTF-8 encoded size, not character count.
    pub bytes_written: usize,
}

impl FileTools {
    /// Write `content` to `path`, creating missing parent directories.
    ///
    /// Existing files are overwritten without warning.
    #[tracing::instrument(skip(self, content), fields(len = content.len()), name = "engine.create")]
    pub async fn create(&self, path: &str, content: &str) -> ToolResult<CreateOutcome> {
        let target = expand_path(path);

        if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| ToolError::io("create directory", parent, e))?;
        }

        tokio::fs::write(&target, content)
            .await
            .map_err(|e| ToolError::io("write", &target, e))?;

        let shown = target.display().to_string();
        tracing::debug!(path = %shown, bytes = content.len(), "wrote file");
        Ok(CreateOutcome {
            success: true,
            path: shown,
            bytes_written: content.len(),
        })
    }
}
