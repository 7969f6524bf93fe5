//! File tool engines.
//!
//! `FileTools` holds the engine configuration; each operation lives in its
//! own module as an `impl FileTools` block and returns a serializable
//! outcome. Outcomes use camelCase keys because they are handed to agents
//! verbatim as the structured part of a tool response.
//!
//! ```text
//!   view ─────────► stat ─┬─► read_dir (sequential, depth-limited)
//!                         └─► read ─► number lines ─► truncate
//!   create ───────► create_dir_all ─► write
//!   insert ───────► read ─► splice lines ─► write
//!   str_replace ──► read ─► count matches ─► replace once ─► write
//! ```

pub mod create;
pub mod insert;
pub mod str_replace;
pub mod view;

use std::sync::Arc;

use crate::config::ToolConfig;

pub use create::CreateOutcome;
pub use insert::InsertOutcome;
pub use str_replace::ReplaceOutcome;
pub use view::{DirectoryView, FileView, ViewOutcome};

/// Entry point for the file operations.
#[derive(Debug, Clone, Default)]
pub struct FileTools {
    config: Arc<ToolConfig>,
}

impl FileTools {
    pub fn new(config: ToolConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    pub fn config(&self) -> &ToolConfig {
        &self.config
    }
}
