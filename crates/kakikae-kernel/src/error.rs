//! Error taxonomy for file tool engines.

use std::io;
use std::path::{Path, PathBuf};

/// Result alias for engine operations.
pub type ToolResult<T> = Result<T, ToolError>;

/// Errors raised by the file tool engines.
///
/// `Io` carries the untranslated filesystem error. The other variants are
/// semantic misuse: each message holds what the caller needs to retry
/// correctly (counts, line numbers, a preview of the search string).
#[derive(Debug, thiserror::Error)]
pub enum ToolError {
    #[error("failed to {op} '{}': {source}", .path.display())]
    Io {
        op: &'static str,
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("insert_line {requested} is beyond file length ({total} lines)")]
    InsertBeyondEnd { requested: i64, total: usize },

    #[error("insert_line must be -1 (end of file) or greater, got {value}")]
    InvalidLine { value: i64 },

    #[error("Cannot use str_replace on an empty file")]
    EmptyFile,

    #[error("old_str not found in file: \"{preview}\"")]
    NotFound { preview: String },

    #[error(
        "old_str appears {count} times (must be unique). Found on lines: {}",
        join_line_numbers(.lines)
    )]
    NotUnique { count: usize, lines: Vec<usize> },
}

impl ToolError {
    /// Wrap an I/O error with the operation and path that produced it.
    pub fn io(op: &'static str, path: &Path, source: io::Error) -> Self {
        Self::Io {
            op,
            path: path.to_path_buf(),
            source,
        }
    }

    /// The underlying `io::ErrorKind`, when this is a filesystem error.
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            Self::Io { source, .. } => Some(source.kind()),
            _ => None,
        }
    }
}

fn join_line_numbers(lines: &[usize]) -> String {
    lines
        .iter()
        .map(|n| n.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
