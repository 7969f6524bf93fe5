//! Insert: splice text after a given line.

use serde::Serialize;

use super::FileTools;
use crate::error::{ToolError, ToolResult};
use crate::lines::split_lines;
use crate::paths::expand_path;

/// `insert_line` value meaning "end of file".
pub const END_OF_FILE: i64 = -1;

const MISSING_NEWLINE_WARNING: &str =
    "insert_text does not end with newline - text will run together with next line";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertOutcome {
    pub success: bool,
    pub path: String,
    /// 0-based line index the text was spliced in at.
    pub inserted_at: usize,
    pub lines_inserted: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warning: Option<String>,
}

/// New content plus where and how much was inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct Splice {
    pub content: String,
    pub index: usize,
    pub inserted: usize,
}

/// Splice `text` into `content` after the 1-indexed line `insert_line`.
///
/// `0` inserts before the first line. `-1` inserts at the end of the file,
/// before the empty line a trailing newline leaves, so the newline stays
/// last. One trailing `\n` on `text` is the terminator of its last line,
/// not an extra empty line.
pub fn splice_lines(content: &str, insert_line: i64, text: &str) -> ToolResult<Splice> {
    let mut lines = split_lines(content);
    let total = lines.len();

    let index = match insert_line {
        END_OF_FILE if content.is_empty() => 0,
        END_OF_FILE if content.ends_with('\n') => total - 1,
        END_OF_FILE => total,
        n if n < END_OF_FILE => return Err(ToolError::InvalidLine { value: n }),
        n if n as u64 > total as u64 => {
            return Err(ToolError::InsertBeyondEnd {
                requested: n,
                total,
            });
        }
        n => n as usize,
    };

    let body = text.strip_suffix('\n').unwrap_or(text);
    let new_lines: Vec<&str> = body.split('\n').collect();
    let inserted = new_lines.len();
    lines.splice(index..index, new_lines);

    Ok(Splice {
        content: lines.join("\n"),
        index,
        inserted,
    })
}

impl FileTools {
    /// Insert `text` after line `insert_line` of the file at `path`.
    ///
    /// Text without a trailing newline is still inserted, with a warning in
    /// the outcome: it will run into the following line.
    #[tracing::instrument(skip(self, text), name = "engine.insert")]
    pub async fn insert(&self, path: &str, insert_line: i64, text: &str) -> ToolResult<InsertOutcome> {
        let target = expand_path(path);
        let content = tokio::fs::read_to_string(&target)
            .await
            .map_err(|e| ToolError::io("read", &target, e))?;

        let splice = splice_lines(&content, insert_line, text)?;

        let warning = if text.ends_with('\n') {
            None
        } else {
            tracing::warn!(path = %target.display(), "inserted text lacks trailing newline");
            Some(MISSING_NEWLINE_WARNING.to_string())
        };

        tokio::fs::write(&target, &splice.content)
            .await
            .map_err(|e| ToolError::io("write", &target, e))?;

        let shown = target.display().to_string();
        tracing::debug!(path = %shown, at = splice.index, lines = splice.inserted, "inserted text");
        Ok(InsertOutcome {
            success: true,
            path: shown,
            inserted_at: splice.index,
            lines_inserted: splice.inserted,
            warning,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_at_beginning() {
        let splice = splice_lines("line1\nline2\n", 0, "line0\n").unwrap();
        assert_eq!(splice.content, "line0\nline1\nline2\n");
        assert_eq!(splice.index, 0);
        assert_eq!(splice.inserted, 1);
    }

    #[test]
    fn test_insert_at_end_with_trailing_newline() {
        let splice = splice_lines("line1\nline2\n", -1, "line3\n").unwrap();
        assert_eq!(splice.content, "line1\nline2\nline3\n");
        assert_eq!(splice.index, 2);
    }

    #[test]
    fn test_insert_at_end_without_trailing_newline() {
        let splice = splice_lines("line1\nline2", -1, "line3\n").unwrap();
        assert_eq!(splice.content, "line1\nline2\nline3");
        assert_eq!(splice.index, 2);
    }

    #[test]
    fn test_insert_at_end_of_empty_file() {
        let splice = splice_lines("", -1, "first\n").unwrap();
        assert_eq!(splice.content, "first\n");
        assert_eq!(splice.index, 0);
    }

    #[test]
    fn test_insert_after_line() {
        let splice = splice_lines("a\nb\nc\n", 2, "x\ny\n").unwrap();
        assert_eq!(splice.content, "a\nb\nx\ny\nc\n");
        assert_eq!(splice.index, 2);
        assert_eq!(splice.inserted, 2);
    }

    #[test]
    fn test_insert_after_last_counted_line() {
        // "a\nb\n" has 3 lines, the last one empty.
        let splice = splice_lines("a\nb\n", 3, "c").unwrap();
        assert_eq!(splice.content, "a\nb\n\nc");
    }

    #[test]
    fn test_insert_beyond_file_length() {
        let err = splice_lines("only line", 100, "x\n").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("beyond file length"));
        assert!(message.contains("100"));
        assert!(message.contains("(1 lines)"));
    }

    #[test]
    fn test_rejects_line_below_end_marker() {
        let err = splice_lines("a\n", -2, "x\n").unwrap_err();
        assert!(matches!(err, ToolError::InvalidLine { value: -2 }));
    }

    #[tokio::test]
    async fn test_insert_writes_file_and_warns_without_newline() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("f.txt");
        std::fs::write(&path, "one\ntwo\n").unwrap();
        let path_str = path.display().to_string();

        let outcome = FileTools::default().insert(&path_str, 1, "mid").await.unwrap();
        assert!(outcome.success);
        assert_eq!(outcome.inserted_at, 1);
        assert_eq!(outcome.lines_inserted, 1);
        assert!(outcome.warning.as_deref().unwrap().contains("newline"));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "one\nmid\ntwo\n");

        let outcome = FileTools::default().insert(&path_str, 0, "zero\n").await.unwrap();
        assert!(outcome.warning.is_none());
        let json = serde_json::to_value(&outcome).unwrap();
        assert!(json.get("warning").is_none());
        assert_eq!(json["insertedAt"], 0);
        assert_eq!(json["linesInserted"], 1);
    }

    #[tokio::test]
    async fn test_failed_insert_leaves_file_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("f.txt");
        std::fs::write(&path, "single\n").unwrap();

        let err = FileTools::default()
            .insert(&path.display().to_string(), 9, "x\n")
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::InsertBeyondEnd { requested: 9, total: 2 }));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "single\n");
    }

    #[tokio::test]
    async fn test_insert_into_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = FileTools::default()
            .insert(&dir.path().join("absent").display().to_string(), 0, "x\n")
            .await
            .unwrap_err();
        assert_eq!(err.io_kind(), Some(std::io::ErrorKind::NotFound));
    }
}
