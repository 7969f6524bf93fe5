//! MCP request types.
//!
//! These are the canonical shapes advertised in `tools/list`. Legacy field
//! names are declared in each type's [`ToolArgs::ALIASES`] table and never
//! show up in the published schema.

use rmcp::schemars;
use serde::Deserialize;

use crate::schema::{ArgumentError, ToolArgs};

/// View a file with line numbers or list a directory.
#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ViewRequest {
    /// Absolute path to file or directory
    #[schemars(description = "Absolute path to file or directory")]
    pub path: String,
    /// Line range [start, end] for text files
    #[schemars(description = "Line range [start, end] for text files (1-indexed, inclusive)")]
    pub view_range: Option<[i64; 2]>,
}

impl ToolArgs for ViewRequest {}

/// Create or overwrite a file.
#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct CreateRequest {
    /// Absolute path where the file will be created
    #[schemars(description = "Absolute path where file will be created")]
    pub path: String,
    /// Full file content
    #[schemars(description = "Content to write to the file")]
    pub content: String,
}

impl ToolArgs for CreateRequest {
    const ALIASES: &'static [(&'static str, &'static str)] = &[("file_text", "content")];
}

/// Insert text after a line.
#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct InsertRequest {
    /// Absolute path to file
    #[schemars(description = "Absolute path to file")]
    pub path: String,
    /// Line to insert after
    #[schemars(
        description = "Line number to insert after (0 = beginning, -1 = end of file)",
        range(min = -1)
    )]
    pub insert_line: i64,
    /// Text to insert
    #[schemars(description = "Text to insert (should end with newline)")]
    pub insert_text: String,
}

impl ToolArgs for InsertRequest {
    fn validate(&self) -> Result<(), ArgumentError> {
        if self.insert_line < -1 {
            return Err(ArgumentError::BelowMinimum {
                field: "insert_line",
                min: -1,
                value: self.insert_line,
            });
        }
        Ok(())
    }
}

/// Replace a unique exact string.
#[derive(Debug, Deserialize, schemars::JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct StrReplaceRequest {
    /// Absolute path to file
    #[schemars(description = "Absolute path to file")]
    pub path: String,
    /// Exact string to find
    #[schemars(description = "Exact string to find (must be unique)")]
    pub old_str: String,
    /// Replacement, or omit to delete
    #[schemars(description = "Replacement string (omit to delete)")]
    pub new_str: Option<String>,
}

impl ToolArgs for StrReplaceRequest {
    const ALIASES: &'static [(&'static str, &'static str)] =
        &[("old_string", "old_str"), ("new_string", "new_str")];
}
