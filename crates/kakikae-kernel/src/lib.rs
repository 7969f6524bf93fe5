//! # kakikae-kernel
//!
//! File editing engines for kakikae.
//!
//! The kernel knows nothing about MCP. It owns the line model, the directory
//! listing policy, and the four file operations an agent is allowed to run:
//!
//! - `view`: read a file with line numbers, or list a directory two levels deep
//! - `create`: write a whole file, creating parent directories
//! - `insert`: splice text after a 1-indexed line
//! - `str_replace`: replace a literal substring that occurs exactly once
//!
//! Every mutating operation is one read-modify-write cycle. Nothing is cached
//! and nothing is locked; concurrent writers race and the last one wins.

pub mod config;
pub mod error;
pub mod file_tools;
pub mod lines;
pub mod listing;
pub mod paths;

pub use config::ToolConfig;
pub use error::{ToolError, ToolResult};
pub use file_tools::{
    CreateOutcome, DirectoryView, FileTools, FileView, InsertOutcome, ReplaceOutcome, ViewOutcome,
};
pub use paths::expand_path;
