//! MCP server exposing kakikae file editing tools.
//!
//! Provides `view`, `create`, `insert`, and `str_replace` via Model Context
//! Protocol, for agents like Claude Code, Gemini CLI, and opencode.
//!
//! ## Module Structure
//!
//! - `models`: Canonical request types for MCP tools
//! - `schema`: Alias resolution and strict argument validation
//! - `response`: Tool response envelopes

mod models;
mod response;
pub mod schema;

use rmcp::{
    ErrorData as McpError, ServerHandler,
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{CallToolResult, Implementation, ServerCapabilities, ServerInfo, Tool},
    tool, tool_handler, tool_router,
};

use kakikae_kernel::{FileTools, ToolConfig};

pub use models::*;
use response::respond;
pub use schema::Strict;

/// MCP server exposing file editing tools.
#[derive(Clone)]
pub struct KakikaeMcp {
    tools: FileTools,
    tool_router: ToolRouter<Self>,
}

impl std::fmt::Debug for KakikaeMcp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KakikaeMcp")
            .field("config", self.tools.config())
            .field("tool_router", &self.tool_router)
            .finish()
    }
}

impl KakikaeMcp {
    /// Create a server with default engine configuration.
    pub fn new() -> Self {
        Self::with_config(ToolConfig::default())
    }

    /// Create a server with the given engine configuration.
    pub fn with_config(config: ToolConfig) -> Self {
        Self {
            tools: FileTools::new(config),
            tool_router: Self::tool_router(),
        }
    }

    /// Tool definitions as published in `tools/list`.
    pub fn list_tools(&self) -> Vec<Tool> {
        self.tool_router.list_all()
    }
}

impl Default for KakikaeMcp {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl KakikaeMcp {
    #[tool(
        name = "view",
        description = "View file contents or list directory.

For files:
- Returns content with line numbers (format: \"     N\\t<content>\")
- Use view_range to read specific lines [start, end] (1-indexed, inclusive)
- Large files are truncated at 16000 characters

For directories:
- Lists contents with type indicator (/ for directories)
- Shows 2 levels deep by default
- Ignores hidden files and node_modules",
        annotations(title = "View", read_only_hint = true, destructive_hint = false)
    )]
    async fn view(
        &self,
        Parameters(Strict(req)): Parameters<Strict<ViewRequest>>,
    ) -> Result<CallToolResult, McpError> {
        respond("view", self.tools.view(&req.path, req.view_range).await)
    }

    #[tool(
        name = "create",
        description = "Create or overwrite a file with the specified content.

- Creates parent directories if they don't exist
- Overwrites existing files without warning
- Use absolute paths",
        annotations(title = "Create", read_only_hint = false, destructive_hint = true)
    )]
    async fn create(
        &self,
        Parameters(Strict(req)): Parameters<Strict<CreateRequest>>,
    ) -> Result<CallToolResult, McpError> {
        respond("create", self.tools.create(&req.path, &req.content).await)
    }

    #[tool(
        name = "insert",
        description = "Insert text at a specific line in a file.

- insert_line = 0: Insert at the beginning
- insert_line = N: Insert after line N
- insert_line = -1: Insert at the end of the file
- insert_text should typically end with a newline
- Use absolute paths",
        annotations(title = "Insert", read_only_hint = false, destructive_hint = true)
    )]
    async fn insert(
        &self,
        Parameters(Strict(req)): Parameters<Strict<InsertRequest>>,
    ) -> Result<CallToolResult, McpError> {
        respond(
            "insert",
            self.tools.insert(&req.path, req.insert_line, &req.insert_text).await,
        )
    }

    #[tool(
        name = "str_replace",
        description = "Replace an exact string in a file.

- old_str must match exactly and be unique in the file
- If old_str appears 0 times or more than once, the operation fails
- If new_str is omitted, old_str is deleted
- Use absolute paths",
        annotations(title = "String Replace", read_only_hint = false, destructive_hint = true)
    )]
    async fn str_replace(
        &self,
        Parameters(Strict(req)): Parameters<Strict<StrReplaceRequest>>,
    ) -> Result<CallToolResult, McpError> {
        respond(
            "str_replace",
            self.tools
                .str_replace(&req.path, &req.old_str, req.new_str.as_deref())
                .await,
        )
    }
}

#[tool_handler]
impl ServerHandler for KakikaeMcp {
    fn get_info(&self) -> ServerInfo {
        ServerInfo::new(ServerCapabilities::builder().enable_tools().build())
            .with_instructions(
                "File editing tools. Use view to read files and list directories, create to write whole files, insert to add lines, and str_replace for exact unique replacements.",
            )
            .with_server_info(Implementation::new(
                "kakikae-mcp",
                env!("CARGO_PKG_VERSION"),
            ))
    }
}
