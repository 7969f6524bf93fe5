//! Tool response envelopes.
//!
//! Successful calls return the outcome twice: as JSON text for clients that
//! only read `content`, and as `structuredContent`. Engine errors become
//! `isError` results so the agent sees the message and can correct itself.
//! Argument validation is rejected by rmcp before a handler runs.

use kakikae_kernel::{ToolError, ToolResult};
use rmcp::ErrorData as McpError;
use rmcp::model::{CallToolResult, Content};
use serde::Serialize;

/// Wrap a serializable payload into a successful tool result.
pub fn json_result<T: Serialize>(payload: &T) -> Result<CallToolResult, McpError> {
    let value = serde_json::to_value(payload)
        .map_err(|e| McpError::internal_error(format!("failed to serialize result: {e}"), None))?;
    Ok(CallToolResult::structured(value))
}

/// Render an engine error as an error tool result.
pub fn tool_error(tool: &str, err: &ToolError) -> CallToolResult {
    tracing::info!(tool, error = %err, "tool call failed");
    CallToolResult::error(vec![Content::text(err.to_string())])
}

/// Convert an engine result into the tool response envelope.
pub fn respond<T: Serialize>(tool: &str, result: ToolResult<T>) -> Result<CallToolResult, McpError> {
    match result {
        Ok(payload) => json_result(&payload),
        Err(err) => Ok(tool_error(tool, &err)),
    }
}
