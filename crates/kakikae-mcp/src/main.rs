//! Kakikae MCP server binary.
//!
//! Exposes file editing tools to MCP clients (Claude Code, Gemini CLI, opencode)
//! over stdio.
//!
//! Usage:
//!   cargo run -p kakikae-mcp
//!   cargo run -p kakikae-mcp -- --list-depth 3 --ignore node_modules --ignore target
//!
//! Test with MCP inspector:
//!   npx @modelcontextprotocol/inspector cargo run -p kakikae-mcp

use anyhow::Result;
use clap::Parser;
use rmcp::{ServiceExt, transport::stdio};
use tracing_subscriber::{EnvFilter, filter::LevelFilter, fmt};

use kakikae_kernel::ToolConfig;
use kakikae_kernel::config::{DEFAULT_LIST_DEPTH, DEFAULT_MAX_VIEW_CHARS};
use kakikae_mcp::KakikaeMcp;

/// MCP server exposing file editing tools.
#[derive(Parser, Debug)]
#[command(name = "kakikae-mcp", version)]
#[command(about = "MCP server for view, create, insert, and str_replace file tools")]
struct Args {
    /// Directory levels listed when viewing a directory
    #[arg(long, default_value_t = DEFAULT_LIST_DEPTH)]
    list_depth: usize,

    /// Truncate rendered file views beyond this many characters
    #[arg(long, default_value_t = DEFAULT_MAX_VIEW_CHARS)]
    max_view_chars: usize,

    /// Entry name to hide from directory listings (repeatable, replaces the default)
    #[arg(long = "ignore", value_name = "NAME")]
    ignore: Vec<String>,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: tracing::Level,
}

impl Args {
    fn tool_config(&self) -> ToolConfig {
        let mut config = ToolConfig {
            list_depth: self.list_depth,
            max_view_chars: self.max_view_chars,
            ..ToolConfig::default()
        };
        if !self.ignore.is_empty() {
            config.ignored_dirs = self.ignore.clone();
        }
        config
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // Logs go to stderr, stdout carries the MCP protocol
    fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(LevelFilter::from_level(args.log_level).into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let config = args.tool_config();
    tracing::info!(
        list_depth = config.list_depth,
        max_view_chars = config.max_view_chars,
        ignored = ?config.ignored_dirs,
        "Starting kakikae-mcp"
    );

    let service = KakikaeMcp::with_config(config)
        .serve(stdio())
        .await
        .inspect_err(|e| {
            tracing::error!("MCP server error: {:?}", e);
        })?;

    tracing::info!("kakikae-mcp server ready");

    service.waiting().await?;

    tracing::info!("kakikae-mcp server shutting down");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_args() {
        let args = Args::parse_from(["kakikae-mcp"]);
        let config = args.tool_config();
        assert_eq!(config.list_depth, 2);
        assert_eq!(config.max_view_chars, 16_000);
        assert_eq!(config.ignored_dirs, vec!["node_modules".to_string()]);
        assert_eq!(args.log_level, tracing::Level::INFO);
    }

    #[test]
    fn test_ignore_flags_replace_defaults() {
        let args = Args::parse_from([
            "kakikae-mcp", "--list-depth", "3", "--ignore", "target", "--ignore", "dist",
        ]);
        let config = args.tool_config();
        assert_eq!(config.list_depth, 3);
        assert_eq!(config.ignored_dirs, vec!["target".to_string(), "dist".to_string()]);
    }
}
