//! CLI command definitions and handlers

use clap::{Parser, Subcommand};

pub mod args;
pub mod cleanup;
pub mod context;
pub mod org;

pub use args::{CleanupArgs, GlobalOptions, OutputFormat};
pub use context::CommandContext;

/// Disable inactive Atlassian Cloud accounts through the organisation admin API
#[derive(Parser, Debug)]
#[command(name = "atlassian-cleanup")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Admin API base URL
    #[arg(long, global = true, env = "ATLASSIAN_URL", hide_env = true)]
    pub api_url: Option<String>,

    /// Admin API bearer token
    #[arg(
        long,
        global = true,
        env = "ATLASSIAN_AUTH_TOKEN",
        hide_env_values = true
    )]
    pub token: Option<String>,

    /// Override config file location (defaults to ~/.atlassian-cleanup/config.yaml)
    #[arg(long, global = true, env = "ATLASSIAN_CLEANUP_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Output format (table, json)
    #[arg(
        long,
        global = true,
        env = "ATLASSIAN_CLEANUP_FORMAT",
        default_value = "table",
        hide_env = true
    )]
    pub format: OutputFormat,

    /// Maximum API requests per second
    #[arg(
        long,
        global = true,
        env = "ATLASSIAN_REQUESTS_PER_SECOND",
        hide_env = true
    )]
    pub requests_per_second: Option<u32>,

    /// Enable debug logging
    #[arg(long, global = true, env = "ATLASSIAN_CLEANUP_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find inactive accounts and disable them (dry run unless --enable-disable)
    Cleanup(CleanupArgs),

    /// List organisations visible to the API token
    Orgs,

    /// Display version information
    Version,
}
