//! Global CLI options shared across all commands

use crate::cli::{Cli, OutputFormat};

/// Global CLI options passed to all command handlers.
///
/// Captures the CLI/env layer; config file values and defaults are merged
/// in by `CommandContext`.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Output format (table, json)
    pub format: OutputFormat,

    /// Admin API base URL override
    pub api_url: Option<String>,

    /// Bearer token override
    pub token: Option<String>,

    /// Custom config file path
    pub config: Option<String>,

    /// Request pacing override
    pub requests_per_second: Option<u32>,
}

impl GlobalOptions {
    /// Create GlobalOptions from a parsed CLI struct.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            format: cli.format,
            api_url: cli.api_url.clone(),
            token: cli.token.clone(),
            config: cli.config.clone(),
            requests_per_second: cli.requests_per_second,
        }
    }

    /// Get config path as `Option<&str>`.
    pub fn config_ref(&self) -> Option<&str> {
        self.config.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_from_cli_copies_globals() {
        let cli = Cli::try_parse_from([
            "atlassian-cleanup",
            "--api-url",
            "http://localhost:8080",
            "--token",
            "t0ken",
            "--config",
            "/custom/path.yaml",
            "--requests-per-second",
            "3",
            "version",
        ])
        .unwrap();

        let opts = GlobalOptions::from_cli(&cli);

        assert_eq!(opts.api_url.as_deref(), Some("http://localhost:8080"));
        assert_eq!(opts.token.as_deref(), Some("t0ken"));
        assert_eq!(opts.config_ref(), Some("/custom/path.yaml"));
        assert_eq!(opts.requests_per_second, Some(3));
    }
}
