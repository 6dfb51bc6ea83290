//! Common CLI types shared across commands

/// Output format options
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Table format - human-readable, one row per account
    #[default]
    Table,
    /// JSON format - structured for scripts
    Json,
}
