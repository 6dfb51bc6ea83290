//! Arguments for the cleanup command

use clap::Args;

/// Cleanup run options
///
/// Every option falls back to the config file and then to a built-in default.
#[derive(Debug, Clone, Args, Default)]
pub struct CleanupArgs {
    /// Organisation display name (matched case-insensitively)
    #[arg(long, env = "ATLASSIAN_ORG_NAME", hide_env = true)]
    pub org_name: Option<String>,

    /// Organisation ID; skips name resolution and wins over --org-name
    #[arg(long, env = "ATLASSIAN_ORG_ID", hide_env = true)]
    pub org_id: Option<String>,

    /// Disable accounts inactive for this many months [default: 3]
    #[arg(long, env = "ATLASSIAN_MAX_AGE_MONTHS", hide_env = true)]
    pub max_age_months: Option<u32>,

    /// Explicit cutoff (DD-MM-YYYY, YYYY-MM-DD or RFC 3339); overrides --max-age-months
    #[arg(
        long,
        value_name = "DATE",
        env = "ATLASSIAN_LAST_ACTIVE_BEFORE",
        hide_env = true
    )]
    pub last_active_before: Option<String>,

    /// Maximum accounts processed per run [default: 10]
    #[arg(long, env = "ATLASSIAN_MAX_DISABLE", hide_env = true)]
    pub max_disable: Option<usize>,

    /// Actually disable accounts (otherwise a dry run); `--enable-disable=false` forces a dry run
    #[arg(
        long,
        value_name = "BOOL",
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "true",
        value_parser = clap::builder::BoolishValueParser::new(),
        env = "ATLASSIAN_ENABLE_DISABLE",
        hide_env = true
    )]
    pub enable_disable: Option<bool>,

    /// Message recorded with each disable call [default: "automated cleanup script"]
    #[arg(long, env = "ATLASSIAN_DISABLE_REASON", hide_env = true)]
    pub disable_reason: Option<String>,

    /// Email of an account that must never be disabled (repeatable)
    #[arg(
        long = "exclude-email",
        value_name = "EMAIL",
        value_delimiter = ',',
        env = "ATLASSIAN_EXCLUDED_EMAILS",
        hide_env = true
    )]
    pub exclude_emails: Vec<String>,

    /// Skip the confirmation prompt in live mode
    #[arg(long, short = 'y')]
    pub yes: bool,
}
