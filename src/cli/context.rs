//! Command execution context
//!
//! Merges CLI/env options with the config file and defaults, and builds the
//! API client. Nothing below this layer reads the environment.

use crate::cleanup::filter::normalize_email;
use crate::cleanup::timestamp::parse_cutoff;
use crate::cli::{CleanupArgs, GlobalOptions, OutputFormat};
use crate::client::AtlassianClient;
use crate::config::{
    ApiSettings, CleanupSettings, ConfigFile, DEFAULT_API_URL, DEFAULT_DISABLE_REASON,
    DEFAULT_MAX_AGE_MONTHS, DEFAULT_MAX_DISABLE, DEFAULT_REQUESTS_PER_SECOND, OrgSelector,
};
use crate::error::{ConfigError, Result};

/// Context for command execution containing config, client, and output format.
pub struct CommandContext {
    /// Config file contents (empty when no file exists)
    pub config: ConfigFile,
    /// Admin API client
    pub client: AtlassianClient,
    /// Output format preference
    pub format: OutputFormat,
}

impl CommandContext {
    /// Load the config file, resolve API settings and build the client.
    pub fn new(opts: &GlobalOptions) -> Result<Self> {
        let config = ConfigFile::load_at(opts.config_ref())?;
        let api = resolve_api_settings(opts, &config)?;
        let client = AtlassianClient::new(&api.api_url, &api.auth_token, api.requests_per_second)?;

        Ok(Self {
            config,
            client,
            format: opts.format,
        })
    }

    /// Resolve the settings for a cleanup run.
    pub fn cleanup_settings(&self, args: &CleanupArgs) -> Result<CleanupSettings> {
        resolve_cleanup_settings(args, &self.config)
    }
}

/// Treat empty strings (e.g. `ATLASSIAN_ORG_ID=`) as unset.
fn non_empty(value: Option<&String>) -> Option<String> {
    value
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Resolve API settings: CLI/env first, then the config file, then defaults.
pub fn resolve_api_settings(opts: &GlobalOptions, config: &ConfigFile) -> Result<ApiSettings> {
    let auth_token = non_empty(opts.token.as_ref())
        .or_else(|| non_empty(config.auth_token.as_ref()))
        .ok_or(ConfigError::MissingToken)?;

    let api_url = non_empty(opts.api_url.as_ref())
        .or_else(|| non_empty(config.api_url.as_ref()))
        .unwrap_or_else(|| DEFAULT_API_URL.to_string());

    let requests_per_second = opts
        .requests_per_second
        .or(config.requests_per_second)
        .unwrap_or(DEFAULT_REQUESTS_PER_SECOND);
    if requests_per_second == 0 {
        return Err(
            ConfigError::Invalid("requests_per_second must be at least 1".to_string()).into(),
        );
    }

    Ok(ApiSettings {
        api_url,
        auth_token,
        requests_per_second,
    })
}

/// Resolve cleanup settings: CLI/env first, then the config file, then defaults.
///
/// An organisation ID from a layer wins over a name from the same layer.
/// Excluded emails from all layers are combined.
pub fn resolve_cleanup_settings(
    args: &CleanupArgs,
    config: &ConfigFile,
) -> Result<CleanupSettings> {
    let org = non_empty(args.org_id.as_ref())
        .map(OrgSelector::Id)
        .or_else(|| non_empty(args.org_name.as_ref()).map(OrgSelector::Name))
        .or_else(|| non_empty(config.org_id.as_ref()).map(OrgSelector::Id))
        .or_else(|| non_empty(config.org_name.as_ref()).map(OrgSelector::Name))
        .ok_or(ConfigError::MissingOrg)?;

    let last_active_before = args
        .last_active_before
        .as_deref()
        .map(parse_cutoff)
        .transpose()?;

    let mut excluded_emails: Vec<String> = Vec::new();
    for email in args.exclude_emails.iter().chain(&config.excluded_emails) {
        let email = email.trim();
        let key = normalize_email(email);
        if !key.is_empty() && !excluded_emails.iter().any(|e| normalize_email(e) == key) {
            excluded_emails.push(email.to_string());
        }
    }

    Ok(CleanupSettings {
        org,
        max_age_months: args
            .max_age_months
            .or(config.max_age_months)
            .unwrap_or(DEFAULT_MAX_AGE_MONTHS),
        last_active_before,
        max_disable: args
            .max_disable
            .or(config.max_disable)
            .unwrap_or(DEFAULT_MAX_DISABLE),
        enable_disable: args
            .enable_disable
            .or(config.enable_disable)
            .unwrap_or(false),
        disable_reason: non_empty(args.disable_reason.as_ref())
            .or_else(|| non_empty(config.disable_reason.as_ref()))
            .unwrap_or_else(|| DEFAULT_DISABLE_REASON.to_string()),
        excluded_emails,
    })
}
