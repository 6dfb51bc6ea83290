//! Configuration management for atlassian-cleanup
//!
//! Settings come from CLI flags, environment variables and an optional YAML
//! file, in that order of precedence. [`ConfigFile`] is the file layer;
//! [`ApiSettings`] and [`CleanupSettings`] are the resolved values handed to
//! the client and the pipeline.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::cleanup::DisablePlan;
use crate::cleanup::timestamp::cutoff_from_age;
use crate::error::{ConfigError, Result};

pub const DEFAULT_API_URL: &str = "https://api.atlassian.com";
pub const DEFAULT_MAX_AGE_MONTHS: u32 = 3;
pub const DEFAULT_MAX_DISABLE: usize = 10;
pub const DEFAULT_DISABLE_REASON: &str = "automated cleanup script";
pub const DEFAULT_REQUESTS_PER_SECOND: u32 = 10;

/// Contents of the optional YAML configuration file
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigFile {
    /// Admin API base URL
    pub api_url: Option<String>,

    /// Admin API bearer token
    pub auth_token: Option<String>,

    /// Organisation display name
    pub org_name: Option<String>,

    /// Organisation ID (skips name resolution)
    pub org_id: Option<String>,

    pub max_age_months: Option<u32>,

    pub max_disable: Option<usize>,

    pub enable_disable: Option<bool>,

    pub disable_reason: Option<String>,

    /// Accounts never disabled (bots, service users)
    pub excluded_emails: Vec<String>,

    pub requests_per_second: Option<u32>,
}

impl ConfigFile {
    /// Get the default config file path
    pub fn default_path() -> Result<PathBuf> {
        let home = dirs::home_dir().ok_or(ConfigError::Invalid(
            "Could not determine home directory".to_string(),
        ))?;

        Ok(home.join(".atlassian-cleanup").join("config.yaml"))
    }

    /// Load configuration, tolerating a missing file at the default location.
    ///
    /// An explicitly requested file must exist.
    pub fn load_at(path: Option<&str>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(PathBuf::from(path)),
            None => {
                let path = Self::default_path()?;
                if path.exists() {
                    Self::load_from(path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()).into());
        }

        let contents = std::fs::read_to_string(&path)?;
        if contents.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: ConfigFile = serde_yaml::from_str(&contents).map_err(ConfigError::from)?;
        Ok(config)
    }
}

/// How the organisation is selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrgSelector {
    /// Resolve by display name, case-insensitively
    Name(String),
    /// Use this organisation ID as-is
    Id(String),
}

/// Settings needed to talk to the admin API.
#[derive(Debug, Clone)]
pub struct ApiSettings {
    pub api_url: String,
    pub auth_token: String,
    pub requests_per_second: u32,
}

/// Fully resolved settings for a cleanup run.
#[derive(Debug, Clone)]
pub struct CleanupSettings {
    pub org: OrgSelector,
    pub max_age_months: u32,
    pub last_active_before: Option<DateTime<Utc>>,
    pub max_disable: usize,
    pub enable_disable: bool,
    pub disable_reason: String,
    pub excluded_emails: Vec<String>,
}

impl CleanupSettings {
    /// The inactivity cutoff: the explicit date if set, otherwise
    /// `max_age_months` before `now`.
    pub fn cutoff(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        self.last_active_before
            .unwrap_or_else(|| cutoff_from_age(now, self.max_age_months))
    }

    pub fn disable_plan(&self) -> DisablePlan {
        DisablePlan {
            max_disable: self.max_disable,
            live: self.enable_disable,
            reason: self.disable_reason.clone(),
        }
    }
}
