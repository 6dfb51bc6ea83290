//! Error types for atlassian-cleanup

use std::time::Duration;
use thiserror::Error;

/// Result type alias for cleanup operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the application
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("Interactive prompt error: {0}")]
    Dialoguer(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{failed} of {attempted} disable calls failed; see the log for details")]
    DisableFailures { failed: usize, attempted: usize },
}

impl From<dialoguer::Error> for Error {
    fn from(err: dialoguer::Error) -> Self {
        Error::Dialoguer(format!("{} (pass --yes to run without a prompt)", err))
    }
}

/// API-related errors
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    #[error("Authentication failed. Check the API token.")]
    Unauthorized,

    #[error("Access denied. The API token lacks organisation admin permission.")]
    Forbidden,

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Rate limit exceeded. Retry after {0:?}")]
    RateLimit(Duration),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Unexpected status {status}: {body}")]
    UnexpectedStatus { status: u16, body: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid API response: {0}")]
    InvalidResponse(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Network("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Network("Failed to connect to API".to_string())
        } else {
            ApiError::Network(err.to_string())
        }
    }
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    NotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("API token not configured. Set --token or ATLASSIAN_AUTH_TOKEN.")]
    MissingToken,

    #[error("Organisation not configured. Set --org-name or --org-id.")]
    MissingOrg,

    #[error("Organisation '{name}' not found among {searched} visible organisations")]
    OrgNotFound { name: String, searched: usize },

    #[error(
        "Organisation '{name}' not found among {searched} organisations listed before the listing failed: {cause}"
    )]
    OrgNotFoundPartial {
        name: String,
        searched: usize,
        cause: ApiError,
    },

    #[error("Invalid date '{0}'. Use DD-MM-YYYY, YYYY-MM-DD or an RFC 3339 timestamp.")]
    InvalidDate(String),
}

impl From<serde_yaml::Error> for ConfigError {
    fn from(err: serde_yaml::Error) -> Self {
        ConfigError::ParseError(err.to_string())
    }
}
