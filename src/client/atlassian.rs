//! Atlassian admin API client implementation

use std::num::NonZeroU32;
use std::time::Duration;

use async_trait::async_trait;
use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use governor::{Quota, RateLimiter};
use log::debug;
use reqwest::header::ACCEPT;
use reqwest::{Client as HttpClient, Response, StatusCode};
use serde::de::DeserializeOwned;

use super::models::{DisableRequest, Organization, User};
use super::{AtlassianApi, Page};
use crate::error::{ApiError, ConfigError, Result};

/// Atlassian admin API client
pub struct AtlassianClient {
    http: HttpClient,
    base_url: String,
    token: String,
    rate_limiter: RateLimiter<NotKeyed, InMemoryState, DefaultClock>,
}

impl AtlassianClient {
    /// Create a new client.
    ///
    /// Every request waits on a direct rate limiter allowing
    /// `requests_per_second` requests.
    pub fn new(base_url: &str, token: &str, requests_per_second: u32) -> Result<Self> {
        let http = HttpClient::builder()
            .user_agent(concat!("atlassian-cleanup/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let rate = NonZeroU32::new(requests_per_second).ok_or_else(|| {
            ConfigError::Invalid("requests_per_second must be at least 1".to_string())
        })?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: token.to_string(),
            rate_limiter: RateLimiter::direct(Quota::per_second(rate)),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Fetch one page from a cursor-paginated list endpoint.
    async fn get_page<T: DeserializeOwned>(
        &self,
        path: &str,
        cursor: Option<String>,
    ) -> Result<Page<T>> {
        self.rate_limiter.until_ready().await;

        let mut request = self
            .http
            .get(self.url(path))
            .bearer_auth(&self.token)
            .header(ACCEPT, "application/json");
        if let Some(cursor) = &cursor {
            request = request.query(&[("cursor", cursor)]);
        }

        debug!("GET {} (cursor: {:?})", path, cursor);
        let response = request.send().await.map_err(ApiError::from)?;

        match response.status() {
            StatusCode::OK => {
                let page = response.json::<Page<T>>().await.map_err(|e| {
                    ApiError::InvalidResponse(format!("Failed to parse response: {}", e))
                })?;
                Ok(page)
            }
            _ => Err(error_from_response(response).await.into()),
        }
    }
}

/// Map a non-success response to an [`ApiError`].
async fn error_from_response(response: Response) -> ApiError {
    let status = response.status();
    let retry_after = response
        .headers()
        .get("retry-after")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<u64>().ok());
    let body = response.text().await.unwrap_or_default();

    match status {
        StatusCode::UNAUTHORIZED => ApiError::Unauthorized,
        StatusCode::FORBIDDEN => ApiError::Forbidden,
        StatusCode::NOT_FOUND => ApiError::NotFound(if body.is_empty() {
            "Resource not found".to_string()
        } else {
            body
        }),
        StatusCode::TOO_MANY_REQUESTS => {
            ApiError::RateLimit(Duration::from_secs(retry_after.unwrap_or(60)))
        }
        StatusCode::BAD_REQUEST | StatusCode::UNPROCESSABLE_ENTITY => ApiError::BadRequest(body),
        status if status.is_server_error() => ApiError::ServerError(if body.is_empty() {
            format!("Server error: {}", status)
        } else {
            body
        }),
        status => ApiError::UnexpectedStatus {
            status: status.as_u16(),
            body,
        },
    }
}

#[async_trait]
impl AtlassianApi for AtlassianClient {
    async fn list_orgs_page(&self, cursor: Option<String>) -> Result<Page<Organization>> {
        self.get_page("/admin/v1/orgs", cursor).await
    }

    async fn list_users_page(&self, org_id: &str, cursor: Option<String>) -> Result<Page<User>> {
        let path = format!("/admin/v1/orgs/{}/users", org_id);
        self.get_page(&path, cursor).await
    }

    async fn disable_user(&self, account_id: &str, message: &str) -> Result<()> {
        self.rate_limiter.until_ready().await;

        let path = format!("/users/{}/manage/lifecycle/disable", account_id);
        debug!("POST {}", path);

        let response = self
            .http
            .post(self.url(&path))
            .bearer_auth(&self.token)
            .json(&DisableRequest {
                message: message.to_string(),
            })
            .send()
            .await
            .map_err(ApiError::from)?;

        match response.status() {
            StatusCode::NO_CONTENT => Ok(()),
            _ => Err(error_from_response(response).await.into()),
        }
    }
}
