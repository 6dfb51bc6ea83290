//! Mock Atlassian API client for testing
//!
//! Serves pre-configured pages and records disable calls, so the pipeline can
//! be exercised without HTTP.

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::AtlassianApi;
use super::models::{Organization, User};
use super::pagination::Page;
use crate::error::{ApiError, Result};

/// Mock API client for testing.
///
/// Pages are addressed by cursors of the form `page-N`; every page except the
/// last links to the next one.
///
/// # Example
/// ```ignore
/// let mock = MockAtlassianClient::new()
///     .with_org_pages(vec![vec![org("org-1", "Acme")]])
///     .await;
/// ```
#[derive(Default)]
pub struct MockAtlassianClient {
    /// Organisation pages to return from list_orgs_page
    org_pages: Arc<Mutex<Vec<Vec<Organization>>>>,
    /// User pages to return from list_users_page
    user_pages: Arc<Mutex<Vec<Vec<User>>>>,
    /// Page index at which list_orgs_page fails
    fail_orgs_at: Arc<Mutex<Option<usize>>>,
    /// Page index at which list_users_page fails
    fail_users_at: Arc<Mutex<Option<usize>>>,
    /// Account IDs whose disable call fails
    failing_accounts: Arc<Mutex<HashSet<String>>>,
    /// Successful disable calls as (account_id, message)
    disabled: Arc<Mutex<Vec<(String, String)>>>,
    /// Track number of calls for verification
    call_count: Arc<Mutex<CallCounts>>,
}

/// Tracks API call counts for test verification
#[derive(Default, Debug, Clone)]
pub struct CallCounts {
    pub list_orgs: usize,
    pub list_users: usize,
    pub disable_user: usize,
}

impl MockAtlassianClient {
    /// Create a new mock client with default (empty) responses.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configure organisation pages.
    pub async fn with_org_pages(self, pages: Vec<Vec<Organization>>) -> Self {
        *self.org_pages.lock().await = pages;
        self
    }

    /// Configure user pages.
    pub async fn with_user_pages(self, pages: Vec<Vec<User>>) -> Self {
        *self.user_pages.lock().await = pages;
        self
    }

    /// Serve all users on a single page.
    pub async fn with_users(self, users: Vec<User>) -> Self {
        self.with_user_pages(vec![users]).await
    }

    /// Fail the organisation listing when page `index` is requested.
    pub async fn failing_orgs_at(self, index: usize) -> Self {
        *self.fail_orgs_at.lock().await = Some(index);
        self
    }

    /// Fail the user listing when page `index` is requested.
    pub async fn failing_users_at(self, index: usize) -> Self {
        *self.fail_users_at.lock().await = Some(index);
        self
    }

    /// Make the disable call fail for an account.
    pub async fn failing_disable_for(self, account_id: &str) -> Self {
        self.failing_accounts
            .lock()
            .await
            .insert(account_id.to_string());
        self
    }

    /// Get the call counts for verification in tests.
    pub async fn call_counts(&self) -> CallCounts {
        self.call_count.lock().await.clone()
    }

    /// Account IDs successfully disabled, in call order.
    pub async fn disabled_accounts(&self) -> Vec<String> {
        self.disabled
            .lock()
            .await
            .iter()
            .map(|(id, _)| id.clone())
            .collect()
    }

    /// Messages sent with successful disable calls, in call order.
    pub async fn disable_messages(&self) -> Vec<String> {
        self.disabled
            .lock()
            .await
            .iter()
            .map(|(_, message)| message.clone())
            .collect()
    }
}

/// Serve page `cursor` out of `pages`, linking to the next one.
fn serve_page<T: Clone>(
    pages: &[Vec<T>],
    cursor: Option<String>,
    fail_at: Option<usize>,
    path: &str,
) -> Result<Page<T>> {
    let index = match cursor {
        None => 0,
        Some(cursor) => cursor
            .strip_prefix("page-")
            .and_then(|n| n.parse::<usize>().ok())
            .ok_or_else(|| ApiError::BadRequest(format!("Unknown cursor {}", cursor)))?,
    };

    if fail_at == Some(index) {
        return Err(ApiError::ServerError(format!("page {} unavailable", index)).into());
    }

    let data = pages.get(index).cloned().unwrap_or_default();
    if index + 1 < pages.len() {
        Ok(Page::with_next(
            data,
            format!("https://api.atlassian.com{}?cursor=page-{}", path, index + 1),
        ))
    } else {
        Ok(Page::last(data))
    }
}

#[async_trait]
impl AtlassianApi for MockAtlassianClient {
    async fn list_orgs_page(&self, cursor: Option<String>) -> Result<Page<Organization>> {
        self.call_count.lock().await.list_orgs += 1;
        let pages = self.org_pages.lock().await;
        let fail_at = *self.fail_orgs_at.lock().await;
        serve_page(&pages, cursor, fail_at, "/admin/v1/orgs")
    }

    async fn list_users_page(&self, org_id: &str, cursor: Option<String>) -> Result<Page<User>> {
        self.call_count.lock().await.list_users += 1;
        let pages = self.user_pages.lock().await;
        let fail_at = *self.fail_users_at.lock().await;
        serve_page(
            &pages,
            cursor,
            fail_at,
            &format!("/admin/v1/orgs/{}/users", org_id),
        )
    }

    async fn disable_user(&self, account_id: &str, message: &str) -> Result<()> {
        self.call_count.lock().await.disable_user += 1;

        if self.failing_accounts.lock().await.contains(account_id) {
            return Err(ApiError::ServerError(format!("cannot disable {}", account_id)).into());
        }

        self.disabled
            .lock()
            .await
            .push((account_id.to_string(), message.to_string()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::fixtures::{UserBuilder, org};
    use crate::client::{collect_pages, cursor_pages};

    #[tokio::test]
    async fn test_mock_pages_link_together() {
        let mock = MockAtlassianClient::new()
            .with_org_pages(vec![vec![org("o1", "One")], vec![org("o2", "Two")]])
            .await;

        let collected =
            collect_pages(cursor_pages(|cursor| mock.list_orgs_page(cursor)), "orgs").await;

        assert_eq!(collected.items.len(), 2);
        assert_eq!(mock.call_counts().await.list_orgs, 2);
    }

    #[tokio::test]
    async fn test_mock_records_disable_calls() {
        let mock = MockAtlassianClient::new()
            .with_users(vec![UserBuilder::new("u1").build()])
            .await
            .failing_disable_for("u2")
            .await;

        mock.disable_user("u1", "bye").await.unwrap();
        assert!(mock.disable_user("u2", "bye").await.is_err());

        assert_eq!(mock.disabled_accounts().await, vec!["u1".to_string()]);
        assert_eq!(mock.disable_messages().await, vec!["bye".to_string()]);
        assert_eq!(mock.call_counts().await.disable_user, 2);
    }
}
