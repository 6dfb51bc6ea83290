//! Atlassian admin API client

use async_trait::async_trait;

use crate::error::Result;

pub mod atlassian;
#[cfg(test)]
pub mod fixtures;
#[cfg(test)]
pub mod mock;
pub mod models;
pub mod pagination;

pub use atlassian::AtlassianClient;
#[cfg(test)]
pub use mock::MockAtlassianClient;
pub use pagination::{Collected, Page, collect_pages, cursor_pages};

use models::{Organization, User};

/// Atlassian admin API operations used by the cleanup pipeline.
///
/// List methods fetch a single page; walk them with [`cursor_pages`].
#[async_trait]
pub trait AtlassianApi: Send + Sync {
    /// Fetch one page of organisations visible to the token.
    async fn list_orgs_page(&self, cursor: Option<String>) -> Result<Page<Organization>>;

    /// Fetch one page of users for an organisation.
    async fn list_users_page(&self, org_id: &str, cursor: Option<String>) -> Result<Page<User>>;

    /// Disable an account. Succeeds only on `204 No Content`.
    async fn disable_user(&self, account_id: &str, message: &str) -> Result<()>;
}
