//! Test fixtures and builders for API model types
//!
//! Import via `use crate::client::fixtures::*` in test modules.

#![allow(dead_code)]

use super::models::org::OrgAttributes;
use super::models::user::{AccountStatus, ProductAccess};
use super::models::{Organization, User};

/// Build an organisation with the given id and display name.
pub fn org(id: &str, name: &str) -> Organization {
    Organization {
        id: id.to_string(),
        kind: Some("orgs".to_string()),
        attributes: OrgAttributes {
            name: name.to_string(),
        },
    }
}

/// Builder for creating test User instances.
///
/// # Example
/// ```ignore
/// let user = UserBuilder::new("u1")
///     .last_active("2022-01-01T00:00:00Z")
///     .product("jira", "2022-06-01T00:00:00Z")
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct UserBuilder {
    account_id: String,
    name: String,
    email: Option<String>,
    status: AccountStatus,
    last_active: Option<String>,
    product_access: Vec<ProductAccess>,
}

impl UserBuilder {
    /// Create an active user with a derived name and email and no activity data.
    pub fn new(account_id: impl Into<String>) -> Self {
        let account_id = account_id.into();
        Self {
            name: format!("User {}", account_id),
            email: Some(format!("{}@example.com", account_id)),
            account_id,
            status: AccountStatus::Active,
            last_active: None,
            product_access: Vec::new(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn no_email(mut self) -> Self {
        self.email = None;
        self
    }

    pub fn status(mut self, status: AccountStatus) -> Self {
        self.status = status;
        self
    }

    pub fn last_active(mut self, timestamp: impl Into<String>) -> Self {
        self.last_active = Some(timestamp.into());
        self
    }

    /// Add a product access record with a last-active timestamp.
    pub fn product(mut self, key: &str, last_active: impl Into<String>) -> Self {
        self.product_access.push(ProductAccess {
            key: Some(key.to_string()),
            name: Some(key.to_string()),
            url: None,
            last_active: Some(last_active.into()),
        });
        self
    }

    /// Add a product access record the user has never used.
    pub fn unused_product(mut self, key: &str) -> Self {
        self.product_access.push(ProductAccess {
            key: Some(key.to_string()),
            name: Some(key.to_string()),
            url: None,
            last_active: None,
        });
        self
    }

    pub fn build(self) -> User {
        User {
            account_id: self.account_id,
            account_type: Some("atlassian".to_string()),
            account_status: self.status,
            name: self.name,
            email: self.email,
            last_active: self.last_active,
            product_access: self.product_access,
        }
    }
}
