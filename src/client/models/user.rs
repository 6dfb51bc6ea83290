//! User account models

use serde::{Deserialize, Serialize};

/// Account lifecycle status
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccountStatus {
    Active,
    Inactive,
    Closed,
    /// Any status this tool does not know about
    #[serde(other)]
    Other,
}

/// Organisation user account as returned by `GET admin/v1/orgs/{org_id}/users`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// Atlassian account ID
    pub account_id: String,

    /// Account type (atlassian, app, customer)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_type: Option<String>,

    /// Account lifecycle status
    pub account_status: AccountStatus,

    /// Display name
    #[serde(default)]
    pub name: String,

    /// Email address (absent for some app accounts)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Last activity across all products, as returned by the API
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_active: Option<String>,

    /// Per-product access records
    #[serde(default)]
    pub product_access: Vec<ProductAccess>,
}

/// Product access record for a single user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductAccess {
    /// Product key (e.g. "jira-software")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,

    /// Product name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Product site URL
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Last activity in this product
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_active: Option<String>,
}

/// Body of `POST users/{account_id}/manage/lifecycle/disable`
#[derive(Debug, Clone, Serialize)]
pub struct DisableRequest {
    pub message: String,
}

impl User {
    pub fn is_active(&self) -> bool {
        self.account_status == AccountStatus::Active
    }
}
