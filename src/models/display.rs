//! Display model implementations for table and JSON output
//!
//! Display models transform API and pipeline types into CLI-friendly formats
//! with appropriate column names and serialization.

use serde::Serialize;
use tabled::Tabled;

use crate::cleanup::{Action, DisableOutcome};
use crate::client::models::Organization;

/// Organisation display model for table/JSON output.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct OrgDisplay {
    /// Organisation ID
    #[tabled(rename = "ORG ID")]
    pub id: String,

    /// Organisation name
    #[tabled(rename = "NAME")]
    pub name: String,
}

impl From<Organization> for OrgDisplay {
    fn from(org: Organization) -> Self {
        Self {
            id: org.id,
            name: org.attributes.name,
        }
    }
}

/// One processed account in the cleanup report.
#[derive(Debug, Clone, Tabled, Serialize)]
pub struct OutcomeDisplay {
    #[tabled(rename = "ACCOUNT ID")]
    pub account_id: String,

    #[tabled(rename = "NAME")]
    pub name: String,

    #[tabled(rename = "EMAIL")]
    pub email: String,

    /// Last activity date (YYYY-MM-DD)
    #[tabled(rename = "LAST ACTIVE")]
    pub last_active: String,

    #[tabled(rename = "ACTION")]
    pub action: String,
}

impl From<&DisableOutcome> for OutcomeDisplay {
    fn from(outcome: &DisableOutcome) -> Self {
        let action = match &outcome.action {
            Action::Disabled => "disabled".to_string(),
            Action::WouldDisable => "would disable".to_string(),
            Action::Failed(reason) => format!("failed: {}", reason),
        };

        Self {
            account_id: outcome.account_id.clone(),
            name: if outcome.name.is_empty() {
                "--".to_string()
            } else {
                outcome.name.clone()
            },
            email: outcome.email.clone().unwrap_or_else(|| "--".to_string()),
            last_active: outcome.last_active.format("%Y-%m-%d").to_string(),
            action,
        }
    }
}
